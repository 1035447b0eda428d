//! One-shot commands that work on the store without the terminal UI.
//!
//! Each returns the line to print.

use anyhow::{Result, bail};
use tateti_engine::{GameEngine, ScoreStore};
use tracing::{info, instrument};

use crate::store::PreferenceStore;
use crate::theme::parse_accent;

/// Describes the persisted score.
#[instrument(skip(store))]
pub fn show_score<S: ScoreStore>(store: S) -> String {
    let engine = GameEngine::new(store);
    format!("Score: {}", engine.score())
}

/// Zeroes the persisted score.
#[instrument(skip(store))]
pub fn reset_score<S: ScoreStore>(store: S) -> String {
    let mut engine = GameEngine::new(store);
    let before = engine.score();
    engine.reset_match();
    info!(%before, "Score reset from command line");
    format!("Score reset (was {})", before)
}

/// Shows, sets or clears the accent color.
///
/// # Errors
///
/// Fails if `value` is not a recognizable color.
#[instrument(skip(store))]
pub fn accent<S: PreferenceStore>(
    store: &mut S,
    value: Option<&str>,
    clear: bool,
) -> Result<String> {
    if clear {
        store.clear_accent();
        return Ok("Accent color reset to default".to_string());
    }

    match value {
        Some(value) => {
            if parse_accent(value).is_none() {
                bail!("'{}' is not a color (try a name like \"green\" or \"#1e90ff\")", value);
            }
            let value = value.trim();
            store.save_accent(value);
            Ok(format!("Accent color set to {}", value))
        }
        None => Ok(match store.load_accent() {
            Some(current) => format!("Accent color: {}", current),
            None => "Accent color: default".to_string(),
        }),
    }
}
