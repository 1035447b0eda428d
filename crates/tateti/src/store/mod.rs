//! Key-value persistence for scores and UI preferences.

mod error;
mod file;

pub use error::StoreError;
pub use file::{ACCENT_KEY, FileStore, SCORE_KEY};

/// Storage for presentation preferences.
///
/// Same contract as [`tateti_engine::ScoreStore`]: failures are absorbed
/// by the implementation, never surfaced to the caller.
pub trait PreferenceStore {
    /// Loads the saved accent color, if any.
    fn load_accent(&self) -> Option<String>;

    /// Saves the accent color.
    fn save_accent(&mut self, color: &str);

    /// Forgets the saved accent color.
    fn clear_accent(&mut self);
}
