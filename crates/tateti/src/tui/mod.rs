//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, status_line};
pub use input::{Action, Direction, map_key, move_cursor};
pub use ui::draw;

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::store::FileStore;

/// Runs the game until the player quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or read from.
#[instrument(skip(config), fields(store = %config.store_path().display()))]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting Tateti TUI");

    let mut app = App::new(FileStore::new(config.store_path()));

    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = %app.engine().score(), "Leaving Tateti TUI");
    res
}

/// Puts the terminal back in cooked mode on the main screen when dropped,
/// including on early returns and panics.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen. Every step is attempted even
/// if an earlier one fails; the first error is returned.
fn restore(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<FileStore>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = map_key(key, app.confirming_reset())
        {
            app.handle(action);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
