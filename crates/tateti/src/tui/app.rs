//! Application state and logic.

use ratatui::style::Color;
use tateti_engine::{GameEngine, GameState, Position, ScoreStore, Status};
use tracing::{debug, info};

use super::input::{Action, move_cursor};
use crate::store::PreferenceStore;
use crate::theme::{DEFAULT_ACCENT, accent_or_default, next_accent};

/// Main application state.
pub struct App<S> {
    engine: GameEngine<S>,
    cursor: Position,
    message: Option<String>,
    confirming_reset: bool,
    accent_name: Option<String>,
    accent: Color,
    should_quit: bool,
}

impl<S: ScoreStore + PreferenceStore> App<S> {
    /// Creates the application, restoring score and accent from `store`.
    pub fn new(store: S) -> Self {
        let accent_name = store.load_accent();
        let accent = accent_or_default(accent_name.as_deref());
        Self {
            engine: GameEngine::new(store),
            cursor: Position::Center,
            message: None,
            confirming_reset: false,
            accent_name,
            accent,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// The current round.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Transient feedback for the last action (errors, round results).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while waiting for the player to confirm a match reset.
    pub fn confirming_reset(&self) -> bool {
        self.confirming_reset
    }

    /// Accent color for titles and borders.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one player action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Mark => self.mark(self.cursor.to_index()),
            Action::MarkAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.mark(index);
            }
            Action::Undo => {
                self.message = self.engine.undo().err().map(|e| e.to_string());
            }
            Action::NewRound => {
                self.engine.reset_round();
                self.cursor = Position::Center;
                self.message = None;
            }
            Action::RequestResetMatch => {
                self.confirming_reset = true;
            }
            Action::Confirm => {
                if self.confirming_reset {
                    self.engine.reset_match();
                    self.cursor = Position::Center;
                    self.message = Some("Scores reset".to_string());
                }
                self.confirming_reset = false;
            }
            Action::Cancel => {
                self.confirming_reset = false;
            }
            Action::CycleAccent => {
                let name = next_accent(self.accent_name.as_deref());
                self.engine.store_mut().save_accent(name);
                self.accent = accent_or_default(Some(name));
                self.accent_name = Some(name.to_string());
                info!(accent = name, "Accent color changed");
            }
            Action::DefaultAccent => {
                self.engine.store_mut().clear_accent();
                self.accent = DEFAULT_ACCENT;
                self.accent_name = None;
                info!("Accent color reset");
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn mark(&mut self, index: usize) {
        self.message = match self.engine.apply_move(index) {
            Ok(state) => match state.status() {
                Status::Won { winner, .. } => {
                    Some(format!("{} wins! Press 'r' for a new round.", winner))
                }
                Status::Draw => Some("Draw! Press 'r' for a new round.".to_string()),
                Status::InProgress => None,
            },
            Err(e) => Some(e.to_string()),
        };
    }
}

/// Headline for a round: whose turn it is, or how it ended.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        Status::InProgress => format!("Turn: {}", state.current_player()),
        Status::Won { winner, .. } => format!("Winner: {}", winner),
        Status::Draw => "Draw".to_string(),
    }
}
