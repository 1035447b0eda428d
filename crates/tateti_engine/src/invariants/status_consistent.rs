//! Status consistency invariant: the status reflects the board.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::types::{GameState, Status};

/// Invariant: `Won` iff the board holds a line, `Draw` iff the board is
/// full without one, `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match check_winner(board) {
            Some(win) => *state.status() == Status::from(win),
            None if is_full(board) => *state.status() == Status::Draw,
            None => *state.status() == Status::InProgress,
        }
    }

    fn description() -> &'static str {
        "Status agrees with the lines on the board"
    }
}
