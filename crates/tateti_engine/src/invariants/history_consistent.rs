//! History consistency invariant: history and board agree cell for cell.

use super::Invariant;
use crate::types::{Cell, GameState};

/// Invariant: every history entry is marked on the board by its player,
/// and no other cell is marked.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let occupied = board.cells().iter().filter(|c| **c != Cell::Empty).count();

        occupied == state.history().len()
            && state
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Cell::Occupied(mv.player))
    }

    fn description() -> &'static str {
        "History matches the occupied cells of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Move, Player};

    #[test]
    fn test_empty_round_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_recorded_moves_hold() {
        let mut state = GameState::new();
        state.place(Move::new(Player::X, Position::Center));
        state.place(Move::new(Player::O, Position::TopLeft));
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut state = GameState::new();
        state.place(Move::new(Player::X, Position::Center));
        state
            .board_mut()
            .set(Position::TopLeft, Cell::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut state = GameState::new();
        state.place(Move::new(Player::X, Position::Center));
        state
            .board_mut()
            .set(Position::Center, Cell::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
