//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the round is in
/// progress, the player to move is X after an even number of moves.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history.iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mv.player == expected
        });
        if !alternates {
            return false;
        }

        if !state.status().is_in_progress() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Move;

    #[test]
    fn test_fresh_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_history_holds() {
        let mut state = GameState::new();
        state.place(Move::new(Player::X, Position::Center));
        state.set_current_player(Player::O);
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut state = GameState::new();
        state.place(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_o_first_violates() {
        let mut state = GameState::new();
        state.place(Move::new(Player::O, Position::Center));
        state.set_current_player(Player::X);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
