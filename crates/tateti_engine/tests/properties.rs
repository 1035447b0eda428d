//! Property-based tests over random move sequences.

use proptest::prelude::*;
use tateti_engine::{
    Cell, GameEngine, InvariantSet, MemoryStore, MoveError, Player, Score, Status,
    TatetiInvariants, UndoError,
};

/// Play moves chosen by `picks` (each indexes into the remaining empty
/// cells) until the picks run out or the round ends.
fn play_random(engine: &mut GameEngine<MemoryStore>, picks: &[usize]) {
    for &pick in picks {
        if !engine.state().status().is_in_progress() {
            break;
        }
        let moves = engine.valid_moves();
        let index = moves[pick % moves.len()].to_index();
        engine.apply_move(index).expect("empty cell in a running round");
    }
}

fn arb_picks() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..12)
}

proptest! {
    #[test]
    fn history_plus_empty_cells_is_nine(picks in arb_picks()) {
        let mut engine = GameEngine::new(MemoryStore::new());
        for &pick in &picks {
            if !engine.state().status().is_in_progress() {
                break;
            }
            let moves = engine.valid_moves();
            engine.apply_move(moves[pick % moves.len()].to_index()).unwrap();
            let state = engine.state();
            prop_assert_eq!(state.history().len() + state.board().empty_count(), 9);
        }
    }

    #[test]
    fn invariants_hold_after_random_play(picks in arb_picks()) {
        let mut engine = GameEngine::new(MemoryStore::new());
        play_random(&mut engine, &picks);
        prop_assert!(TatetiInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn turn_alternates_while_running(picks in arb_picks()) {
        let mut engine = GameEngine::new(MemoryStore::new());
        play_random(&mut engine, &picks);
        let state = engine.state();
        if state.status().is_in_progress() {
            let expected = if state.history().len() % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(state.current_player(), expected);
        }
    }

    #[test]
    fn undo_is_left_inverse_of_apply(picks in arb_picks(), target in 0usize..9) {
        let mut engine = GameEngine::new(MemoryStore::new());
        play_random(&mut engine, &picks);
        prop_assume!(engine.state().status().is_in_progress());

        let before = engine.state().clone();
        let moves = engine.valid_moves();
        let index = moves[target % moves.len()].to_index();
        let after = engine.apply_move(index).unwrap();

        if after.status().is_in_progress() {
            prop_assert_eq!(engine.undo().unwrap(), before);
        } else {
            prop_assert_eq!(engine.undo(), Err(UndoError::GameNotRunning));
        }
    }

    #[test]
    fn occupied_cells_never_mutate(picks in arb_picks(), target in 0usize..9) {
        let mut engine = GameEngine::new(MemoryStore::new());
        play_random(&mut engine, &picks);
        let before = engine.state().clone();
        let score = engine.score();

        let result = engine.apply_move(target);
        let occupied = before.board().cell(target) != Some(Cell::Empty);
        if !before.status().is_in_progress() {
            prop_assert_eq!(&result, &Err(MoveError::GameNotRunning));
            prop_assert_eq!(engine.state(), &before);
        } else if occupied {
            prop_assert!(matches!(result, Err(MoveError::CellOccupied(_))));
            prop_assert_eq!(engine.state(), &before);
        }
        if result.is_err() {
            prop_assert_eq!(engine.score(), score);
        }
    }

    #[test]
    fn score_counts_each_win_once(picks in arb_picks()) {
        let mut engine = GameEngine::new(MemoryStore::new());
        play_random(&mut engine, &picks);
        let expected = match engine.state().status() {
            Status::Won { winner: Player::X, .. } => Score::new(1, 0),
            Status::Won { winner: Player::O, .. } => Score::new(0, 1),
            _ => Score::default(),
        };
        prop_assert_eq!(engine.score(), expected);
        if !engine.state().status().is_in_progress() {
            // Moves after the end of the round are refused and credit nothing.
            let _ = engine.apply_move(0);
            prop_assert_eq!(engine.score(), expected);
        }
        prop_assert_eq!(engine.store().saves(), usize::from(expected != Score::default()));
    }
}
