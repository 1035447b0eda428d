//! Tateti engine - pure tic-tac-toe game logic.
//!
//! This crate owns the whole game-state machine: board, turn tracking,
//! move application, win/draw detection, a move history for undo, and the
//! running score across rounds. It performs no I/O; score persistence is
//! delegated to an injected [`ScoreStore`].
//!
//! # Example
//!
//! ```
//! use tateti_engine::{GameEngine, NullStore, Player, Status};
//!
//! let mut engine = GameEngine::new(NullStore);
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index).unwrap();
//! }
//! let state = engine.apply_move(2).unwrap();
//!
//! assert_eq!(
//!     state.status(),
//!     &Status::Won { winner: Player::X, line: [0, 1, 2] }
//! );
//! assert_eq!(engine.score().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod persistence;
mod position;
mod rules;
mod types;

pub use engine::GameEngine;
pub use error::{MoveError, UndoError};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, StatusConsistentInvariant, TatetiInvariants,
};
pub use persistence::{MemoryStore, NullStore, ScoreStore};
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, is_draw, is_full};
pub use types::{Board, Cell, GameState, Move, Player, Score, Status, Win};
