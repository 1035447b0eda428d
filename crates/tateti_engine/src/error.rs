//! Error types for engine operations.
//!
//! Every variant is recoverable: the caller can always try another cell or
//! another action.

use derive_more::{Display, Error};

use crate::position::Position;

/// Error returned when a move is rejected. The state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name a cell (valid range is 0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The round is already over.
    #[display("Round is over")]
    GameNotRunning,

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

/// Error returned when an undo is rejected. The state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum UndoError {
    /// No move has been played this round.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// Undo is only offered while the round is in progress.
    #[display("Round is over")]
    GameNotRunning,
}
