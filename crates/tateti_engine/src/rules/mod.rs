//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the
//! engine so invariant checks can reuse them.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner};
