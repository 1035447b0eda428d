//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, or `None` past the edge of the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrites the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One placement: a player marking a position.
///
/// Recorded in the history so the placement can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A completed line: who owns it and which three cells form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Win {
    /// Owner of the three cells.
    pub winner: Player,
    /// Board indices of the line, in declared order.
    pub line: [usize; 3],
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a completed line.
    Won {
        /// Player owning the line.
        winner: Player,
        /// Board indices of the completed line.
        line: [usize; 3],
    },
    /// Board filled with no line.
    Draw,
}

impl Status {
    /// Returns true while moves are still accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Status::InProgress)
    }

    /// Returns the winner if the round was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if the round was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Status::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<Win> for Status {
    fn from(win: Win) -> Self {
        Status::Won {
            winner: win.winner,
            line: win.line,
        }
    }
}

/// Snapshot of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move next (or the last mover, once the round is over).
    current_player: Player,
    /// Round status.
    status: Status,
    /// Moves played this round, oldest first.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh round with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places a mark and records it (unchecked - use `GameEngine::apply_move`).
    pub(crate) fn place(&mut self, mv: Move) {
        self.board.set(mv.position, Cell::Occupied(mv.player));
        self.history.push(mv);
    }

    /// Removes the most recent move from board and history.
    pub(crate) fn take_back(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.set(mv.position, Cell::Empty);
        Some(mv)
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Mutable board access for tests that need corrupted states.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Running tally of rounds won by each player.
///
/// Serializes as `{"X": n, "O": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl Score {
    /// Creates a score with the given tallies.
    pub fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Rounds won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Rounds won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Rounds won by `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub(crate) fn increment(&mut self, player: Player) {
        let tally = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *tally = tally.saturating_add(1);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - {} O", self.x, self.o)
    }
}
