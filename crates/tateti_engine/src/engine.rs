//! The game engine: one round at a time, plus the score across rounds.

use tracing::{debug, info, instrument};

use crate::error::{MoveError, UndoError};
use crate::invariants::{InvariantSet, TatetiInvariants};
use crate::persistence::ScoreStore;
use crate::position::Position;
use crate::rules::{check_winner, is_draw};
use crate::types::{GameState, Move, Score, Status, Win};

/// Tic-tac-toe engine owning the current round, the score and the store
/// the score is persisted to.
///
/// Every mutating operation either succeeds and returns a snapshot of the
/// new state, or fails with a typed error and leaves everything untouched.
///
/// Round lifecycle:
/// - `InProgress --apply_move (line)--> Won`
/// - `InProgress --apply_move (full board)--> Draw`
/// - `InProgress --apply_move / undo--> InProgress`
///
/// `Won` and `Draw` are terminal until [`reset_round`](Self::reset_round)
/// or [`reset_match`](Self::reset_match).
#[derive(Debug, Clone)]
pub struct GameEngine<S> {
    state: GameState,
    score: Score,
    store: S,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Creates an engine with a fresh round and the persisted score (or
    /// zero when nothing usable is stored).
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        let score = store.load_score().unwrap_or_default();
        info!(%score, "Engine created");
        Self {
            state: GameState::new(),
            score,
            store,
        }
    }

    /// Returns the current round.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the score across rounds.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the score store mutably, for callers that keep other
    /// records in the same backing storage.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Empty positions of the current board.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.state.board())
    }

    /// Marks cell `index` (0-8) for the current player.
    ///
    /// Completing a line ends the round as won and credits the winner;
    /// filling the board without a line ends it as a draw. Otherwise the
    /// turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `index` is not 0-8.
    /// - [`MoveError::GameNotRunning`] if the round is over.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameState, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;

        if !self.state.status().is_in_progress() {
            return Err(MoveError::GameNotRunning);
        }

        if !self.state.board().is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let mv = Move::new(self.state.current_player(), position);
        self.state.place(mv);
        debug!(%mv, "Move applied");

        if let Some(win) = self.check_win() {
            self.state.set_status(Status::from(win));
            self.on_win(win);
        } else if self.check_draw() {
            info!("Round ended in a draw");
            self.state.set_status(Status::Draw);
        } else {
            self.state.set_current_player(mv.player.opponent());
        }

        self.assert_invariants();
        Ok(self.state.clone())
    }

    /// First completed line on the board, in declared line order.
    pub fn check_win(&self) -> Option<Win> {
        check_winner(self.state.board())
    }

    /// True iff the board is full and holds no line.
    pub fn check_draw(&self) -> bool {
        is_draw(self.state.board())
    }

    /// Takes back the most recent move; the player who made it moves again.
    ///
    /// # Errors
    ///
    /// - [`UndoError::NothingToUndo`] if no move has been played.
    /// - [`UndoError::GameNotRunning`] if the round is over.
    #[instrument(skip(self), fields(moves = self.state.history().len()))]
    pub fn undo(&mut self) -> Result<GameState, UndoError> {
        if self.state.history().is_empty() {
            return Err(UndoError::NothingToUndo);
        }

        if !self.state.status().is_in_progress() {
            return Err(UndoError::GameNotRunning);
        }

        let mv = self.state.take_back().ok_or(UndoError::NothingToUndo)?;
        self.state.set_current_player(mv.player);
        debug!(%mv, "Move undone");

        self.assert_invariants();
        Ok(self.state.clone())
    }

    /// Starts a new round with X to move. The score is kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) -> GameState {
        self.state = GameState::new();
        debug!("Round reset");
        self.state.clone()
    }

    /// Starts a new round and zeroes the score, clearing the persisted
    /// record.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) -> GameState {
        let state = self.reset_round();
        self.score = Score::default();
        self.store.clear_score();
        info!("Match reset");
        state
    }

    fn on_win(&mut self, win: Win) {
        self.score.increment(win.winner);
        info!(winner = %win.winner, line = ?win.line, score = %self.score, "Round won");
        self.store.save_score(&self.score);
    }

    fn assert_invariants(&self) {
        debug_assert!(
            TatetiInvariants::check_all(&self.state).is_ok(),
            "Game state invariants violated: {:?}",
            TatetiInvariants::check_all(&self.state)
        );
    }
}

impl Default for GameEngine<crate::persistence::NullStore> {
    fn default() -> Self {
        Self::new(crate::persistence::NullStore)
    }
}
