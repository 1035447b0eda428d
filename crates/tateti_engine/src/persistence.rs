//! Score persistence seam.

use tracing::{debug, instrument};

use crate::types::Score;

/// Storage for the running score, injected into the engine.
///
/// Implementations must absorb their own failures: a store that cannot
/// write silently does nothing, and a store that cannot read (or reads
/// garbage) returns `None`. The engine stays playable with no working
/// storage at all.
pub trait ScoreStore {
    /// Persists the current score.
    fn save_score(&mut self, score: &Score);

    /// Removes any persisted score.
    fn clear_score(&mut self);

    /// Loads the persisted score, or `None` when missing or unreadable.
    fn load_score(&self) -> Option<Score>;
}

/// A store that persists nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn save_score(&mut self, _score: &Score) {}

    fn clear_score(&mut self) {}

    fn load_score(&self) -> Option<Score> {
        None
    }
}

/// In-memory store that also counts how often it was written to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    score: Option<Score>,
    saves: usize,
    clears: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `score`.
    pub fn with_score(score: Score) -> Self {
        Self {
            score: Some(score),
            ..Self::default()
        }
    }

    /// The currently stored score.
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Number of `save_score` calls received.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Number of `clear_score` calls received.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl ScoreStore for MemoryStore {
    #[instrument(skip(self))]
    fn save_score(&mut self, score: &Score) {
        debug!(%score, "Storing score in memory");
        self.score = Some(*score);
        self.saves += 1;
    }

    #[instrument(skip(self))]
    fn clear_score(&mut self) {
        debug!("Clearing in-memory score");
        self.score = None;
        self.clears += 1;
    }

    fn load_score(&self) -> Option<Score> {
        self.score
    }
}
