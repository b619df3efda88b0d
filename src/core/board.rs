//! Board identity and the load/save snapshot.
//!
//! The surrounding application keeps boards in some store; this crate
//! only sees a `BoardSnapshot` — grid, generation counter, and the
//! fingerprint history recorded so far — loaded in before a computation
//! and saved back out after.
//!
//! The history is an `im::Vector`, so snapshots clone in O(1) no matter
//! how long a board has been running.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::rules::RuleSet;
use crate::engine::convergence::ConvergenceType;
use crate::engine::fingerprint::{fingerprint, Digest};
use crate::engine::step::step;

/// Type-safe board identifier.
///
/// Assigned by the external board store; opaque here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u64);

impl BoardId {
    /// Create a new board ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "board {}", self.0)
    }
}

/// A board's persisted state: grid, generation, fingerprint history.
///
/// The history holds one digest per generation, oldest first, ending with
/// the digest of `grid`. [`advance`](Self::advance) keeps that invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// The board's identity in the external store.
    pub id: BoardId,

    /// Current grid contents.
    pub grid: Grid,

    /// Generations elapsed since the board was created.
    pub generation: u64,

    history: Vector<Digest>,
}

impl BoardSnapshot {
    /// Snapshot a freshly created board at generation 0.
    #[must_use]
    pub fn new(id: BoardId, grid: Grid) -> Self {
        let mut history = Vector::new();
        history.push_back(fingerprint(&grid));
        Self {
            id,
            grid,
            generation: 0,
            history,
        }
    }

    /// The recorded fingerprint history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Digest> {
        &self.history
    }

    /// Step the board one generation and classify the new state against
    /// the recorded history.
    ///
    /// On a fixed point the grid is left untouched (period 1, or extinct
    /// when lifeless) and no duplicate digest is recorded; otherwise the
    /// new state's digest is appended, whether or not it closes a cycle.
    pub fn advance(&mut self, rules: &RuleSet) -> ConvergenceType {
        let result = step(&self.grid, rules);
        self.generation += 1;

        if !result.changed {
            return if self.grid.has_life() {
                ConvergenceType::Cyclical { period: 1 }
            } else {
                ConvergenceType::Extinct
            };
        }

        self.grid = result.grid;
        let digest = fingerprint(&self.grid);

        let outcome = if !self.grid.has_life() {
            ConvergenceType::Extinct
        } else if let Some(first_seen) = self.history.iter().position(|d| *d == digest) {
            ConvergenceType::Cyclical {
                period: (self.history.len() - first_seen) as u64,
            }
        } else {
            ConvergenceType::Continuing
        };

        self.history.push_back(digest);
        outcome
    }

    /// Drop all but the most recent `keep_last` history entries.
    ///
    /// Long-running boards otherwise grow their persisted history without
    /// bound; the store decides the window. Periods longer than the kept
    /// window become undetectable until re-entered.
    pub fn trim_history(&mut self, keep_last: usize) {
        let len = self.history.len();
        if len > keep_last {
            self.history = self.history.skip(len - keep_last);
        }
    }
}
