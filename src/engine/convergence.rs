//! Convergence classification.
//!
//! A board's evolution terminates in one of two ways — every cell dies,
//! or the board revisits a state it has already been in — or it keeps
//! producing new states. `classify` names which of the three holds for
//! the current state given the history of states seen so far.
//!
//! The classifier is stateless: callers own the fingerprint history and
//! grow it between calls, which keeps one classifier usable for both
//! "search for the final state" and "jump to generation N" with different
//! history-retention policies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::fingerprint::Digest;
use crate::core::Grid;

/// Terminal classification of a board state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvergenceType {
    /// The board is still producing previously unseen states.
    Continuing,

    /// Every cell is dead.
    Extinct,

    /// The board re-entered an earlier state.
    ///
    /// `period` is the number of generations between the two occurrences;
    /// period 1 is a still life.
    Cyclical {
        /// Generations per repetition.
        period: u64,
    },
}

impl ConvergenceType {
    /// True for `Extinct` and `Cyclical`: the long-term behavior is known.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        !matches!(self, ConvergenceType::Continuing)
    }

    /// The cycle period, if this is a cyclical classification.
    #[must_use]
    pub fn period(&self) -> Option<u64> {
        match self {
            ConvergenceType::Cyclical { period } => Some(*period),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConvergenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvergenceType::Continuing => f.write_str("continuing"),
            ConvergenceType::Extinct => f.write_str("extinct"),
            ConvergenceType::Cyclical { period } => write!(f, "cyclical (period {period})"),
        }
    }
}

/// Classify the state at `generation` against previously seen states.
///
/// `seen` maps each earlier state's digest to the generation at which it
/// first occurred; `digest` must be the digest of `grid` (computed once
/// by the caller, which already needs it to maintain `seen`).
///
/// Extinction wins over cyclical: an all-dead board that was seen before
/// is still reported as `Extinct`. The extinction scan short-circuits on
/// the first living cell.
#[must_use]
pub fn classify(
    grid: &Grid,
    digest: &Digest,
    seen: &FxHashMap<Digest, u64>,
    generation: u64,
) -> ConvergenceType {
    if !grid.has_life() {
        return ConvergenceType::Extinct;
    }

    match seen.get(digest) {
        Some(&first_seen) => ConvergenceType::Cyclical {
            period: generation.saturating_sub(first_seen),
        },
        None => ConvergenceType::Continuing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fingerprint::fingerprint;

    fn seen_with(entries: &[(&Grid, u64)]) -> FxHashMap<Digest, u64> {
        entries
            .iter()
            .map(|&(grid, generation)| (fingerprint(grid), generation))
            .collect()
    }

    #[test]
    fn test_extinct() {
        let dead = Grid::new(3, 3);
        let digest = fingerprint(&dead);

        let outcome = classify(&dead, &digest, &FxHashMap::default(), 5);

        assert_eq!(outcome, ConvergenceType::Extinct);
        assert!(outcome.is_converged());
        assert_eq!(outcome.period(), None);
    }

    #[test]
    fn test_continuing() {
        let grid = Grid::from_rows(&["#..", ".#.", "..."]).unwrap();
        let digest = fingerprint(&grid);

        let outcome = classify(&grid, &digest, &FxHashMap::default(), 0);

        assert_eq!(outcome, ConvergenceType::Continuing);
        assert!(!outcome.is_converged());
    }

    #[test]
    fn test_cyclical_with_exact_period() {
        let grid = Grid::from_rows(&["###"]).unwrap();
        let digest = fingerprint(&grid);
        let seen = seen_with(&[(&grid, 4)]);

        let outcome = classify(&grid, &digest, &seen, 6);

        assert_eq!(outcome, ConvergenceType::Cyclical { period: 2 });
        assert_eq!(outcome.period(), Some(2));
    }

    #[test]
    fn test_extinction_wins_over_cycle_membership() {
        let dead = Grid::new(2, 2);
        let digest = fingerprint(&dead);
        let seen = seen_with(&[(&dead, 0)]);

        let outcome = classify(&dead, &digest, &seen, 3);

        assert_eq!(outcome, ConvergenceType::Extinct);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConvergenceType::Continuing.to_string(), "continuing");
        assert_eq!(ConvergenceType::Extinct.to_string(), "extinct");
        assert_eq!(
            ConvergenceType::Cyclical { period: 2 }.to_string(),
            "cyclical (period 2)"
        );
    }

    #[test]
    fn test_serialization() {
        let outcome = ConvergenceType::Cyclical { period: 3 };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: ConvergenceType = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
