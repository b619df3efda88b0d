//! One-generation transition.
//!
//! Applies a `RuleSet` to every cell of a `Grid` using the 8-cell Moore
//! neighborhood. Cells beyond the edges are dead; there is no wraparound.
//!
//! The result carries a `changed` flag so callers can keep the input value
//! when a step is a no-op. Content equality is the authoritative signal;
//! the flag just saves comparing grids again.

use crate::core::{Grid, RuleSet};

/// Outcome of a single generation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// The next generation.
    pub grid: Grid,

    /// Whether any cell differs from the input generation.
    pub changed: bool,
}

/// Count living Moore neighbors of `(row, col)`.
///
/// Out-of-bounds neighbors are dead.
#[must_use]
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    let mut count = 0;

    for dr in [-1, 0, 1] {
        for dc in [-1, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            if grid.is_alive(row + dr, col + dc) {
                count += 1;
            }
        }
    }

    count
}

/// Apply one generation transition.
///
/// A living cell survives iff its neighbor count is in `rules.survive`;
/// a dead cell is born iff its count is in `rules.birth`. Everything else
/// is dead next generation. Runs in O(H×W).
///
/// A degenerate grid maps to itself unchanged.
#[must_use]
pub fn step(grid: &Grid, rules: &RuleSet) -> StepResult {
    if grid.is_degenerate() {
        return StepResult {
            grid: grid.clone(),
            changed: false,
        };
    }

    let mut next = Grid::new(grid.height(), grid.width());
    let mut changed = false;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let neighbors = count_live_neighbors(grid, row, col);
            let alive = grid.get(row, col);

            let next_alive = if alive {
                rules.survives(neighbors)
            } else {
                rules.born(neighbors)
            };

            if next_alive != alive {
                changed = true;
            }
            next.set(row, col, next_alive);
        }
    }

    StepResult { grid: next, changed }
}
