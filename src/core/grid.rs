//! Rectangular board state.
//!
//! ## Grid
//!
//! A finite, non-wrapping matrix of boolean cells. Cells outside the
//! bounds are dead; there is no toroidal topology.
//!
//! Grids behave as immutable values: the step engine returns a new `Grid`
//! (or signals that nothing changed) instead of mutating in place.
//!
//! ## Text form
//!
//! Boards read and print as rows of `'.'` (dead) and `'#'` (alive):
//!
//! ```
//! use life_engine::core::Grid;
//!
//! let grid = Grid::from_rows(&[
//!     ".#.",
//!     ".#.",
//!     ".#.",
//! ]).unwrap();
//!
//! assert_eq!(grid.population(), 3);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::SoupRng;

/// Errors constructing a grid from external input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Actual cell count of the offending row.
        found: usize,
    },

    /// A character other than `'.'` or `'#'` appeared in a text row.
    #[error("unrecognized cell {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },
}

/// A rectangular boolean cell matrix, stored row-major.
///
/// Height or width of zero is a degenerate (lifeless) grid; all
/// operations handle it without indexing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid of the given dimensions.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Build a grid from nested boolean rows.
    ///
    /// The first row establishes the width; every other row must match.
    pub fn from_cells(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    /// Build a grid from ASCII rows of `'.'` (dead) and `'#'` (alive).
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.chars().count());

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, text) in rows.iter().enumerate() {
            let mut found = 0;
            for (col, ch) in text.chars().enumerate() {
                cells.push(match ch {
                    b @ ('.' | '#') => b == '#',
                    other => {
                        return Err(GridError::InvalidCell {
                            row,
                            col,
                            found: other,
                        })
                    }
                });
                found += 1;
            }
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    /// Fill a grid with a random soup at the given live-cell density.
    ///
    /// Deterministic for a given RNG state: the same seed always produces
    /// the same board.
    #[must_use]
    pub fn soup(height: usize, width: usize, density: f64, rng: &mut SoupRng) -> Self {
        let mut grid = Self::new(height, width);
        for cell in &mut grid.cells {
            *cell = rng.gen_bool(density);
        }
        grid
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// True when the grid has no cells at all (height or width is zero).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Get a cell. Panics if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.cells[row * self.width + col]
    }

    /// Set a cell. Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.cells[row * self.width + col] = alive;
    }

    /// Liveness of a possibly out-of-bounds coordinate.
    ///
    /// Everything beyond the edges is dead, which is exactly the boundary
    /// condition neighbor counting needs.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of living cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True if any cell is alive.
    ///
    /// Short-circuits on the first living cell, so boards with life near
    /// the origin answer in O(1).
    #[must_use]
    pub fn has_life(&self) -> bool {
        self.cells.iter().any(|&alive| alive)
    }

    /// Iterate over `(row, col)` coordinates of living cells.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Raw row-major cell slice, one bool per cell.
    #[must_use]
    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                f.write_str(if self.get(row, col) { "#" } else { "." })?;
            }
            if row + 1 < self.height {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
