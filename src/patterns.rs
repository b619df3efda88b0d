//! Canonical pattern library.
//!
//! Well-known Game of Life patterns as static data: still lifes,
//! oscillators, spaceships, and two famously long-lived seeds. Tests and
//! benchmarks stamp these onto boards instead of hand-writing cell lists.
//!
//! Coordinates are `(row, col)` offsets from the pattern's top-left
//! bounding-box corner.

use crate::core::Grid;

/// A named pattern as live-cell offsets within its bounding box.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    /// Conventional name, e.g. `"Glider"`.
    pub name: &'static str,

    /// Live cells, `(row, col)` from the bounding-box origin.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding-box height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Bounding-box width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Stamp the pattern onto `grid` with its origin at `(row, col)`.
    ///
    /// Cells falling outside the grid are clipped.
    pub fn stamp(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in self.cells {
            let (r, c) = (row + dr, col + dc);
            if r < grid.height() && c < grid.width() {
                grid.set(r, c, true);
            }
        }
    }

    /// A fresh board holding just this pattern with `margin` dead cells
    /// on every side.
    #[must_use]
    pub fn grid(&self, margin: usize) -> Grid {
        let mut grid = Grid::new(self.height() + 2 * margin, self.width() + 2 * margin);
        self.stamp(&mut grid, margin, margin);
        grid
    }

    /// Look up a pattern by name, case-insensitively.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// Still life: 2×2 block.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Still life: beehive.
pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
};

/// Still life: tub.
pub const TUB: Pattern = Pattern {
    name: "Tub",
    cells: &[(0, 1), (1, 0), (1, 2), (2, 1)],
};

/// Period-2 oscillator: three cells in a row.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

/// Period-2 oscillator: two blocks blinking at each other.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0), (0, 1), (1, 0), (1, 1),
        (2, 2), (2, 3), (3, 2), (3, 3),
    ],
};

/// Period-3 oscillator, 48 cells.
pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

/// The classic diagonal spaceship, period 4.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Lightweight spaceship, period 4, moves horizontally.
pub const LWSS: Pattern = Pattern {
    name: "LWSS",
    cells: &[
        (0, 1), (0, 4),
        (1, 0),
        (2, 0), (2, 4),
        (3, 0), (3, 1), (3, 2), (3, 3),
    ],
};

/// Five cells that take ~1100 generations to settle.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// The first known gun; emits a glider every 30 generations.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (0, 24),
        (1, 22), (1, 24),
        (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
        (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
        (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
        (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
        (6, 10), (6, 16), (6, 24),
        (7, 11), (7, 15),
        (8, 12), (8, 13),
    ],
};

/// All built-in patterns.
pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BEEHIVE,
    TUB,
    BLINKER,
    TOAD,
    BEACON,
    PULSAR,
    GLIDER,
    LWSS,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];
