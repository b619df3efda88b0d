//! Core value types: grids, rule sets, board identity, RNG.
//!
//! Everything here is plain data with value semantics. The evolution
//! machinery lives in [`crate::engine`] and consumes these types.

pub mod board;
pub mod grid;
pub mod rng;
pub mod rules;

pub use board::{BoardId, BoardSnapshot};
pub use grid::{Grid, GridError};
pub use rng::SoupRng;
pub use rules::{RuleError, RuleSet};
