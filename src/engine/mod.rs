//! The evolution and convergence engine.
//!
//! ## Overview
//!
//! This module answers "what does this board look like at generation N?"
//! without necessarily simulating N generations:
//!
//! - **step**: one Moore-neighborhood transition, with a `changed` flag
//! - **fingerprint**: canonical digests for state identity
//! - **convergence**: extinct / cyclical / continuing classification
//! - **jumper**: cycle-exploiting fast-forward to arbitrary generations
//! - **cache**: bounded LRU over (board, generation) results
//!
//! ## Usage
//!
//! ```
//! use life_engine::core::{Grid, RuleSet};
//! use life_engine::engine::{CancelToken, GenerationJumper};
//!
//! let blinker = Grid::from_rows(&[
//!     ".....",
//!     ".###.",
//!     ".....",
//! ]).unwrap();
//!
//! let jumper = GenerationJumper::default();
//! let result = jumper
//!     .state_at(&blinker, &RuleSet::conway(), 1_000_000, &CancelToken::new())
//!     .unwrap();
//!
//! // A blinker has period 2, so generation 1,000,000 is the start phase.
//! assert_eq!(result.grid, blinker);
//! assert_eq!(result.convergence.unwrap().period(), Some(2));
//! ```

pub mod cache;
pub mod convergence;
pub mod fingerprint;
pub mod jumper;
pub mod step;

pub use cache::{CacheKey, ResultCache, DEFAULT_CACHE_CAPACITY};
pub use convergence::{classify, ConvergenceType};
pub use fingerprint::{fingerprint, Digest};
pub use jumper::{
    CancelToken, GenerationJumper, JumpConfig, JumpError, JumpResult, DEFAULT_MAX_ITERATIONS,
};
pub use step::{count_live_neighbors, step, StepResult};
