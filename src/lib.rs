//! # life-engine
//!
//! A cellular automaton evolution engine built around one question:
//! *what does generation N look like?* — answered without simulating N
//! generations whenever the board has died out or entered a cycle.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: grids, rule sets, digests, and results are
//!    immutable values. Stepping returns a new grid plus a `changed` flag
//!    rather than mutating in place.
//!
//! 2. **Detect, then jump**: the jumper records a fingerprint per
//!    simulated generation; the first repeat gives an exact period, and
//!    modular arithmetic answers any later generation in O(period) steps.
//!
//! 3. **Bounded everything**: every query carries an iteration ceiling,
//!    cancellation is cooperative and checked per generation, and the
//!    result cache holds a fixed number of entries.
//!
//! ## Modules
//!
//! - `core`: grids, B/S rule sets, board identity, deterministic RNG
//! - `engine`: step transition, fingerprints, convergence detection,
//!   generation jumping, bounded result cache
//! - `patterns`: canonical still lifes, oscillators, and spaceships
//!
//! ## Non-wrapping topology
//!
//! Boards are finite rectangles; cells beyond the edges are dead. There
//! is no toroidal wraparound, so spaceships die at walls instead of
//! re-entering.

pub mod core;
pub mod engine;
pub mod patterns;

// Re-export commonly used types
pub use crate::core::{BoardId, BoardSnapshot, Grid, GridError, RuleError, RuleSet, SoupRng};

pub use crate::engine::{
    classify, count_live_neighbors, fingerprint, step, CacheKey, CancelToken, ConvergenceType,
    Digest, GenerationJumper, JumpConfig, JumpError, JumpResult, ResultCache, StepResult,
    DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_ITERATIONS,
};

pub use crate::patterns::Pattern;
