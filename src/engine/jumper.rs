//! Jumping to a far-future generation.
//!
//! ## The problem
//!
//! "What does generation 10,000,000 look like?" must not cost ten million
//! steps. Most boards either die out or fall into a cycle long before
//! that; once the cycle is known, the state at any later generation is a
//! modular-arithmetic question.
//!
//! ## The algorithm
//!
//! Simulate generation by generation, recording each state's digest and
//! the generation it first appeared at. Three things can end the loop
//! early:
//!
//! - a step changes nothing — a fixed point, period 1;
//! - every cell dies (and the rules cannot birth from zero neighbors) —
//!   extinction is a fixed point;
//! - the digest was seen at an earlier generation `p` — a cycle of
//!   `period = i − p`, and the answer for the target is the current state
//!   stepped `(target − i) mod period` more times.
//!
//! Cost before a cycle is found is O(firstRepeat × H × W); afterwards the
//! residual is O(period × H × W) no matter how far the target lies.
//!
//! Boards that never converge (guns, expanding patterns) are cut off by
//! the configured iteration ceiling, and long searches can be aborted
//! cooperatively through a [`CancelToken`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::convergence::{classify, ConvergenceType};
use super::fingerprint::{fingerprint, Digest};
use super::step::step;
use crate::core::{Grid, RuleSet};

/// Default ceiling on simulated generations per query.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

/// Cooperative cancellation flag.
///
/// Clone the token, hand one copy to the jump and keep the other; calling
/// [`cancel`](CancelToken::cancel) makes the running jump abort at its
/// next generation boundary with [`JumpError::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Has cancellation been requested?
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Configuration for generation jumps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Maximum generations to simulate before giving up.
    ///
    /// Some patterns (glider guns, expanding soups) never converge and
    /// never repeat within a practical window; the ceiling turns those
    /// into a `LimitReached` error instead of an unbounded search. It
    /// also bounds the per-query fingerprint history.
    pub max_iterations: u64,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl JumpConfig {
    /// Create a config with a custom iteration ceiling.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Why a jump did not produce a state.
///
/// Neither case is a fault: `LimitReached` is the expected outcome for
/// non-converging patterns, and `Cancelled` is the caller's own doing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum JumpError {
    /// The iteration ceiling was exhausted without convergence.
    #[error("no convergence within {limit} generations (reached generation {reached})")]
    LimitReached {
        /// The configured ceiling.
        limit: u64,
        /// The generation actually simulated to.
        reached: u64,
    },

    /// The cancellation token fired.
    #[error("jump cancelled at generation {reached}")]
    Cancelled {
        /// The generation the jump had reached when it aborted.
        reached: u64,
    },
}

/// The state of a board at a requested generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpResult {
    /// The board at `generation`.
    pub grid: Grid,

    /// The generation this state answers for (the requested target).
    pub generation: u64,

    /// Generation at which convergence was first detected, if any.
    ///
    /// May be far below `generation` when the jump fast-forwarded
    /// through a cycle.
    pub converged_at: Option<u64>,

    /// The detected classification, if any.
    pub convergence: Option<ConvergenceType>,
}

impl JumpResult {
    /// Number of living cells in the answer state.
    #[must_use]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// True when the board's long-term behavior is fully known
    /// (extinct or cyclical). Open-ended results are not stable.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.convergence.is_some()
    }

    fn open(grid: Grid, generation: u64) -> Self {
        Self {
            grid,
            generation,
            converged_at: None,
            convergence: None,
        }
    }

    fn converged(grid: Grid, generation: u64, at: u64, how: ConvergenceType) -> Self {
        Self {
            grid,
            generation,
            converged_at: Some(at),
            convergence: Some(how),
        }
    }
}

/// Computes board states at arbitrary generations, exploiting detected
/// cycles instead of brute-force simulation.
#[derive(Clone, Debug, Default)]
pub struct GenerationJumper {
    config: JumpConfig,
}

impl GenerationJumper {
    /// Create a jumper with the given configuration.
    #[must_use]
    pub fn new(config: JumpConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    /// Compute the state of `initial` at `target` generations under `rules`.
    ///
    /// Never simulates past the first detected fixed point, extinction, or
    /// cycle; see the module docs for the full algorithm. The cancellation
    /// token is checked once per simulated generation.
    ///
    /// The caller-facing boundary is expected to have validated the grid
    /// shape and the target against its own ceilings before calling in.
    pub fn state_at(
        &self,
        initial: &Grid,
        rules: &RuleSet,
        target: u64,
        cancel: &CancelToken,
    ) -> Result<JumpResult, JumpError> {
        if target == 0 {
            return Ok(JumpResult::open(initial.clone(), 0));
        }

        let mut seen: FxHashMap<Digest, u64> = FxHashMap::default();
        seen.insert(fingerprint(initial), 0);

        let mut current = initial.clone();
        let mut generation: u64 = 0;

        while generation < target {
            if cancel.is_cancelled() {
                return Err(JumpError::Cancelled { reached: generation });
            }
            if generation >= self.config.max_iterations {
                debug!(
                    limit = self.config.max_iterations,
                    target, "iteration ceiling reached without convergence"
                );
                return Err(JumpError::LimitReached {
                    limit: self.config.max_iterations,
                    reached: generation,
                });
            }

            let result = step(&current, rules);
            generation += 1;

            if !result.changed {
                // Fixed point: the answer for any later generation is this
                // exact state.
                let how = if current.has_life() {
                    ConvergenceType::Cyclical { period: 1 }
                } else {
                    ConvergenceType::Extinct
                };
                debug!(generation, %how, "fixed point reached");
                return Ok(JumpResult::converged(current, target, generation, how));
            }

            current = result.grid;
            let digest = fingerprint(&current);

            match classify(&current, &digest, &seen, generation) {
                // An empty board only stays empty if the rules cannot
                // birth from zero neighbors; B0-style rules fall through
                // to the ordinary fixed-point and cycle machinery.
                ConvergenceType::Extinct if !rules.born(0) => {
                    debug!(generation, "population extinct");
                    return Ok(JumpResult::converged(
                        current,
                        target,
                        generation,
                        ConvergenceType::Extinct,
                    ));
                }
                ConvergenceType::Cyclical { period } => {
                    let remaining = target - generation;
                    let skip = remaining % period;
                    debug!(generation, period, skip, "cycle detected, fast-forwarding");

                    for _ in 0..skip {
                        if cancel.is_cancelled() {
                            return Err(JumpError::Cancelled { reached: generation });
                        }
                        current = step(&current, rules).grid;
                    }
                    return Ok(JumpResult::converged(
                        current,
                        target,
                        generation,
                        ConvergenceType::Cyclical { period },
                    ));
                }
                _ => {
                    // First occurrences only: a later duplicate must not
                    // displace the index the period math depends on.
                    seen.entry(digest).or_insert(generation);
                }
            }
        }

        Ok(JumpResult::open(current, target))
    }
}
