//! Birth/survival rule sets.
//!
//! ## RuleSet
//!
//! A rule set names which live-neighbor counts let a living cell survive
//! and which counts create a cell in an empty spot. The Moore neighborhood
//! has at most 8 cells, so counts are always in `0..=8`; anything else is
//! rejected at construction.
//!
//! Rule sets parse from and print as the standard `B…/S…` notation:
//!
//! ```
//! use life_engine::core::RuleSet;
//!
//! let conway: RuleSet = "B3/S23".parse().unwrap();
//! assert_eq!(conway, RuleSet::conway());
//! assert_eq!(conway.to_string(), "B3/S23");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors constructing or parsing a rule set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Rule string was empty.
    #[error("rule string is empty")]
    Empty,

    /// Rule string did not follow the `B…/S…` shape.
    #[error("rule must follow B#/S# format")]
    Malformed,

    /// A non-digit character appeared in a rule segment.
    #[error("invalid character {0:?} in rule")]
    InvalidDigit(char),

    /// A neighbor count outside the Moore neighborhood's `0..=8`.
    #[error("neighbor count {0} is out of range 0-8")]
    OutOfRange(u8),

    /// The same count appeared twice in one segment.
    #[error("neighbor count {0} is duplicated")]
    Duplicate(u8),
}

/// Neighbor-count sets controlling survival and birth.
///
/// Stored as 9-bit masks (bit `n` = count `n`), which makes per-cell rule
/// checks branch-free and the value trivially copyable and hashable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    survive: u16,
    birth: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut m = 0u16;
    let mut i = 0;
    while i < counts.len() {
        m |= 1 << counts[i];
        i += 1;
    }
    m
}

impl RuleSet {
    /// Build a rule set from explicit neighbor-count lists.
    ///
    /// Counts outside `0..=8` are rejected; duplicates are harmless here
    /// (the sets are sets) but rejected by the string parser.
    pub fn new(survive: &[u8], birth: &[u8]) -> Result<Self, RuleError> {
        for &count in survive.iter().chain(birth) {
            if count > 8 {
                return Err(RuleError::OutOfRange(count));
            }
        }
        Ok(Self {
            survive: mask(survive),
            birth: mask(birth),
        })
    }

    /// Conway's Game of Life, B3/S23.
    #[must_use]
    pub const fn conway() -> Self {
        Self {
            survive: mask(&[2, 3]),
            birth: mask(&[3]),
        }
    }

    /// HighLife, B36/S23. Known for its self-replicating pattern.
    #[must_use]
    pub const fn highlife() -> Self {
        Self {
            survive: mask(&[2, 3]),
            birth: mask(&[3, 6]),
        }
    }

    /// Day & Night, B3678/S34678.
    #[must_use]
    pub const fn day_and_night() -> Self {
        Self {
            survive: mask(&[3, 4, 6, 7, 8]),
            birth: mask(&[3, 6, 7, 8]),
        }
    }

    /// Does a living cell with `neighbors` live neighbors survive?
    #[inline]
    #[must_use]
    pub fn survives(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.survive & (1 << neighbors) != 0
    }

    /// Is a dead cell with `neighbors` live neighbors born?
    #[inline]
    #[must_use]
    pub fn born(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.birth & (1 << neighbors) != 0
    }

    /// Survival counts in ascending order.
    #[must_use]
    pub fn survive_counts(&self) -> SmallVec<[u8; 9]> {
        (0..=8).filter(|&n| self.survives(n)).collect()
    }

    /// Birth counts in ascending order.
    #[must_use]
    pub fn birth_counts(&self) -> SmallVec<[u8; 9]> {
        (0..=8).filter(|&n| self.born(n)).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

fn parse_segment(segment: &str, prefix: char) -> Result<u16, RuleError> {
    let mut chars = segment.chars();
    match chars.next() {
        Some(ch) if ch.to_ascii_uppercase() == prefix => {}
        _ => return Err(RuleError::Malformed),
    }

    let mut m = 0u16;
    for ch in chars {
        let digit = ch.to_digit(10).ok_or(RuleError::InvalidDigit(ch))? as u8;
        if digit > 8 {
            return Err(RuleError::OutOfRange(digit));
        }
        if m & (1 << digit) != 0 {
            return Err(RuleError::Duplicate(digit));
        }
        m |= 1 << digit;
    }
    Ok(m)
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse `B…/S…` notation, e.g. `"B3/S23"` or `"B36/S23"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RuleError::Empty);
        }

        let (birth_part, survive_part) =
            trimmed.split_once('/').ok_or(RuleError::Malformed)?;

        Ok(Self {
            birth: parse_segment(birth_part, 'B')?,
            survive: parse_segment(survive_part, 'S')?,
        })
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("B")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in self.survive_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
