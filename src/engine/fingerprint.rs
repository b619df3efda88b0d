//! Canonical board digests.
//!
//! ## Digest
//!
//! A `Digest` is a compact, deterministic encoding of a grid's exact
//! contents: the dimensions plus every cell packed 8 to a byte, row-major
//! across the whole board, with the final byte of the buffer zero-padded.
//!
//! Dimensions are part of the digest, so two boards with the same bit
//! pattern but different shapes never compare equal. Identical boards
//! always produce identical digests; the derivation is pure.
//!
//! Digests sit on the hot path of cycle detection — one per simulated
//! generation — so they hash and compare as short byte strings rather
//! than re-walking grids. Callers should compute a state's digest once
//! and reuse it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Grid;

/// Inline capacity covers boards up to 192 cells without allocating.
type DigestBuf = SmallVec<[u8; 24]>;

/// A canonical, comparable digest of a grid's full contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    height: u64,
    width: u64,
    bits: DigestBuf,
}

impl Digest {
    /// Board height this digest was taken from.
    #[must_use]
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Board width this digest was taken from.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.width
    }

    /// The packed cell bytes. Empty for degenerate boards.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bits
    }
}

/// Compute the digest of a grid.
///
/// Cells are traversed row-major and packed most-significant-bit first;
/// a degenerate grid packs zero bytes (its dimensions still distinguish
/// it from every other shape).
#[must_use]
pub fn fingerprint(grid: &Grid) -> Digest {
    let cells = grid.cells();
    let mut bits = DigestBuf::with_capacity((cells.len() + 7) / 8);

    let mut current = 0u8;
    let mut filled = 0u8;
    for &alive in cells {
        current = (current << 1) | u8::from(alive);
        filled += 1;
        if filled == 8 {
            bits.push(current);
            current = 0;
            filled = 0;
        }
    }
    if filled > 0 {
        // Zero-pad the trailing byte on the low side.
        bits.push(current << (8 - filled));
    }

    Digest {
        height: grid.height() as u64,
        width: grid.width() as u64,
        bits,
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}:", self.height, self.width)?;
        for byte in &self.bits {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
