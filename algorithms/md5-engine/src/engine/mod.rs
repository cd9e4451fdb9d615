//! Digest Engine
//!
//! Drives one input through padding, block iteration, compression and
//! finalization. Every call owns its state and padded buffer.

pub mod blocks;
pub mod padding;
pub mod parallel;

use crate::kernels::compress::compress;
use crate::kernels::constants::{DIGEST_SIZE, INITIAL_STATE};
use crate::types::{Digest, InputTooLarge};
use blocks::Block;

// =============================================================================
// CHAINING STATE
// =============================================================================

/// The 128-bit running accumulator (A, B, C, D).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    words: [u32; 4],
}

impl State {
    /// Fresh state loaded with the RFC 1321 initial constants.
    pub const fn new() -> Self {
        Self {
            words: INITIAL_STATE,
        }
    }

    /// Mix one block into the state.
    #[inline]
    pub fn absorb(&mut self, block: &Block) {
        compress(&mut self.words, block);
    }

    /// Serialize A, B, C, D as little-endian bytes.
    pub fn finalize(self) -> Digest {
        let mut out = [0u8; DIGEST_SIZE];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.words) {
            dst.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Compute the digest of one complete input.
///
/// # Errors
/// Returns `InputTooLarge` if the bit length does not fit in 64 bits.
pub fn digest(input: &[u8]) -> Result<Digest, InputTooLarge> {
    let padded = padding::pad(input)?;

    let mut state = State::new();
    for block in blocks::blocks(&padded) {
        state.absorb(&block);
    }

    Ok(state.finalize())
}
