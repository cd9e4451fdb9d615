//! Block Iterator
//!
//! Splits a padded message into consecutive 64-byte blocks and decodes each
//! one into sixteen little-endian words.

use crate::kernels::constants::{BLOCK_SIZE, WORDS_PER_BLOCK};
use core::iter::FusedIterator;
use core::slice::ChunksExact;

// =============================================================================
// BLOCK
// =============================================================================

/// One 512-bit block viewed as sixteen 32-bit little-endian words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    words: [u32; WORDS_PER_BLOCK],
}

impl Block {
    /// Decode a block from exactly `BLOCK_SIZE` bytes.
    pub fn from_slice(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), BLOCK_SIZE);

        let mut words = [0u32; WORDS_PER_BLOCK];
        for (word, le) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([le[0], le[1], le[2], le[3]]);
        }
        Self { words }
    }

    /// Message word `index` (0..16).
    #[inline]
    pub const fn word(&self, index: usize) -> u32 {
        self.words[index]
    }
}

// =============================================================================
// ITERATOR
// =============================================================================

/// Lazy iterator over the blocks of a padded message.
///
/// Cloning yields an independent iterator from the same position, so a fresh
/// `blocks()` call (or a clone taken up front) restarts the walk.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

/// Iterate over every block of `padded`, whose length must be a multiple of
/// `BLOCK_SIZE`.
pub fn blocks(padded: &[u8]) -> Blocks<'_> {
    debug_assert!(padded.len().is_multiple_of(BLOCK_SIZE));
    Blocks {
        chunks: padded.chunks_exact(BLOCK_SIZE),
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.chunks.next().map(Block::from_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}

// =============================================================================
// TESTS
// =============================================================================
