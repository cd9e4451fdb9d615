//! Message Padding
//!
//! Appends the `0x80` marker, zero fill and the 64-bit little-endian bit
//! length so the message becomes a whole number of 64-byte blocks.

use crate::kernels::constants::{BLOCK_SIZE, LENGTH_TRAILER_SIZE, MAX_INPUT_LEN, PADDING_MARKER};
use crate::types::InputTooLarge;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Bit length of a `len`-byte message, as stored in the trailer.
///
/// # Errors
/// Returns `InputTooLarge` if `8 * len` does not fit in 64 bits.
pub fn bit_length(len: usize) -> Result<u64, InputTooLarge> {
    match u64::try_from(len) {
        Ok(bytes) if bytes <= MAX_INPUT_LEN => Ok(bytes * 8),
        _ => Err(InputTooLarge::new(len)),
    }
}

/// Smallest multiple of `BLOCK_SIZE` that holds `len` bytes plus the marker
/// and the length trailer.
///
/// # Errors
/// Returns `InputTooLarge` if `len` exceeds the trailer's range.
pub fn padded_len(len: usize) -> Result<usize, InputTooLarge> {
    bit_length(len)?;
    let overflow = InputTooLarge::new(len);
    len.checked_add(1 + LENGTH_TRAILER_SIZE)
        .map(|min| min.div_ceil(BLOCK_SIZE))
        .and_then(|blocks| blocks.checked_mul(BLOCK_SIZE))
        .ok_or(overflow)
}

/// Build the padded message for `input` in a freshly allocated buffer.
///
/// # Errors
/// Returns `InputTooLarge` if `input` is longer than `MAX_INPUT_LEN` bytes.
pub fn pad(input: &[u8]) -> Result<Vec<u8>, InputTooLarge> {
    let bits = bit_length(input.len())?;
    let total = padded_len(input.len())?;

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(input);
    padded.push(PADDING_MARKER);
    padded.resize(total - LENGTH_TRAILER_SIZE, 0);
    padded.extend_from_slice(&bits.to_le_bytes());

    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    Ok(padded)
}

// =============================================================================
// TESTS
// =============================================================================
