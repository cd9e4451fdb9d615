//! Public API Layer
//!
//! Single-input, batch and verification entry points.

use crate::engine;
use crate::types::{Digest, InputTooLarge};
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// SINGLE INPUT
// =============================================================================

/// Compute the MD5 digest of `input`.
///
/// # Panics
/// Panics if `input` is longer than 2^61 - 1 bytes, since its bit length
/// would not fit in the 64-bit trailer. Use [`try_transform`] to handle that
/// case without panicking.
///
/// # Example
/// ```rust
/// let digest = md5_engine::transform(b"abc");
/// assert_eq!(digest[..4], [0x90, 0x01, 0x50, 0x98]);
/// ```
#[must_use]
#[inline]
pub fn transform(input: &[u8]) -> Digest {
    try_transform(input).unwrap_or_else(|e| panic!("{e}"))
}

/// Compute the MD5 digest of `input`, rejecting oversize inputs.
///
/// # Errors
/// Returns `InputTooLarge` if `8 * input.len()` does not fit in 64 bits.
///
/// # Example
/// ```rust
/// let digest = md5_engine::try_transform(b"")?;
/// assert_eq!(digest[0], 0xd4);
/// # Ok::<(), md5_engine::InputTooLarge>(())
/// ```
#[inline]
pub fn try_transform(input: &[u8]) -> Result<Digest, InputTooLarge> {
    engine::digest(input)
}

// =============================================================================
// BATCH
// =============================================================================

/// Compute the digests of many independent inputs, in input order.
///
/// Runs on the Rayon thread pool when the `multithread` feature is enabled.
///
/// # Errors
/// Returns `InputTooLarge` for the first oversize input.
///
/// # Example
/// ```rust
/// let digests = md5_engine::transform_batch(&[&b"a"[..], &b"abc"[..]])?;
/// assert_eq!(digests[1], md5_engine::transform(b"abc"));
/// # Ok::<(), md5_engine::InputTooLarge>(())
/// ```
pub fn transform_batch(inputs: &[&[u8]]) -> Result<Vec<Digest>, InputTooLarge> {
    engine::parallel::digest_all(inputs)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time.
///
/// Returns `false` for inputs too large to digest.
///
/// # Example
/// ```rust
/// let data = b"message digest";
/// let digest = md5_engine::transform(data);
/// assert!(md5_engine::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Digest) -> bool {
    try_transform(input).is_ok_and(|computed| computed.ct_eq(expected).into())
}
