//! Shared types used across the MD5 engine.

use crate::kernels::constants::{DIGEST_SIZE, MAX_INPUT_LEN};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// OUTPUT
// =============================================================================

/// A finished 128-bit MD5 digest, A through D in little-endian byte order.
pub type Digest = [u8; DIGEST_SIZE];

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for inputs whose bit length cannot be encoded in the 64-bit trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTooLarge {
    len: usize,
}

impl InputTooLarge {
    /// Create a new `InputTooLarge` for an input of `len` bytes.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length in bytes of the rejected input.
    pub const fn input_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for InputTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input too large: {} bytes exceeds the MD5 limit of {} bytes \
             (bit length must fit in 64 bits)",
            self.len, MAX_INPUT_LEN
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for InputTooLarge {}
