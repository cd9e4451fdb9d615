#![cfg_attr(not(feature = "std"), no_std)]

//! # MD5 Engine
//!
//! Single-shot RFC 1321 message digest: any byte sequence in, a 16-byte
//! fingerprint out.
//!
//! MD5 is cryptographically broken. Use it only where an existing protocol,
//! file format or cache key demands it.

//! # Usage
//! ```rust
//! // 1. One-shot digest
//! let digest = md5_engine::transform(b"message digest");
//! assert_eq!(digest.len(), md5_engine::DIGEST_SIZE);
//!
//! // 2. Verification
//! assert!(md5_engine::verify(b"message digest", &digest));
//!
//! // 3. Many inputs at once
//! let digests = md5_engine::transform_batch(&[&b"a"[..], &b"b"[..]])?;
//! assert_eq!(digests.len(), 2);
//! # Ok::<(), md5_engine::InputTooLarge>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
#[doc(hidden)]
pub mod ffi; // C ABI, public so tests can call it directly
pub(crate) mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{BLOCK_SIZE, DIGEST_SIZE};
pub use oneshot::{transform, transform_batch, try_transform, verify};
pub use types::{Digest, InputTooLarge};
