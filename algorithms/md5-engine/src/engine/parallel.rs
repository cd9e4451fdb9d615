//! Batch Execution Engine
//!
//! Digests many independent inputs. Each input runs the full single-shot
//! pipeline with its own state, so the work splits across threads without
//! coordination (parallel via Rayon if `multithread` feature enabled,
//! otherwise serial).

use crate::types::{Digest, InputTooLarge};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Digest every input, preserving input order.
///
/// # Errors
/// Returns the error of the first (in input order) oversize input.
pub fn digest_all(inputs: &[&[u8]]) -> Result<Vec<Digest>, InputTooLarge> {
    inputs
        .process_each(super::digest)
        .into_iter()
        .collect()
}

/// Helper for feature-agnostic per-item processing
trait BatchProcessor<'a> {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&'a [u8]) -> R + Sync + Send,
        R: Send;
}

impl<'a> BatchProcessor<'a> for &[&'a [u8]] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&'a [u8]) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().copied().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().copied().map(f).collect()
        }
    }
}
