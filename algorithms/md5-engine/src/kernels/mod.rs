//! Compression Kernel
//!
//! The MD5 step tables and the 64-step compression function.

pub mod compress;
pub mod constants;
