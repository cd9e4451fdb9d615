//! CLI Commands
//!
//! All md5e commands organized as separate modules.

mod check;
mod hash;

pub use check::check_mode;
pub use hash::{hash_files, hash_string};
