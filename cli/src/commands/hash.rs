//! Hash Command
//!
//! Whole-file digests, files processed in parallel via Rayon.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a whole input into memory; `-` is standard input.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("Failed to read standard input")?;
        return Ok(buffer);
    }

    std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))
}

/// Lowercase hex digest of one input.
fn digest_hex(path: &Path) -> Result<String> {
    let data = read_input(path)?;
    let digest = md5_engine::try_transform(&data)
        .with_context(|| format!("Cannot digest: {}", path.display()))?;
    Ok(hex::encode(digest))
}

/// Digest files and print `<hex>  <path>` lines in argument order.
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| (file_path, digest_hex(file_path)))
        .collect();

    let mut failed = 0;
    for (file_path, result) in results {
        match result {
            Ok(hex_digest) => println!("{}  {}", hex_digest, file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {} file(s)", failed);
    }

    Ok(())
}

/// Digest a literal and print `<hex>  "<text>"`.
pub fn hash_string(text: &str) {
    let digest = md5_engine::transform(text.as_bytes());
    println!("{}  \"{}\"", hex::encode(digest), text);
}
