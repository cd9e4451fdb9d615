//! Check Command
//!
//! Verify checksums from file (like md5sum -c).

use super::hash::read_input;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =============================================================================
// PARSING
// =============================================================================

/// Split a `<hex>  <path>` line on the first two-space separator. The path
/// is kept verbatim. Returns `None` for lines without the separator.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (digest, path) = line.trim_start().split_once("  ")?;
    Some((digest.trim_end(), path))
}

/// Decode a 32-character hex digest.
fn decode_digest(text: &str) -> Option<md5_engine::Digest> {
    let mut digest = [0u8; md5_engine::DIGEST_SIZE];
    hex::decode_to_slice(text, &mut digest).ok()?;
    Some(digest)
}

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of checking one entry.
enum Outcome {
    Ok,
    Mismatch,
    Error(String),
}

fn check_entry(expected_hex: &str, file_path: &str) -> Outcome {
    let Some(expected) = decode_digest(expected_hex) else {
        return Outcome::Error(format!("invalid digest '{expected_hex}'"));
    };

    match read_input(Path::new(file_path)) {
        Ok(data) => {
            if md5_engine::verify(&data, &expected) {
                Outcome::Ok
            } else {
                Outcome::Mismatch
            }
        }
        Err(e) => Outcome::Error(format!("{e:#}")),
    }
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read: {}", checksum_file.display()))?;
        let line = line.trim_end_matches(['\r', '\n']);

        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let Some((expected_hex, file_path)) = parse_line(line) else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        total += 1;

        match check_entry(expected_hex, file_path) {
            Outcome::Ok => println!("{file_path}: OK"),
            Outcome::Mismatch => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            Outcome::Error(reason) => {
                println!("{file_path}: FAILED ({reason})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
