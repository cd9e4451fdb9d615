//! MD5 Engine CLI
//!
//! `md5sum`-style digest tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, hash_string};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "md5e")]
#[command(about = "Compute and check RFC 1321 MD5 digests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to digest (if no subcommand); `-` reads standard input
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest a literal string instead of files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "files")]
    string: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like md5sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        None => {
            if let Some(text) = &cli.string {
                hash_string(text);
                return Ok(());
            }

            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: md5e [FILE]... or md5e --help");
                std::process::exit(1);
            }

            hash_files(&cli.files)?;
        }
    }

    Ok(())
}
