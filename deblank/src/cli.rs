// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::normalizer::normalize_file;
use crate::core::walker::find_files;
use crate::models::RunSummary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root directory to search (defaults to ./src)
    #[arg(short, long, default_value = "src")]
    pub root: PathBuf,

    /// File extension to match, with or without a leading dot
    #[arg(short, long, default_value = "vue")]
    pub ext: String,
}

/// Walks the tree once, strips blank lines from each matching file in turn,
/// and returns the aggregate counters.
///
/// Per-file read/write failures are reported on stderr, counted in the
/// summary, and do not stop the remaining files from being processed.
///
/// # Errors
///
/// This function may return an error if:
/// * The root directory does not exist (`Error::RootNotFound`)
/// * A subdirectory cannot be listed during traversal
pub fn run(args: &Args) -> Result<RunSummary> {
    let files = find_files(&args.root, &args.ext)?;

    let suffix = args.ext.trim_start_matches('.');
    println!(
        "Found {} .{suffix} files under {}",
        files.len(),
        args.root.display()
    );

    let mut summary = RunSummary::new();
    summary.files_found = u64::try_from(files.len()).unwrap_or(u64::MAX);

    for path in &files {
        println!("Processing {}", path.display());
        match normalize_file(path) {
            Ok(0) => println!("No blank lines to remove: {}", path.display()),
            Ok(removed) => {
                println!("Removed {removed} blank lines: {}", path.display());
                summary.record_removed(removed);
            }
            Err(err) => {
                eprintln!("{err}");
                summary.record_failure();
            }
        }
    }

    println!("Done! Removed {} blank lines in total", summary.lines_removed);
    Ok(summary)
}
