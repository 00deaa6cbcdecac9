// src/core/normalizer.rs
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Removes every line that is blank or contains only whitespace.
///
/// Blank lines are filtered out rather than replaced, so runs of consecutive
/// blank lines collapse to nothing. Each kept line retains its original
/// terminator byte-for-byte (LF and CRLF both tolerated, mixed files
/// included), and input without a trailing terminator stays that way.
#[must_use]
pub fn strip_blank_lines(content: &str) -> String {
    content
        .split_inclusive('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Rewrites the file at `path` with all blank/whitespace-only lines removed.
///
/// # Arguments
///
/// * `path` - An existing UTF-8 text file
///
/// # Returns
///
/// * `Ok(u64)` - The number of lines removed (may be zero). The file is only
///   written when the normalized text differs from what was read; an
///   already-clean file is left untouched on disk.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read as UTF-8 text
/// * The rewrite fails
pub fn normalize_file(path: &Path) -> Result<u64, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::FileIo {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;

    let normalized = strip_blank_lines(&content);
    let removed = line_count(&content).saturating_sub(line_count(&normalized));

    if normalized != content {
        fs::write(path, &normalized).map_err(|source| Error::FileIo {
            action: "write",
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(removed)
}

fn line_count(text: &str) -> u64 {
    u64::try_from(text.split('\n').count()).unwrap_or(u64::MAX)
}
