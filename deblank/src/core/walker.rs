// src/core/walker.rs
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Error;

/// Recursively collects every file under `root` whose name ends with the
/// configured extension.
///
/// # Arguments
///
/// * `root` - The directory to descend into
/// * `extension` - The file extension to match, with or without a leading dot
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - All matching file paths. Enumeration order follows
///   the filesystem and is not significant.
///
/// # Errors
///
/// This function may return an error if:
/// * `root` does not exist or is not a directory (`Error::RootNotFound`)
/// * A subdirectory cannot be listed during traversal
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()).into());
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix))
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
