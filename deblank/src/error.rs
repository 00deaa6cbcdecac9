// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The configured root directory does not exist or is not a directory.
    /// Fatal for the whole run; nothing is modified.
    #[error("root directory not found: {0}")]
    RootNotFound(PathBuf),

    /// A single file could not be read or written. Recovered per file: the
    /// file is skipped and the run continues.
    #[error("failed to {action} {path}: {source}")]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
