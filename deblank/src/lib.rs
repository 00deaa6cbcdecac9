// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use crate::core::normalizer::{normalize_file, strip_blank_lines};
pub use crate::core::walker::find_files;
pub use crate::error::Error;
pub use crate::models::RunSummary;
