// src/core.rs
pub mod normalizer;
pub mod walker;
