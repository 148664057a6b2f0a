//! Core types and utilities for the huff entropy coder
//!
//! This crate provides the error taxonomy, the `Symbol` abstraction over
//! alphabets, shared constants and the compression statistics record used
//! throughout the workspace.

pub mod consts;
pub mod error;
pub mod stats;
pub mod types;

pub use error::{HuffError, HuffResult};
pub use stats::CompressionStats;
pub use types::Symbol;
