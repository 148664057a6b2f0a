//! Error types for Huffman coding operations

use thiserror::Error;

/// Result type for Huffman coding operations
pub type HuffResult<T> = Result<T, HuffError>;

/// Errors that can occur during encoding/decoding
///
/// Encoding an empty sequence is not an error: it produces an empty
/// bitstream and no tree.
#[derive(Error, Debug)]
pub enum HuffError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Malformed bitstream: {0}")]
    MalformedBitstream(String),

    #[error("Single-symbol tree requires an expected output length")]
    DegenerateLengthMissing,

    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    #[error("Stream {stream} has {actual} symbols, expected {expected}")]
    StreamLengthMismatch {
        stream: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
