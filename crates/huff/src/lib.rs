//! # huff - Huffman entropy coding
//!
//! This crate provides a high-level API for compressing symbol sequences with
//! a Huffman code built from their own frequency distribution, and for
//! reconstructing them exactly.
//!
//! ## Quick Start
//!
//! ```
//! use huff::{HuffmanDecoder, HuffmanEncoder};
//!
//! let samples: Vec<u8> = b"AABAC".to_vec();
//!
//! let encoded = HuffmanEncoder::default().encode(&samples).unwrap();
//! println!("{}", encoded.statistics());
//!
//! let decoded = HuffmanDecoder::default().decode(&encoded).unwrap();
//! assert_eq!(decoded, samples);
//! ```
//!
//! ### Several channels
//!
//! ```
//! use huff::{merge_interleaved, split_interleaved, HuffmanDecoder, HuffmanEncoder};
//!
//! let rgb: Vec<u8> = vec![255, 0, 0, 255, 0, 10, 250, 0, 10];
//! let channels = split_interleaved(&rgb, 3).unwrap();
//!
//! let encoding = HuffmanEncoder::default().encode_streams(&channels).unwrap();
//! let decoded = HuffmanDecoder::default().decode_streams(&encoding).unwrap();
//!
//! assert_eq!(merge_interleaved(&decoded).unwrap(), rgb);
//! ```
//!
//! ## Architecture
//!
//! - `huff-core`: errors, the `Symbol` trait, statistics
//! - `huff-bitstream`: bit storage, frequency table, tree, codebook, tree wire form
//! - `huff-encoder` / `huff-decoder`: single and multi-stream pipelines
//!
//! Trees are built with a deterministic tie-break, so a decoder holding the
//! same frequency table can rebuild the encoder's tree instead of receiving it.

pub mod channels;

// Re-export core types
pub use huff_core::{CompressionStats, HuffError, HuffResult, Symbol};

// Re-export code construction
pub use huff_bitstream::{
    Bitstream, Codebook, EncodedStream, FrequencyTable, HuffmanNode, HuffmanTree,
    MultiStreamEncoding,
};

// Re-export decoder
pub use huff_decoder::{decode_symbols, DecoderOptions, HuffmanDecoder};

// Re-export encoder
pub use huff_encoder::{encode_symbols, EncoderOptions, HuffmanEncoder};

pub use channels::{merge_interleaved, split_interleaved};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode `symbols` with default options
pub fn compress<S: Symbol>(symbols: &[S]) -> HuffResult<EncodedStream<S>> {
    HuffmanEncoder::default().encode(symbols)
}

/// Decode a stream produced by [`compress`]
pub fn decompress<S: Symbol>(stream: &EncodedStream<S>) -> HuffResult<Vec<S>> {
    HuffmanDecoder::default().decode(stream)
}
