//! Bit-level storage and Huffman code construction
//!
//! This crate provides the bit sequence produced by the encoder, byte-level
//! bit readers/writers, and the frequency model, tree builder and codebook
//! that turn a symbol distribution into a prefix-free code.

pub mod bitreader;
pub mod bitstream;
pub mod bitwriter;
pub mod codebook;
pub mod frequency;
pub mod huffman;
pub mod stream;
pub mod tree_codec;

pub use bitreader::BitReader;
pub use bitstream::{Bitstream, CodeBits};
pub use bitwriter::BitWriter;
pub use codebook::Codebook;
pub use frequency::FrequencyTable;
pub use huffman::{HuffmanNode, HuffmanTree};
pub use stream::{check_equal_lengths, EncodedStream, MultiStreamEncoding};
