//! Huffman decoder implementation

use huff_bitstream::{Bitstream, EncodedStream, HuffmanNode, HuffmanTree, MultiStreamEncoding};
use huff_core::consts;
use huff_core::{HuffError, HuffResult, Symbol};
use rayon::prelude::*;

/// Decoder options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Decode independent streams on the rayon pool
    pub parallel: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            parallel: consts::DEFAULT_PARALLEL,
        }
    }
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Walk `tree` bit by bit, emitting a symbol at every leaf.
///
/// - No tree: only the empty stream with zero expected symbols is valid.
/// - Single-leaf tree: `expected` is required, must equal the leaf's
///   recorded weight, and no bits may be present.
/// - Otherwise the bits must end exactly on a code boundary, and must
///   yield `expected` symbols when it is given.
pub fn decode_symbols<S: Symbol>(
    bitstream: &Bitstream,
    tree: Option<&HuffmanTree<S>>,
    expected: Option<usize>,
) -> HuffResult<Vec<S>> {
    let Some(tree) = tree else {
        if bitstream.is_empty() && expected.unwrap_or(0) == 0 {
            return Ok(Vec::new());
        }
        return Err(HuffError::MalformedBitstream(format!(
            "{} bits and {:?} expected symbols but no tree",
            bitstream.len(),
            expected
        )));
    };

    let root = tree.root();
    let (root_left, root_right) = match root {
        HuffmanNode::Leaf { symbol, weight } => {
            let count = expected.ok_or(HuffError::DegenerateLengthMissing)?;
            if count as u64 != *weight {
                return Err(HuffError::MalformedBitstream(format!(
                    "Single-symbol tree records {} symbols, expected {}",
                    weight, count
                )));
            }
            if !bitstream.is_empty() {
                return Err(HuffError::MalformedBitstream(format!(
                    "Single-symbol tree takes no bits, found {}",
                    bitstream.len()
                )));
            }
            return Ok(vec![*symbol; count]);
        }
        HuffmanNode::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
    };

    // Every code takes at least one bit here
    let mut decoded = Vec::with_capacity(expected.unwrap_or(0).min(bitstream.len()));
    let (mut left, mut right) = (root_left, root_right);
    let mut pending_bits = 0usize;

    for bit in bitstream.iter() {
        let next = if bit { right } else { left };
        match next {
            HuffmanNode::Leaf { symbol, .. } => {
                decoded.push(*symbol);
                (left, right) = (root_left, root_right);
                pending_bits = 0;
            }
            HuffmanNode::Internal {
                left: next_left,
                right: next_right,
                ..
            } => {
                (left, right) = (next_left.as_ref(), next_right.as_ref());
                pending_bits += 1;
            }
        }
    }

    if pending_bits > 0 {
        return Err(HuffError::MalformedBitstream(format!(
            "Stream ends {} bits into a code after {} symbols",
            pending_bits,
            decoded.len()
        )));
    }

    if let Some(count) = expected {
        if decoded.len() != count {
            return Err(HuffError::MalformedBitstream(format!(
                "Decoded {} symbols, expected {}",
                decoded.len(),
                count
            )));
        }
    }

    Ok(decoded)
}

/// Huffman decoder
#[derive(Debug, Clone, Default)]
pub struct HuffmanDecoder {
    options: DecoderOptions,
}

impl HuffmanDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decode one encoded stream
    pub fn decode<S: Symbol>(&self, stream: &EncodedStream<S>) -> HuffResult<Vec<S>> {
        let decoded = decode_symbols(
            &stream.bitstream,
            stream.tree.as_ref(),
            Some(stream.symbol_count),
        )?;
        log::debug!(
            "Decoded {} bits into {} symbols",
            stream.bitstream.len(),
            decoded.len()
        );
        Ok(decoded)
    }

    /// Decode every stream with its own tree, in input order
    pub fn decode_streams<S: Symbol>(
        &self,
        encoding: &MultiStreamEncoding<S>,
    ) -> HuffResult<Vec<Vec<S>>> {
        if self.options.parallel {
            encoding
                .streams()
                .par_iter()
                .map(|stream| self.decode(stream))
                .collect()
        } else {
            encoding
                .streams()
                .iter()
                .map(|stream| self.decode(stream))
                .collect()
        }
    }
}
