//! Huffman encoder implementation

use huff_bitstream::{check_equal_lengths, Bitstream, Codebook, FrequencyTable, HuffmanTree};
use huff_core::consts;
use huff_core::{HuffError, HuffResult, Symbol};
use rayon::prelude::*;

pub use huff_bitstream::{EncodedStream, MultiStreamEncoding};

/// Encoder options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Encode independent streams on the rayon pool
    pub parallel: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            parallel: consts::DEFAULT_PARALLEL,
        }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Concatenate the code of every symbol, in input order
///
/// Fails with `UnknownSymbol` if a symbol has no code, which means the
/// codebook was derived from a different sequence.
pub fn encode_symbols<S: Symbol>(symbols: &[S], codebook: &Codebook<S>) -> HuffResult<Bitstream> {
    let total_bits = symbols
        .iter()
        .try_fold(0usize, |total, symbol| Some(total + codebook.code_len(symbol)?))
        .unwrap_or(0);
    let mut bitstream = Bitstream::with_capacity(total_bits);
    for symbol in symbols {
        let code = codebook.get(symbol).ok_or_else(|| {
            HuffError::UnknownSymbol(format!("{:?} has no codebook entry", symbol))
        })?;
        bitstream.append(code);
    }
    Ok(bitstream)
}

/// Huffman encoder
///
/// Each call builds a fresh frequency table, tree and codebook from the
/// sequence it encodes; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    options: EncoderOptions,
}

impl HuffmanEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode one symbol sequence
    pub fn encode<S: Symbol>(&self, symbols: &[S]) -> HuffResult<EncodedStream<S>> {
        if symbols.is_empty() {
            log::debug!("Empty input, nothing to encode");
            return Ok(EncodedStream::empty());
        }

        let table = FrequencyTable::tabulate(symbols);
        let tree = HuffmanTree::from_frequencies(&table)?;
        let codebook = tree.codebook();

        let bitstream = encode_symbols(symbols, &codebook)?;

        log::debug!(
            "Encoded {} symbols ({} distinct, depth {}) into {} bits",
            symbols.len(),
            table.len(),
            tree.depth(),
            bitstream.len()
        );

        Ok(EncodedStream {
            bitstream,
            tree: Some(tree),
            symbol_count: symbols.len(),
        })
    }

    /// Encode parallel streams of equal length, each with its own tree
    pub fn encode_streams<S: Symbol>(
        &self,
        streams: &[Vec<S>],
    ) -> HuffResult<MultiStreamEncoding<S>> {
        check_equal_lengths(streams.iter().map(Vec::len))?;

        let encoded = if self.options.parallel {
            streams
                .par_iter()
                .map(|stream| self.encode(stream.as_slice()))
                .collect::<HuffResult<Vec<_>>>()?
        } else {
            streams
                .iter()
                .map(|stream| self.encode(stream.as_slice()))
                .collect::<HuffResult<Vec<_>>>()?
        };

        log::debug!("Encoded {} independent streams", encoded.len());
        MultiStreamEncoding::new(encoded)
    }
}
