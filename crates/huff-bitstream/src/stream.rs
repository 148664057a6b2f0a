//! Encoded stream containers shared by the encoder and decoder

use crate::{Bitstream, HuffmanTree};
use huff_core::{CompressionStats, HuffError, HuffResult, Symbol};

/// The output of encoding one symbol sequence
///
/// `tree` is `None` exactly when the sequence was empty. `symbol_count`
/// travels with the bits because a single-symbol tree encodes any run
/// length in zero bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream<S> {
    pub bitstream: Bitstream,
    pub tree: Option<HuffmanTree<S>>,
    pub symbol_count: usize,
}

impl<S: Symbol> EncodedStream<S> {
    /// The encoding of an empty sequence
    pub fn empty() -> Self {
        Self {
            bitstream: Bitstream::new(),
            tree: None,
            symbol_count: 0,
        }
    }

    pub fn bit_count(&self) -> usize {
        self.bitstream.len()
    }

    /// Bytes needed to ship the tree, 0 when there is none
    pub fn tree_size(&self) -> usize {
        self.tree.as_ref().map_or(0, |tree| tree.serialized_len())
    }

    pub fn statistics(&self) -> CompressionStats {
        CompressionStats::report(self.symbol_count, self.bit_count(), self.tree_size())
    }
}

/// Fail with `StreamLengthMismatch` at the first length that differs from
/// the first one
pub fn check_equal_lengths(lengths: impl IntoIterator<Item = usize>) -> HuffResult<()> {
    let mut lengths = lengths.into_iter().enumerate();
    let Some((_, expected)) = lengths.next() else {
        return Ok(());
    };
    match lengths.find(|&(_, len)| len != expected) {
        Some((stream, actual)) => Err(HuffError::StreamLengthMismatch {
            stream,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}

/// Independently encoded parallel streams, e.g. the channels of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiStreamEncoding<S> {
    streams: Vec<EncodedStream<S>>,
}

impl<S: Symbol> MultiStreamEncoding<S> {
    /// Group encoded streams, which must all cover the same number of symbols
    pub fn new(streams: Vec<EncodedStream<S>>) -> HuffResult<Self> {
        check_equal_lengths(streams.iter().map(|s| s.symbol_count))?;
        Ok(Self { streams })
    }

    pub fn streams(&self) -> &[EncodedStream<S>] {
        &self.streams
    }

    pub fn into_streams(self) -> Vec<EncodedStream<S>> {
        self.streams
    }

    /// Number of streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Symbols per stream
    pub fn stream_len(&self) -> usize {
        self.streams.first().map_or(0, |s| s.symbol_count)
    }

    /// Summed report over all streams
    pub fn statistics(&self) -> CompressionStats {
        self.streams
            .iter()
            .map(EncodedStream::statistics)
            .fold(CompressionStats::default(), |acc, s| acc.combine(&s))
    }
}
