//! Compression statistics
//!
//! Pure arithmetic over sizes that are already known. Nothing here feeds
//! back into encoding or decoding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte-level size report for one or more encoded streams
///
/// Every symbol of the original sequence counts as one byte, matching the
/// 8-bit samples the engine is usually fed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompressionStats {
    /// Number of symbols in the original sequence(s)
    pub original_size: usize,
    /// Length of the encoded bitstream(s) in bits
    pub encoded_bit_count: usize,
    /// `encoded_bit_count / 8`, not rounded
    pub encoded_data_size: f64,
    /// Bytes needed to ship the tree(s) alongside the bitstream(s)
    pub tree_overhead: usize,
    /// `encoded_data_size + tree_overhead`
    pub total_estimated_size: f64,
    /// `total_estimated_size / original_size * 100`, or 0 for empty input
    pub ratio: f64,
}

impl CompressionStats {
    pub fn report(
        original_symbol_count: usize,
        encoded_bit_count: usize,
        tree_size_estimate: usize,
    ) -> Self {
        let encoded_data_size = encoded_bit_count as f64 / 8.0;
        let total_estimated_size = encoded_data_size + tree_size_estimate as f64;
        let ratio = if original_symbol_count == 0 {
            0.0
        } else {
            total_estimated_size / original_symbol_count as f64 * 100.0
        };

        Self {
            original_size: original_symbol_count,
            encoded_bit_count,
            encoded_data_size,
            tree_overhead: tree_size_estimate,
            total_estimated_size,
            ratio,
        }
    }

    /// Sum two reports, e.g. the per-channel reports of one image
    pub fn combine(&self, other: &Self) -> Self {
        Self::report(
            self.original_size + other.original_size,
            self.encoded_bit_count + other.encoded_bit_count,
            self.tree_overhead + other.tree_overhead,
        )
    }

    /// Average encoded bits per original symbol, tree excluded
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            self.encoded_bit_count as f64 / self.original_size as f64
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Size:     {} bytes", self.original_size)?;
        writeln!(f, "Compressed Data:   {:.0} bytes", self.encoded_data_size)?;
        writeln!(f, "Tree Overhead:     {} bytes", self.tree_overhead)?;
        writeln!(f, "Total Compressed:  {:.0} bytes", self.total_estimated_size)?;
        write!(f, "Compression Ratio: {:.2} %", self.ratio)
    }
}
