//! Constants used throughout the huff implementation

/// Deepest tree accepted when reading a serialized tree.
///
/// A tree built from `u64` weights can never be deeper than 92 levels, so
/// anything past this bound did not come from an encoder.
pub const MAX_TREE_DEPTH: usize = 128;

/// Width of the bit-length prefix of a varint in the tree wire form
pub const VARINT_LENGTH_BITS: usize = 7;

/// Whether multi-stream work is spread over the rayon pool by default
pub const DEFAULT_PARALLEL: bool = true;
