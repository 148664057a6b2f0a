//! Core types for the entropy coder

use std::fmt::Debug;
use std::hash::Hash;

/// An element of a finite, totally ordered alphabet
///
/// Symbols are plain values. The ordering decides the order in which leaves
/// are seeded into the tree builder, so two builders fed the same frequency
/// table produce the same tree.
pub trait Symbol: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Number of bits a symbol occupies in the tree wire form
    const BITS: usize;

    fn to_bits(self) -> u64;

    /// Returns `None` for values outside the alphabet
    fn from_bits(bits: u64) -> Option<Self>;
}

impl Symbol for u8 {
    const BITS: usize = 8;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Option<Self> {
        u8::try_from(bits).ok()
    }
}

impl Symbol for u16 {
    const BITS: usize = 16;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Option<Self> {
        u16::try_from(bits).ok()
    }
}

impl Symbol for u32 {
    const BITS: usize = 32;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Option<Self> {
        u32::try_from(bits).ok()
    }
}

impl Symbol for char {
    const BITS: usize = 21;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Option<Self> {
        u32::try_from(bits).ok().and_then(char::from_u32)
    }
}
