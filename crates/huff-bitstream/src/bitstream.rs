//! In-memory bit sequence produced by the encoder

use bitvec::prelude::*;
use huff_core::{HuffError, HuffResult};
use std::fmt;

/// Bit storage for a single codeword
pub type CodeBits = BitVec<u8, Lsb0>;

/// An ordered, finite sequence of bits
///
/// Carries no symbol boundaries; those are recovered by walking the tree
/// that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bits: BitVec<u8, Lsb0>,
}

impl Bitstream {
    pub fn new() -> Self {
        Self {
            bits: BitVec::new(),
        }
    }

    pub fn with_capacity(num_bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(num_bits),
        }
    }

    /// Bits the stream can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    /// Rebuild a bitstream from bytes packed by `to_bytes`
    pub fn from_bytes(bytes: &[u8], num_bits: usize) -> HuffResult<Self> {
        if bytes.len() != num_bits.div_ceil(8) {
            return Err(HuffError::InvalidParameter(format!(
                "{} bits need {} bytes, got {}",
                num_bits,
                num_bits.div_ceil(8),
                bytes.len()
            )));
        }

        let mut bits = BitVec::<u8, Lsb0>::from_slice(bytes);
        bits.truncate(num_bits);
        Ok(Self { bits })
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append a whole codeword
    pub fn append(&mut self, code: &BitSlice<u8, Lsb0>) {
        self.bits.extend_from_bitslice(code);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    /// Number of bytes `to_bytes` produces
    pub fn byte_len(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    /// Pack LSB-first into bytes, zero-padding the last one
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits = self.bits.clone();
        bits.set_uninitialized(false);
        bits.into_vec()
    }
}

impl FromIterator<bool> for Bitstream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

/// Renders as a string of `0` and `1`
impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(text: &str) -> Bitstream {
        text.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_push_and_display() {
        let mut stream = Bitstream::new();
        stream.push(true);
        stream.push(false);
        stream.append(bits("011").as_bitslice());

        assert_eq!(stream.len(), 5);
        assert_eq!(stream.to_string(), "10011");
        assert_eq!(stream.get(3), Some(true));
        assert_eq!(stream.get(5), None);
    }

    #[test]
    fn test_to_bytes_pads_with_zeros() {
        let stream = bits("1111111111");
        assert_eq!(stream.byte_len(), 2);
        assert_eq!(stream.to_bytes(), vec![0xFF, 0b0000_0011]);
    }

    #[test]
    fn test_from_bytes() {
        let stream = bits("110100101");
        let restored = Bitstream::from_bytes(&stream.to_bytes(), stream.len()).unwrap();
        assert_eq!(restored, stream);

        assert!(Bitstream::from_bytes(&[0xFF], 9).is_err());
        assert!(Bitstream::from_bytes(&[0xFF, 0x00], 8).is_err());
    }

    #[test]
    fn test_empty() {
        let stream = Bitstream::new();
        assert!(stream.is_empty());
        assert!(stream.to_bytes().is_empty());
        assert_eq!(stream.to_string(), "");
    }
}
