//! Bitstream reader implementation

use huff_core::consts::VARINT_LENGTH_BITS;
use huff_core::{HuffError, HuffResult};
use std::io::Read;

/// A bitstream reader for reading individual bits from a byte stream
pub struct BitReader<R: Read> {
    reader: R,
    buffer: u64,
    bits_in_buffer: usize,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Read up to 64 bits from the stream
    pub fn read_bits(&mut self, num_bits: usize) -> HuffResult<u64> {
        if num_bits > 64 {
            return Err(HuffError::InvalidParameter(
                "Cannot read more than 64 bits at once".to_string(),
            ));
        }

        let mut result = 0u64;
        let mut filled = 0;
        while filled < num_bits {
            let chunk = (num_bits - filled).min(32);
            result |= self.read_chunk(chunk)? << filled;
            filled += chunk;
        }

        Ok(result)
    }

    fn read_chunk(&mut self, num_bits: usize) -> HuffResult<u64> {
        // Ensure we have enough bits in the buffer
        while self.bits_in_buffer < num_bits {
            let mut byte = [0u8; 1];
            if self.reader.read(&mut byte)? == 0 {
                return Err(HuffError::MalformedBitstream(
                    "Unexpected end of stream".to_string(),
                ));
            }
            self.buffer |= (byte[0] as u64) << self.bits_in_buffer;
            self.bits_in_buffer += 8;
        }

        let mask = (1u64 << num_bits) - 1;
        let result = self.buffer & mask;
        self.buffer >>= num_bits;
        self.bits_in_buffer -= num_bits;

        Ok(result)
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> HuffResult<bool> {
        self.read_bits(1).map(|b| b != 0)
    }

    /// Read a length-prefixed unsigned integer written by `BitWriter::write_varint`
    pub fn read_varint(&mut self) -> HuffResult<u64> {
        let num_bits = self.read_bits(VARINT_LENGTH_BITS)? as usize;
        if num_bits > 64 {
            return Err(HuffError::MalformedBitstream(format!(
                "Varint length {} exceeds 64 bits",
                num_bits
            )));
        }
        self.read_bits(num_bits)
    }

    /// Consume the reader, checking that only zero padding remains
    pub fn finish(mut self) -> HuffResult<()> {
        if self.buffer != 0 {
            return Err(HuffError::MalformedBitstream(
                "Non-zero padding bits".to_string(),
            ));
        }
        let mut byte = [0u8; 1];
        if self.reader.read(&mut byte)? != 0 {
            return Err(HuffError::MalformedBitstream(
                "Trailing bytes after end of data".to_string(),
            ));
        }
        Ok(())
    }
}
