//! Bitstream writer implementation

use huff_core::consts::VARINT_LENGTH_BITS;
use huff_core::{HuffError, HuffResult};
use std::io::Write;

/// A bitstream writer for writing individual bits to a byte stream
///
/// Bits are packed LSB-first; the final byte is zero-padded on flush.
pub struct BitWriter<W: Write> {
    writer: W,
    buffer: u64,
    bits_in_buffer: usize,
    bits_written: usize,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            bits_written: 0,
        }
    }

    /// Write up to 64 bits to the stream
    pub fn write_bits(&mut self, value: u64, num_bits: usize) -> HuffResult<()> {
        if num_bits > 64 {
            return Err(HuffError::InvalidParameter(
                "Cannot write more than 64 bits at once".to_string(),
            ));
        }

        // The buffer holds fewer than 8 pending bits, so 32-bit chunks never overflow it
        let mut value = value;
        let mut remaining = num_bits;
        while remaining > 0 {
            let chunk = remaining.min(32);
            let mask = (1u64 << chunk) - 1;
            self.buffer |= (value & mask) << self.bits_in_buffer;
            self.bits_in_buffer += chunk;
            value >>= chunk;
            remaining -= chunk;

            // Flush complete bytes
            while self.bits_in_buffer >= 8 {
                self.writer.write_all(&[(self.buffer & 0xFF) as u8])?;
                self.buffer >>= 8;
                self.bits_in_buffer -= 8;
            }
        }

        self.bits_written += num_bits;
        Ok(())
    }

    /// Write a single bit
    pub fn write_bit(&mut self, value: bool) -> HuffResult<()> {
        self.write_bits(value as u64, 1)
    }

    /// Write a length-prefixed unsigned integer: the bit length of `value`
    /// in `VARINT_LENGTH_BITS` bits, then the value itself
    pub fn write_varint(&mut self, value: u64) -> HuffResult<()> {
        let num_bits = (u64::BITS - value.leading_zeros()) as usize;
        self.write_bits(num_bits as u64, VARINT_LENGTH_BITS)?;
        self.write_bits(value, num_bits)
    }

    /// Number of bits written so far, padding excluded
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Flush remaining bits and the underlying writer
    pub fn flush(&mut self) -> HuffResult<()> {
        if self.bits_in_buffer > 0 {
            self.writer.write_all(&[(self.buffer & 0xFF) as u8])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Bits needed by `write_varint` for `value`
pub fn varint_len(value: u64) -> usize {
    VARINT_LENGTH_BITS + (u64::BITS - value.leading_zeros()) as usize
}
