//! Bit-level I/O over byte buffers.
//!
//! Both directions are LSB-first: bit offset `n` is bit `n % 8` of byte
//! `n / 8`, and the low bit of a written value lands at the lowest offset.
//!
//! # Window Rules
//! - BitWriter: touches only the 1 to 3 bytes covering the bits it writes,
//!   and within them only those bits
//! - BitReader: peeks a 16-bit window assembled from 3 bytes; bytes past the
//!   end of the buffer read as zero
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitReader, BitWriter};
//!
//! let mut buf = [0u8; 3];
//! let mut writer = BitWriter::new(&mut buf);
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! assert_eq!(writer.position(), 5);
//! assert_eq!(buf[0], 0b11101);
//!
//! let mut reader = BitReader::new(&buf);
//! assert_eq!(reader.read_bits(3), 0b101);
//! assert_eq!(reader.read_bits(2), 0b11);
//! ```

use crate::error::{BitIoError, Result};

/// Widest value a single write or peek handles.
pub const MAX_BITS: u8 = 16;

/// Writes bit fields into a caller-owned, pre-sized byte buffer.
///
/// # Invariants
/// - `pos` never exceeds `buf.len() * 8`
/// - bits outside the field being written are never modified
#[derive(Debug)]
pub struct BitWriter<'a> {
    /// Destination, sized up front by the caller
    buf: &'a mut [u8],
    /// Next bit offset to write
    pos: usize,
}

impl<'a> BitWriter<'a> {
    /// Create a writer positioned at bit 0.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Create a writer positioned at an arbitrary bit offset.
    pub fn at(buf: &'a mut [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    /// Write the low `bits` bits of `value` and advance by `bits`.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if `bits > 16`
    /// - `BitIoError::OutOfBounds` if the field would extend past the buffer;
    ///   nothing is written in that case
    pub fn write_bits(&mut self, value: u16, bits: u8) -> Result<()> {
        if bits > MAX_BITS {
            return Err(BitIoError::InvalidBitCount(bits as usize).into());
        }
        if bits == 0 {
            return Ok(());
        }

        let last_byte = (self.pos + bits as usize - 1) / 8;
        if last_byte >= self.buf.len() {
            return Err(BitIoError::OutOfBounds {
                bit_offset: self.pos,
                bits,
                len: self.buf.len(),
            }
            .into());
        }

        let mut val = value as u32 & ((1u32 << bits) - 1);
        let mut remaining = bits as usize;
        let mut pos = self.pos;

        while remaining > 0 {
            let byte_idx = pos / 8;
            let bit_offset = pos % 8;
            let take = remaining.min(8 - bit_offset);

            // Clear exactly the bits being replaced, then merge
            let mask = (((1u32 << take) - 1) << bit_offset) as u8;
            let bits_in = ((val << bit_offset) as u8) & mask;
            self.buf[byte_idx] = (self.buf[byte_idx] & !mask) | bits_in;

            val >>= take;
            remaining -= take;
            pos += take;
        }

        self.pos = pos;
        Ok(())
    }

    /// Current bit offset.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Reads bit fields LSB-first through a 16-bit lookahead window.
///
/// Reads never fail: bytes beyond the buffer read as zero, so callers
/// bound-check against [`BitReader::bit_len`] before trusting what they
/// consumed.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at bit 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self::at(data, 0)
    }

    /// Create a reader positioned at an arbitrary bit offset.
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    /// Peek the 16 bits starting at the current position.
    pub fn peek(&self) -> u16 {
        peek_bits(self.data, self.pos)
    }

    /// Read `bits` bits (at most 16) and advance past them.
    pub fn read_bits(&mut self, bits: u8) -> u16 {
        let bits = bits.min(MAX_BITS);
        let window = self.peek() as u32;
        self.pos += bits as usize;
        (window & ((1u32 << bits) - 1)) as u16
    }

    /// Advance by `bits` without reading.
    pub fn skip(&mut self, bits: usize) {
        self.pos += bits;
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of bits backed by the buffer.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }
}

/// Peek the 16 bits starting at `bit_pos`.
///
/// Concatenates the byte holding `bit_pos` with the two bytes after it and
/// shifts out the bits below `bit_pos`. Missing bytes past the end of `data`
/// contribute zeros.
pub fn peek_bits(data: &[u8], bit_pos: usize) -> u16 {
    let byte_pos = bit_pos / 8;
    let byte = |i: usize| data.get(byte_pos + i).copied().unwrap_or(0) as u32;
    let concat = byte(0) | (byte(1) << 8) | (byte(2) << 16);
    (concat >> (bit_pos % 8)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_write_single_byte() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits(0b1011_0011, 8).unwrap();
        assert_eq!(buf, [0b1011_0011]);
    }

    #[test]
    fn test_write_is_lsb_first() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits(0b1, 1).unwrap();
        writer.write_bits(0b0, 1).unwrap();
        writer.write_bits(0b11, 2).unwrap();
        assert_eq!(buf, [0b1101]);
    }

    #[test]
    fn test_write_spans_three_bytes() {
        let mut buf = [0u8; 4];
        let mut writer = BitWriter::at(&mut buf, 7);
        writer.write_bits(0xFFFF, 16).unwrap();
        assert_eq!(writer.position(), 23);
        assert_eq!(buf, [0x80, 0xFF, 0x7F, 0x00]);
    }

    #[test]
    fn test_write_preserves_neighbours() {
        let mut buf = [0xFFu8; 3];
        let mut writer = BitWriter::at(&mut buf, 5);
        writer.write_bits(0, 10).unwrap();
        // bits 5..15 cleared, everything else untouched
        assert_eq!(buf, [0b0001_1111, 0b1000_0000, 0xFF]);
    }

    #[test]
    fn test_write_masks_value() {
        let mut buf = [0u8; 2];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits(0xFFFF, 3).unwrap();
        assert_eq!(buf, [0b111, 0]);
    }

    #[test]
    fn test_write_out_of_bounds() {
        let mut buf = [0u8; 2];
        let mut writer = BitWriter::at(&mut buf, 9);
        let result = writer.write_bits(0xFF, 8);
        assert!(matches!(
            result,
            Err(Error::BitIo(BitIoError::OutOfBounds { bit_offset: 9, .. }))
        ));
        assert_eq!(writer.position(), 9);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn test_write_invalid_count() {
        let mut buf = [0u8; 4];
        let mut writer = BitWriter::new(&mut buf);
        assert!(matches!(
            writer.write_bits(0, 17),
            Err(Error::BitIo(BitIoError::InvalidBitCount(17)))
        ));
    }

    #[test]
    fn test_zero_bits() {
        let mut buf = [0u8; 0];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits(0xFF, 0).unwrap();
        assert_eq!(writer.position(), 0);
    }

    #[test]
    fn test_peek_offsets() {
        let data = [0b1010_1010, 0b1100_1100, 0b1111_0000];
        assert_eq!(peek_bits(&data, 0), 0b1100_1100_1010_1010);
        assert_eq!(peek_bits(&data, 4), 0b0000_1100_1100_1010);
        assert_eq!(peek_bits(&data, 8), 0b1111_0000_1100_1100);
    }

    #[test]
    fn test_peek_past_end_reads_zero() {
        let data = [0xFF];
        assert_eq!(peek_bits(&data, 0), 0x00FF);
        assert_eq!(peek_bits(&data, 4), 0x000F);
        assert_eq!(peek_bits(&data, 64), 0);
    }

    #[test]
    fn test_write_then_read() {
        let fields: [(u16, u8); 6] = [(5, 3), (0xABCD, 16), (1, 1), (0x7F, 7), (0, 4), (0x3FF, 10)];
        let mut buf = [0u8; 8];
        let mut writer = BitWriter::new(&mut buf);
        for &(value, bits) in &fields {
            writer.write_bits(value, bits).unwrap();
        }
        let written = writer.position();

        let mut reader = BitReader::new(&buf);
        for &(value, bits) in &fields {
            assert_eq!(reader.read_bits(bits), value);
        }
        assert_eq!(reader.position(), written);
    }

    #[test]
    fn test_reader_skip() {
        let data = [0x00, 0xF0];
        let mut reader = BitReader::new(&data);
        reader.skip(12);
        assert_eq!(reader.read_bits(4), 0xF);
        assert_eq!(reader.bit_len(), 16);
    }
}
