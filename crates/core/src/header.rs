//! Serialized header: base fields plus the embedded code table.
//!
//! # Layout
//!
//! ```text
//! bit 0    +------------------------------+
//!          | decompressed_len (32)        |  u32 little-endian
//! bit 32   +------------------------------+
//!          | table_bits (16)              |  u16 little-endian, bits in the
//!          |                              |  code table below
//! bit 48   +------------------------------+
//!          | symbol (8)                   |  repeated per present symbol,
//!          | length (8, low 4 bits used)  |  ascending byte order;
//!          | code (length bits)           |  length 0 stands for 16
//!          +------------------------------+
//!          | payload                      |  codewords, no padding
//!          +------------------------------+
//! ```
//!
//! Everything after the base fields is bit-packed LSB-first. The code table
//! ends at bit `48 + table_bits`, which is also the first payload bit.

use crate::bitio::BitWriter;
use crate::codes::{CodeTable, MAX_CODE_LEN};
use crate::error::{FormatError, Result};

/// Size of the base header (decompressed length + table length) in bytes.
pub const HEADER_BASE_BYTES: usize = 6;

/// Size of the base header in bits; the code table starts here.
pub const HEADER_BASE_BITS: usize = HEADER_BASE_BYTES * 8;

/// Base header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of bytes the payload decodes to
    pub decompressed_len: u32,
    /// Size of the embedded code table in bits
    pub table_bits: u16,
}

impl Header {
    /// Bit offset one past the last code-table entry.
    pub fn table_end(&self) -> usize {
        HEADER_BASE_BITS + self.table_bits as usize
    }

    /// Store the base fields at the start of `out`.
    ///
    /// # Errors
    /// `FormatError::Truncated` if `out` is shorter than the base header.
    pub fn write(&self, out: &mut [u8]) -> Result<()> {
        if out.len() < HEADER_BASE_BYTES {
            return Err(FormatError::Truncated {
                required: HEADER_BASE_BYTES,
                actual: out.len(),
            }
            .into());
        }
        out[0..4].copy_from_slice(&self.decompressed_len.to_le_bytes());
        out[4..6].copy_from_slice(&self.table_bits.to_le_bytes());
        Ok(())
    }

    /// Parse and validate the base fields of an encoded buffer.
    ///
    /// Validation bounds both fields against the buffer before either is
    /// trusted: the code table must end inside the buffer, and every declared
    /// output byte needs at least one payload bit behind it.
    ///
    /// # Errors
    /// - `FormatError::Truncated` if the buffer is shorter than 6 bytes
    /// - `FormatError::HeaderOverrun` if the table ends past the buffer
    /// - `FormatError::LengthExceedsPayload` if the declared length cannot
    ///   be backed by the remaining bits
    pub fn read(input: &[u8]) -> Result<Header> {
        if input.len() < HEADER_BASE_BYTES {
            return Err(FormatError::Truncated {
                required: HEADER_BASE_BYTES,
                actual: input.len(),
            }
            .into());
        }

        let header = Header {
            decompressed_len: u32::from_le_bytes([input[0], input[1], input[2], input[3]]),
            table_bits: u16::from_le_bytes([input[4], input[5]]),
        };

        let available_bits = input.len() * 8;
        let end_bit = header.table_end();
        if end_bit > available_bits {
            return Err(FormatError::HeaderOverrun {
                end_bit,
                available_bits,
            }
            .into());
        }

        let max = available_bits - end_bit;
        if header.decompressed_len as usize > max {
            return Err(FormatError::LengthExceedsPayload {
                declared: header.decompressed_len as usize,
                max,
            }
            .into());
        }

        Ok(header)
    }
}

/// Encode a code length into its 8-bit header field.
///
/// Only the low 4 bits are read back, so 16 is stored as 0.
pub fn length_field(len: u8) -> u16 {
    if len as usize == MAX_CODE_LEN {
        0
    } else {
        len as u16
    }
}

/// Decode an 8-bit header length field.
pub fn parse_length_field(field: u16) -> u8 {
    match field & 0x0F {
        0 => MAX_CODE_LEN as u8,
        len => len as u8,
    }
}

/// Append one entry per present symbol: symbol, length field, code bits.
pub fn write_code_table(writer: &mut BitWriter<'_>, table: &CodeTable) -> Result<()> {
    for (symbol, code) in table.present() {
        writer.write_bits(symbol as u16, 8)?;
        writer.write_bits(length_field(code.len), 8)?;
        writer.write_bits(code.bits, code.len)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_write_read_base_fields() {
        let header = Header {
            decompressed_len: 0x0102,
            table_bits: 0x0304,
        };
        // Room for the table plus one bit per declared byte
        let mut buf = vec![0u8; HEADER_BASE_BYTES + 0x0304 / 8 + 0x0102 / 8 + 1];
        header.write(&mut buf).unwrap();
        assert_eq!(&buf[0..6], &[0x02, 0x01, 0, 0, 0x04, 0x03]);
        assert_eq!(Header::read(&buf).unwrap(), header);
    }

    #[test]
    fn test_table_end() {
        let header = Header {
            decompressed_len: 4,
            table_bits: 34,
        };
        assert_eq!(header.table_end(), 82);
    }

    #[test]
    fn test_truncated() {
        let result = Header::read(&[1, 0, 0]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::Truncated {
                required: 6,
                actual: 3
            }))
        ));
    }

    #[test]
    fn test_header_overrun() {
        // table_bits = 0xFFFF on an 8-byte buffer
        let buf = [0, 0, 0, 0, 0xFF, 0xFF, 0, 0];
        assert!(matches!(
            Header::read(&buf),
            Err(Error::Format(FormatError::HeaderOverrun { .. }))
        ));
    }

    #[test]
    fn test_length_exceeds_payload() {
        // No code table, 2 payload bytes, but 1000 symbols declared
        let mut buf = [0u8; 8];
        Header {
            decompressed_len: 1000,
            table_bits: 0,
        }
        .write(&mut buf)
        .unwrap();
        assert!(matches!(
            Header::read(&buf),
            Err(Error::Format(FormatError::LengthExceedsPayload {
                declared: 1000,
                max: 16
            }))
        ));
    }

    #[test]
    fn test_length_field() {
        assert_eq!(length_field(1), 1);
        assert_eq!(length_field(15), 15);
        assert_eq!(length_field(16), 0);
        assert_eq!(parse_length_field(0), 16);
        assert_eq!(parse_length_field(7), 7);
        // Upper bits of the field are ignored
        assert_eq!(parse_length_field(0x10), 16);
        assert_eq!(parse_length_field(0xF3), 3);
    }
}
