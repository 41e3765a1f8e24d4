//! Flat 16-bit lookup table for decoding.
//!
//! Every codeword of length `n` owns all `2^(16 - n)` windows whose low `n`
//! bits equal the codeword. A 16-bit peek at any codeword boundary therefore
//! resolves the symbol and its true length in one lookup, whatever bits
//! follow it.

use crate::bitio::BitReader;
use crate::codes::{CodeTable, ENTRY_OVERHEAD_BITS, MAX_CODE_LEN};
use crate::error::{FormatError, Result};
use crate::header::{parse_length_field, Header, HEADER_BASE_BITS};

/// Number of entries: one per 16-bit window.
pub const DECODE_TABLE_LEN: usize = 1 << MAX_CODE_LEN;

/// Symbol and codeword length for one window.
///
/// `len == 0` marks a window no codeword maps to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeEntry {
    pub symbol: u8,
    pub len: u8,
}

/// Window-indexed decode table.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    entries: Box<[DecodeEntry]>,
}

impl DecodeTable {
    fn empty() -> Result<Self> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(DECODE_TABLE_LEN)?;
        entries.resize(DECODE_TABLE_LEN, DecodeEntry::default());
        Ok(Self {
            entries: entries.into_boxed_slice(),
        })
    }

    /// Rebuild the table from the code table embedded in `input`.
    ///
    /// Parsing starts at bit 48 and stops exactly at `header.table_end()`.
    ///
    /// # Errors
    /// - `FormatError::MalformedEntry` if an entry crosses the table end
    /// - `FormatError::ConflictingCode` if two codewords overlap
    /// - `Error::Memory` if the table cannot be allocated
    pub fn from_header(input: &[u8], header: &Header) -> Result<Self> {
        let mut table = Self::empty()?;
        let mut reader = BitReader::at(input, HEADER_BASE_BITS);
        let end = header.table_end();

        while reader.position() < end {
            let bit_offset = reader.position();
            if bit_offset + ENTRY_OVERHEAD_BITS > end {
                return Err(FormatError::MalformedEntry { bit_offset }.into());
            }

            let symbol = reader.read_bits(8) as u8;
            let len = parse_length_field(reader.read_bits(8));
            if reader.position() + len as usize > end {
                return Err(FormatError::MalformedEntry { bit_offset }.into());
            }
            let code = reader.read_bits(len);

            table.insert(symbol, code, len)?;
        }

        Ok(table)
    }

    /// Build the table straight from an encoder-side code table.
    pub fn from_code_table(codes: &CodeTable) -> Result<Self> {
        let mut table = Self::empty()?;
        for (symbol, code) in codes.present() {
            table.insert(symbol, code.bits, code.len)?;
        }
        Ok(table)
    }

    /// Map every window starting with `code` to `(symbol, len)`.
    fn insert(&mut self, symbol: u8, code: u16, len: u8) -> Result<()> {
        let pad = MAX_CODE_LEN - len as usize;
        let code = code as usize & ((1 << len) - 1);

        for pattern in 0..(1usize << pad) {
            let idx = code | (pattern << len);
            let slot = &mut self.entries[idx];
            if slot.len != 0 {
                return Err(FormatError::ConflictingCode {
                    symbol,
                    code: code as u16,
                    length: len,
                }
                .into());
            }
            *slot = DecodeEntry { symbol, len };
        }
        Ok(())
    }

    /// Entry for a 16-bit window.
    #[inline]
    pub fn lookup(&self, window: u16) -> DecodeEntry {
        self.entries[window as usize]
    }

    /// Number of windows that map to a codeword.
    pub fn filled(&self) -> usize {
        self.entries.iter().filter(|e| e.len != 0).count()
    }
}
