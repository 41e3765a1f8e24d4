//! Decoder: header validation, decode table, stream decoding.
//!
//! Header fields are bound-checked against the buffer before they are
//! trusted, and every codeword is checked to end inside the buffer. A
//! truncated or corrupted buffer fails with a [`FormatError`] instead of
//! producing garbage or reading out of bounds.

use crate::bitio::BitReader;
use crate::decode_table::DecodeTable;
use crate::error::{Error, FormatError, Result};
use crate::header::Header;

/// Decompressed length recorded in an encoded buffer.
///
/// Use this to size the destination for [`decode_into`].
pub fn decompressed_len(input: &[u8]) -> Result<u32> {
    Ok(Header::read(input)?.decompressed_len)
}

/// Decode `input` into a newly allocated buffer.
///
/// # Errors
/// - `Error::Format` if the buffer is truncated or inconsistent
/// - `Error::Memory` if the output or decode table cannot be allocated
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let header = Header::read(input)?;
    let table = DecodeTable::from_header(input, &header)?;

    let len = header.decompressed_len as usize;
    let mut out = Vec::new();
    out.try_reserve_exact(len)?;
    out.resize(len, 0);

    decode_stream(input, &header, &table, &mut out)?;
    Ok(out)
}

/// Decode `input` into a caller-supplied buffer, returning bytes written.
///
/// Only the first `decompressed_len` bytes of `output` are touched.
///
/// # Errors
/// - `Error::Length` if `output` is shorter than the recorded length; the
///   buffer is left untouched
/// - `Error::Format` if the buffer is truncated or inconsistent
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    let header = Header::read(input)?;
    let len = header.decompressed_len as usize;
    if output.len() < len {
        return Err(Error::Length {
            required: len,
            capacity: output.len(),
        });
    }

    let table = DecodeTable::from_header(input, &header)?;
    decode_stream(input, &header, &table, &mut output[..len])?;
    Ok(len)
}

/// Fill `out` with one symbol per 16-bit window lookup.
fn decode_stream(input: &[u8], header: &Header, table: &DecodeTable, out: &mut [u8]) -> Result<()> {
    let mut reader = BitReader::at(input, header.table_end());
    let limit = reader.bit_len();

    for slot in out.iter_mut() {
        let bit_offset = reader.position();
        let entry = table.lookup(reader.peek());
        if entry.len == 0 {
            return Err(FormatError::InvalidCode { bit_offset }.into());
        }
        if bit_offset + entry.len as usize > limit {
            return Err(FormatError::PayloadOverrun { bit_offset }.into());
        }
        *slot = entry.symbol;
        reader.skip(entry.len as usize);
    }

    Ok(())
}
