//! Encoder: frequency analysis, tree, code table, header and payload.

use crate::bitio::BitWriter;
use crate::codes::CodeTable;
use crate::error::{InputError, Result};
use crate::frequency::FrequencyTable;
use crate::header::{write_code_table, Header, HEADER_BASE_BITS, HEADER_BASE_BYTES};
use crate::tree;

/// Encode `input` into a self-describing buffer.
///
/// The output holds the base header, the code table, the bit-packed payload
/// and one trailing slack byte so the decoder's 3-byte peek window never
/// leaves the buffer. Its length is
/// `6 + ceil((table_bits + payload_bits) / 8) + 1`.
///
/// # Errors
/// - `InputError::Empty` for a zero-length input
/// - `InputError::TooLong` if `input.len()` does not fit in 32 bits
/// - `InputError::CodeTooLong` if the distribution needs a code over 16 bits
/// - `Error::Memory` if the output buffer cannot be allocated
///
/// # Example
/// ```
/// let encoded = huffpack_core::encode(b"aaab").unwrap();
/// assert_eq!(huffpack_core::decode(&encoded).unwrap(), b"aaab");
/// ```
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(InputError::Empty.into());
    }
    let decompressed_len =
        u32::try_from(input.len()).map_err(|_| InputError::TooLong { len: input.len() })?;

    let mut freqs = FrequencyTable::from_bytes(input);
    freqs.pair_single_symbol();

    let codes = code_table(&freqs)?;

    // At most 256 entries of 16 + 16 bits, well inside the 16-bit field
    let table_bits = codes.header_bits();
    let payload_bits = codes.payload_bits(input);
    let total_len = encoded_len(table_bits, payload_bits);

    let mut out = Vec::new();
    out.try_reserve_exact(total_len)?;
    out.resize(total_len, 0);

    Header {
        decompressed_len,
        table_bits: table_bits as u16,
    }
    .write(&mut out)?;

    let mut writer = BitWriter::at(&mut out, HEADER_BASE_BITS);
    write_code_table(&mut writer, &codes)?;
    for &byte in input {
        let code = codes.get(byte);
        writer.write_bits(code.bits, code.len)?;
    }

    Ok(out)
}

/// Build the tree for `freqs` and flatten it; the tree is dropped here.
fn code_table(freqs: &FrequencyTable) -> Result<CodeTable> {
    let root = tree::build(freqs)?;
    CodeTable::from_tree(&root)
}

/// Output size in bytes for the given table and payload sizes.
pub fn encoded_len(table_bits: usize, payload_bits: usize) -> usize {
    HEADER_BASE_BYTES + (table_bits + payload_bits + 7) / 8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_aaab_layout() {
        let encoded = encode(b"aaab").unwrap();

        // Two 17-bit table entries + 4 one-bit codes
        assert_eq!(encoded.len(), encoded_len(34, 4));
        assert_eq!(encoded.len(), 6 + 5 + 1);
        assert_eq!(&encoded[0..4], &4u32.to_le_bytes());
        assert_eq!(&encoded[4..6], &34u16.to_le_bytes());

        // Entries: 'a' len 1 code 1, then 'b' len 1 code 0
        assert_eq!(encoded[6], b'a');
        assert_eq!(encoded[7], 1);
        // Bits 64.. : a's code (1), 'b' (8 bits), len 1 (8 bits), code 0
        assert_eq!(encoded[8] & 1, 1);
        assert_eq!(crate::bitio::peek_bits(&encoded, 65) as u8, b'b');
        assert_eq!(crate::bitio::peek_bits(&encoded, 73) as u8, 1);
        assert_eq!(crate::bitio::peek_bits(&encoded, 81) & 1, 0);

        // Payload at bit 82: a a a b = 1 1 1 0
        assert_eq!(crate::bitio::peek_bits(&encoded, 82) & 0xF, 0b0111);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            encode(b""),
            Err(Error::Input(InputError::Empty))
        ));
    }

    #[test]
    fn test_single_symbol_gets_partner() {
        let encoded = encode(b"x").unwrap();
        let header = Header::read(&encoded).unwrap();
        assert_eq!(header.decompressed_len, 1);
        // 'w' (partner) and 'x', one bit each
        assert_eq!(header.table_bits, 34);
        assert_eq!(encoded[6], b'w');
    }

    #[test]
    fn test_skewed_input_compresses() {
        let mut input = vec![b'e'; 990];
        input.extend((0..10u8).map(|i| b'0' + i));
        let encoded = encode(&input).unwrap();
        assert!(encoded.len() < input.len());
    }

    #[test]
    fn test_too_deep_distribution_rejected() {
        // Fibonacci counts over 18 symbols force a 17-bit code
        let mut input = Vec::new();
        let (mut a, mut b) = (1usize, 1usize);
        for symbol in 0..18u8 {
            input.extend(std::iter::repeat(b'A' + symbol).take(a));
            let next = a + b;
            a = b;
            b = next;
        }
        assert!(matches!(
            encode(&input),
            Err(Error::Input(InputError::CodeTooLong { .. }))
        ));
    }
}
