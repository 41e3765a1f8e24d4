//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! The three classic failure kinds (memory, input, length) keep their
//! integer status codes via [`Error::code`] so a harness can report them.

use thiserror::Error;

/// Status code for an allocation failure.
pub const MEM_ERROR: i32 = -1;
/// Status code for empty input or an over-long code.
pub const INPUT_ERROR: i32 = -2;
/// Status code for an undersized destination buffer.
pub const LENGTH_ERROR: i32 = -3;
/// Status code for a malformed encoded buffer.
pub const FORMAT_ERROR: i32 = -4;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Memory: a working or output buffer could not be reserved
/// - Input: the encoder cannot represent the given input
/// - Length: a caller-supplied destination is too small
/// - Format: an encoded buffer is truncated or inconsistent
/// - Bit I/O: a bit-level access fell outside its buffer
#[derive(Debug, Error)]
pub enum Error {
    /// Allocation failed; the operation was aborted with no partial output
    #[error("memory allocation failed")]
    Memory,

    /// Input cannot be encoded
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Destination buffer smaller than the recorded decompressed length
    #[error("output buffer too small: need {required} bytes, capacity {capacity}")]
    Length { required: usize, capacity: usize },

    /// Encoded buffer failed validation
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Bit-level access out of range
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),
}

impl Error {
    /// Integer status code matching the classic C interface.
    pub fn code(&self) -> i32 {
        match self {
            Error::Memory => MEM_ERROR,
            Error::Input(_) => INPUT_ERROR,
            Error::Length { .. } => LENGTH_ERROR,
            Error::Format(_) | Error::BitIo(_) => FORMAT_ERROR,
        }
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::Memory
    }
}

/// Encoder input errors.
#[derive(Debug, Error)]
pub enum InputError {
    /// No bytes to encode
    #[error("input is empty")]
    Empty,

    /// Input length does not fit the 32-bit length field
    #[error("input of {len} bytes exceeds the 32-bit length field")]
    TooLong { len: usize },

    /// Only one distinct symbol; a tree needs at least two leaves
    #[error("only symbol {symbol:#04x} is present; a tree needs two leaves")]
    SingleSymbol { symbol: u8 },

    /// Frequency distribution needs a codeword longer than 16 bits
    #[error("symbol {symbol:#04x} needs a {length}-bit code (maximum 16)")]
    CodeTooLong { symbol: u8, length: usize },
}

/// Decoder format errors for truncated or inconsistent buffers.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Buffer too short to hold the base header
    #[error("buffer too short: need at least {required} bytes, got {actual}")]
    Truncated { required: usize, actual: usize },

    /// Header-bit-length points past the end of the buffer
    #[error("code table ends at bit {end_bit}, buffer holds {available_bits} bits")]
    HeaderOverrun { end_bit: usize, available_bits: usize },

    /// A code-table entry does not fit inside the recorded table length
    #[error("malformed code table entry at bit {bit_offset}")]
    MalformedEntry { bit_offset: usize },

    /// Two code-table entries claim overlapping codewords
    #[error("symbol {symbol:#04x} code {code:#06x}/{length} overlaps an earlier entry")]
    ConflictingCode { symbol: u8, code: u16, length: u8 },

    /// Declared decompressed length cannot be backed by the payload bits
    #[error("declared length {declared} exceeds the {max} symbols the payload can hold")]
    LengthExceedsPayload { declared: usize, max: usize },

    /// Payload bits match no codeword in the table
    #[error("no codeword matches the stream at bit {bit_offset}")]
    InvalidCode { bit_offset: usize },

    /// A codeword runs past the end of the buffer
    #[error("codeword at bit {bit_offset} runs past the end of the buffer")]
    PayloadOverrun { bit_offset: usize },
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Write would touch bytes outside the buffer
    #[error("{bits} bits at offset {bit_offset} exceed a {len}-byte buffer")]
    OutOfBounds {
        bit_offset: usize,
        bits: u8,
        len: usize,
    },

    /// Invalid bit count (more than 16 bits)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::Memory.code(), MEM_ERROR);
        assert_eq!(Error::from(InputError::Empty).code(), INPUT_ERROR);
        assert_eq!(
            Error::Length {
                required: 4,
                capacity: 2
            }
            .code(),
            LENGTH_ERROR
        );
        assert_eq!(
            Error::from(FormatError::InvalidCode { bit_offset: 9 }).code(),
            FORMAT_ERROR
        );
    }

    #[test]
    fn test_try_reserve_maps_to_memory() {
        let mut buf: Vec<u8> = Vec::new();
        let err = buf.try_reserve_exact(usize::MAX).unwrap_err();
        assert!(matches!(Error::from(err), Error::Memory));
    }

    #[test]
    fn test_display() {
        let err = Error::from(InputError::CodeTooLong {
            symbol: 0x41,
            length: 17,
        });
        assert_eq!(
            err.to_string(),
            "input error: symbol 0x41 needs a 17-bit code (maximum 16)"
        );
    }
}
