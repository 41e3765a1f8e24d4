//! huffpack-core: self-contained Huffman entropy codec
//!
//! This library turns an arbitrary byte buffer into a compact bit-packed
//! representation and reconstructs it exactly:
//! - Counts byte frequencies and builds a Huffman tree over present symbols
//! - Flattens the tree into a per-symbol (code, length) table
//! - Embeds that table in a small binary header ahead of the payload
//! - Decodes through a 16-bit window lookup table instead of walking a tree
//!
//! # Architecture
//!
//! Encode flows `frequency` → `tree` → `codes` → `encoder`, decode flows
//! `header` → `decode_table` → `decoder`; both directions share `bitio`:
//! - `frequency`: byte frequency table
//! - `tree`: greedy Huffman tree construction
//! - `codes`: code table generation (max 16 bits per code)
//! - `bitio`: LSB-first bit writer and 16-bit peek reader
//! - `header`: header layout and validation
//! - `decode_table`: 65536-entry window table
//! - `encoder` / `decoder`: the public entry points
//!
//! # Design Principles
//!
//! - **No panics**: every failure is a structured, recoverable [`Error`]
//! - **No shared state**: all working state is local to a call, so calls
//!   on separate threads are independent
//! - **Untrusted input**: decode bound-checks header fields and codewords
//!   against the buffer before relying on them

pub mod bitio;
pub mod codes;
pub mod decode_table;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod header;
pub mod tree;

// Re-export commonly used types
pub use decoder::{decode, decode_into, decompressed_len};
pub use encoder::encode;
pub use error::{Error, FormatError, InputError, Result};
