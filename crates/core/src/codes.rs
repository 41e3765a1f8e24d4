//! Per-symbol code table derived from a Huffman tree.
//!
//! Codewords are stored LSB-first: bit `i` of a code is the branch taken at
//! depth `i`, so bit 0 is the root's choice. This is the same order the bit
//! writer emits and the decode table indexes.

use crate::error::{InputError, Result};
use crate::frequency::ALPHABET_SIZE;
use crate::tree::Node;

/// Longest codeword the format can carry.
pub const MAX_CODE_LEN: usize = 16;

/// Bits a header entry spends on the symbol byte and the length byte.
pub const ENTRY_OVERHEAD_BITS: usize = 16;

/// A codeword and its length in bits.
///
/// `len == 0` marks a symbol absent from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code {
    pub bits: u16,
    pub len: u8,
}

impl Code {
    /// True if the symbol has a codeword.
    pub fn is_present(&self) -> bool {
        self.len > 0
    }
}

/// One [`Code`] per byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Code; ALPHABET_SIZE],
}

impl CodeTable {
    /// Walk `root` and record the path to every leaf.
    ///
    /// The path travels down the recursion as arguments, so independent
    /// trees can be processed concurrently.
    ///
    /// # Errors
    /// - `InputError::CodeTooLong` if any leaf lies deeper than 16
    /// - `InputError::SingleSymbol` if the root is itself a leaf
    pub fn from_tree(root: &Node) -> Result<Self> {
        if let Node::Symbol { symbol, .. } = root {
            return Err(InputError::SingleSymbol { symbol: *symbol }.into());
        }

        let mut table = CodeTable {
            codes: [Code::default(); ALPHABET_SIZE],
        };
        table.assign(root, 0, 0)?;
        Ok(table)
    }

    fn assign(&mut self, node: &Node, path: u16, depth: usize) -> Result<()> {
        match node {
            Node::Symbol { symbol, .. } => {
                self.codes[*symbol as usize] = Code {
                    bits: path,
                    len: depth as u8,
                };
                Ok(())
            }
            Node::Internal { children, .. } => {
                if depth >= MAX_CODE_LEN {
                    let (symbol, below) = deepest_leaf(node);
                    return Err(InputError::CodeTooLong {
                        symbol,
                        length: depth + below,
                    }
                    .into());
                }
                self.assign(&children[0], path, depth + 1)?;
                self.assign(&children[1], path | (1 << depth), depth + 1)
            }
        }
    }

    /// Code for a byte value.
    pub fn get(&self, symbol: u8) -> Code {
        self.codes[symbol as usize]
    }

    /// Iterate `(symbol, code)` for present symbols in ascending byte order.
    pub fn present(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_present())
            .map(|(i, &c)| (i as u8, c))
    }

    /// Bits needed to serialize the table: 8 + 8 + length per present symbol.
    pub fn header_bits(&self) -> usize {
        self.present()
            .map(|(_, c)| ENTRY_OVERHEAD_BITS + c.len as usize)
            .sum()
    }

    /// Bits needed to encode `input` with this table.
    pub fn payload_bits(&self, input: &[u8]) -> usize {
        input
            .iter()
            .map(|&b| self.codes[b as usize].len as usize)
            .sum()
    }
}

/// Symbol and relative depth of the deepest leaf under `node`.
fn deepest_leaf(node: &Node) -> (u8, usize) {
    match node {
        Node::Symbol { symbol, .. } => (*symbol, 0),
        Node::Internal { children, .. } => {
            let left = deepest_leaf(&children[0]);
            let right = deepest_leaf(&children[1]);
            let (symbol, depth) = if right.1 > left.1 { right } else { left };
            (symbol, depth + 1)
        }
    }
}
