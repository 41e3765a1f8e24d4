//! Huffman tree construction.
//!
//! The tree is built greedily: the node list is sorted ascending by
//! frequency and the two lowest nodes are merged until one root remains.
//! Among equal frequencies, symbol leaves sort before internal nodes, which
//! keeps tied distributions shallower.
//!
//! The tree only lives long enough to derive a [`CodeTable`](crate::codes::CodeTable)
//! and is dropped as a whole afterwards.

use std::cmp::Ordering;

use crate::error::{InputError, Result};
use crate::frequency::FrequencyTable;

/// A node of a Huffman tree.
///
/// Internal nodes exclusively own exactly two children; index 0 is the
/// branch taken on a `0` bit, index 1 on a `1` bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf for one byte value
    Symbol { symbol: u8, freq: u64 },
    /// Branch whose frequency is the sum of its children
    Internal { freq: u64, children: Box<[Node; 2]> },
}

impl Node {
    fn internal(first: Node, second: Node) -> Self {
        Node::Internal {
            freq: first.freq() + second.freq(),
            children: Box::new([first, second]),
        }
    }

    /// Frequency of the leaf, or of the whole subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Symbol { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for internal nodes.
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal { .. })
    }

    /// Depth of the deepest leaf below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        match self {
            Node::Symbol { .. } => 0,
            Node::Internal { children, .. } => 1 + children[0].depth().max(children[1].depth()),
        }
    }

    /// Number of leaves below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Symbol { .. } => 1,
            Node::Internal { children, .. } => children[0].leaf_count() + children[1].leaf_count(),
        }
    }
}

/// Ascending by frequency; leaves before internal nodes on ties.
fn node_order(a: &Node, b: &Node) -> Ordering {
    a.freq()
        .cmp(&b.freq())
        .then_with(|| a.is_internal().cmp(&b.is_internal()))
}

/// Build a Huffman tree over the symbols present in `freqs`.
///
/// # Errors
/// - `InputError::Empty` if no symbol is present
/// - `InputError::SingleSymbol` if only one symbol is present; callers pair
///   it first with [`FrequencyTable::pair_single_symbol`]
/// - `Error::Memory` if the node list cannot be allocated
pub fn build(freqs: &FrequencyTable) -> Result<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    nodes.try_reserve_exact(freqs.distinct())?;
    nodes.extend(
        freqs
            .present()
            .map(|(symbol, freq)| Node::Symbol { symbol, freq }),
    );

    match nodes.len() {
        0 => return Err(InputError::Empty.into()),
        1 => {
            let symbol = match &nodes[0] {
                Node::Symbol { symbol, .. } => *symbol,
                Node::Internal { .. } => 0,
            };
            return Err(InputError::SingleSymbol { symbol }.into());
        }
        _ => {}
    }

    while nodes.len() > 1 {
        // Stable sort: equal keys keep their relative order between rounds.
        nodes.sort_by(node_order);
        let second = nodes.remove(1);
        let first = nodes.remove(0);
        nodes.insert(0, Node::internal(first, second));
    }

    match nodes.pop() {
        Some(root) => Ok(root),
        None => Err(InputError::Empty.into()),
    }
}
