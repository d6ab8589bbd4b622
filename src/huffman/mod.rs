pub mod frequency;
pub mod tree;
pub mod codes;
pub mod header;
pub mod huffman_encoder;
pub mod huffman_decoder;

pub use codes::{CodeTable, HuffCode};
pub use frequency::FrequencyTable;
pub use huffman_decoder::HuffmanDecoder;
pub use huffman_encoder::HuffmanEncoder;

pub const BITS_PER_WORD: u64 = 8;
pub const BITS_PER_INT: u64 = 32;
/// Width of the symbol field stored in a header leaf.
pub const SYMBOL_BITS: u64 = BITS_PER_WORD + 1;
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;
/// Synthetic symbol closing every compressed body.
pub const PSEUDO_EOF: u16 = ALPH_SIZE as u16;
pub const NUM_SYMBOLS: usize = ALPH_SIZE + 1;
pub const HUFF_NUMBER: u32 = 0xface8200;
/// Magic number of the tree-header format.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;
/// A tree over `NUM_SYMBOLS` leaves cannot be deeper than this.
pub const MAX_TREE_DEPTH: usize = NUM_SYMBOLS - 1;

/// A node of a Huffman tree. Children are owned by their parent.
#[derive(Clone, Debug)]
pub enum HuffNode {
    Leaf {
        symbol: u16,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u16, weight: usize) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    pub fn merge(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline(always)]
    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    #[inline(always)]
    pub fn symbol(&self) -> Option<u16> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.num_leaves() + right.num_leaves(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Structural equality: same shape and same symbols at the same leaves. Weights
/// are not part of the serialized tree and are ignored.
impl PartialEq for HuffNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HuffNode::Leaf { symbol: a, .. }, HuffNode::Leaf { symbol: b, .. }) => a == b,
            (
                HuffNode::Internal { left: l1, right: r1, .. },
                HuffNode::Internal { left: l2, right: r2, .. },
            ) => l1 == l2 && r1 == r2,
            _ => false,
        }
    }
}

impl Eq for HuffNode {}
