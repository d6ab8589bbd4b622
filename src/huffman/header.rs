use crate::{bitstreams::{BitRead, BitWrite}, error::{HuffError, Result}};

use super::{HuffNode, BITS_PER_INT, HUFF_TREE, MAX_TREE_DEPTH, PSEUDO_EOF, SYMBOL_BITS};

/// Writes the magic number followed by the pre-order serialization of `root`:
/// a `0` bit before each internal node, a `1` bit and the 9-bit symbol for each
/// leaf. Returns the number of bits written.
pub fn write_header<W: BitWrite>(root: &HuffNode, writer: &mut W) -> usize {
    let start = writer.bits_written();

    writer.write_bits(BITS_PER_INT, HUFF_TREE as u64);
    write_tree(root, writer);

    writer.bits_written() - start
}

fn write_tree<W: BitWrite>(node: &HuffNode, writer: &mut W) {
    match node {
        HuffNode::Internal { left, right, .. } => {
            writer.write_bits(1, 0);
            write_tree(left, writer);
            write_tree(right, writer);
        }
        HuffNode::Leaf { symbol, .. } => {
            writer.write_bits(1, 1);
            writer.write_bits(SYMBOL_BITS, *symbol as u64);
        }
    }
}

/// Checks the magic number and rebuilds the tree written by [`write_header`].
/// Leaves come back with weight 0.
pub fn read_header<R: BitRead>(reader: &mut R) -> Result<HuffNode> {
    let magic = reader.read_bits(BITS_PER_INT).ok_or(HuffError::TruncatedHeader)? as u32;

    if magic != HUFF_TREE {
        return Err(HuffError::BadMagic(magic));
    }

    read_tree(reader, 0)
}

fn read_tree<R: BitRead>(reader: &mut R, depth: usize) -> Result<HuffNode> {
    if depth > MAX_TREE_DEPTH {
        return Err(HuffError::TreeTooDeep(MAX_TREE_DEPTH));
    }

    match reader.read_bits(1).ok_or(HuffError::TruncatedHeader)? {
        0 => {
            let left = read_tree(reader, depth + 1)?;
            let right = read_tree(reader, depth + 1)?;
            Ok(HuffNode::merge(left, right))
        }
        _ => {
            let symbol = reader.read_bits(SYMBOL_BITS).ok_or(HuffError::TruncatedHeader)? as u16;

            if symbol > PSEUDO_EOF {
                return Err(HuffError::InvalidSymbol(symbol));
            }

            Ok(HuffNode::leaf(symbol, 0))
        }
    }
}
