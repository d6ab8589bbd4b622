use std::{fs::{self, File}, io::BufWriter, path::Path};

use serde::{Serialize, Deserialize};

use crate::error::Result;

use super::{HuffNode, NUM_SYMBOLS};

/// A codeword: the `len` low bits of `bits`, first branch in the most significant
/// position (left = 0, right = 1).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffCode {
    pub len: u32,
    pub bits: u64,
}

impl HuffCode {
    #[inline(always)]
    fn push(self, bit: u64) -> Self {
        debug_assert!(self.len < u64::BITS, "code longer than 64 bits");
        Self { len: self.len + 1, bits: (self.bits << 1) | bit }
    }

    /// Whether `self` is a (not necessarily proper) prefix of `other`.
    pub fn is_prefix_of(&self, other: &HuffCode) -> bool {
        self.len <= other.len
            && other.bits.checked_shr(other.len - self.len).unwrap_or(0) == self.bits
    }
}

/// Maps every symbol of a tree to the path leading to its leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTable {
    codes: Vec<Option<HuffCode>>,
}

impl CodeTable {
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut table = Self { codes: vec![None; NUM_SYMBOLS] };

        match root {
            // A lone leaf has an empty path; give it the one-bit code 0 instead.
            HuffNode::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some(HuffCode { len: 1, bits: 0 });
            }
            HuffNode::Internal { .. } => table.assign(root, HuffCode::default()),
        }

        table
    }

    fn assign(&mut self, node: &HuffNode, code: HuffCode) {
        match node {
            HuffNode::Leaf { symbol, .. } => self.codes[*symbol as usize] = Some(code),
            HuffNode::Internal { left, right, .. } => {
                self.assign(left, code.push(0));
                self.assign(right, code.push(1));
            }
        }
    }

    #[inline(always)]
    pub fn get(&self, symbol: u16) -> Option<HuffCode> {
        self.codes.get(symbol as usize).copied().flatten()
    }

    /// Assigned codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, HuffCode)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u16, c)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_len(&self) -> u32 {
        self.iter().map(|(_, code)| code.len).max().unwrap_or(0)
    }

    /// Writes the table to `path` with `bincode`.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Reads a table written by [`CodeTable::dump`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(bincode::deserialize(&fs::read(path)?)?)
    }
}
