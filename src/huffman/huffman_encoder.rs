use crate::{bitstreams::{BitRead, BitWrite}, error::{HuffError, Result}};

use super::{header, tree::create_huffman_tree, CodeTable, FrequencyTable, HuffNode, BITS_PER_WORD, PSEUDO_EOF};

/// Holds the tree and code table derived from one input's frequencies.
pub struct HuffmanEncoder {
    freq: FrequencyTable,
    root: HuffNode,
    codes: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(freq: FrequencyTable) -> Self {
        let root = create_huffman_tree(&freq);
        let codes = CodeTable::from_tree(&root);

        log::debug!(
            "huffman tree: {} leaves, depth {}, longest code {} bits",
            root.num_leaves(),
            root.depth(),
            codes.max_len()
        );

        Self { freq, root, codes }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self::new(FrequencyTable::from_bytes(data))
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freq
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn into_codes(self) -> CodeTable {
        self.codes
    }

    /// Writes the magic number and the tree. Returns the number of bits written.
    pub fn write_header<W: BitWrite>(&self, writer: &mut W) -> usize {
        header::write_header(&self.root, writer)
    }

    /// Writes the code of `symbol` and returns its length.
    #[inline(always)]
    pub fn write_next<W: BitWrite>(&self, symbol: u16, writer: &mut W) -> Result<usize> {
        let code = self.codes.get(symbol).ok_or(HuffError::MissingCode(symbol))?;
        writer.write_bits(code.len as u64, code.bits);
        Ok(code.len as usize)
    }

    /// Encodes every 8-bit word left in `reader`, then the end-of-data code.
    /// Returns the number of bits written.
    pub fn write_body<R: BitRead, W: BitWrite>(&self, reader: &mut R, writer: &mut W) -> Result<usize> {
        let mut written = 0;

        while let Some(word) = reader.read_bits(BITS_PER_WORD) {
            written += self.write_next(word as u16, writer)?;
        }

        written += self.write_next(PSEUDO_EOF, writer)?;

        Ok(written)
    }

    /// Same as [`write_body`](Self::write_body) over an in-memory input.
    pub fn write_bytes<W: BitWrite>(&self, data: &[u8], writer: &mut W) -> Result<usize> {
        let mut written = 0;

        for &byte in data.iter() {
            written += self.write_next(byte as u16, writer)?;
        }

        written += self.write_next(PSEUDO_EOF, writer)?;

        Ok(written)
    }
}
