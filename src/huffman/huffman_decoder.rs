use crate::{bitstreams::BitRead, error::{HuffError, Result}};

use super::{header, HuffNode, PSEUDO_EOF};

pub struct HuffmanDecoder {
    root: HuffNode,
}

impl HuffmanDecoder {
    pub fn new(root: HuffNode) -> Self {
        Self { root }
    }

    /// Reads the magic number and the tree from `reader`.
    pub fn decode_header<R: BitRead>(reader: &mut R) -> Result<Self> {
        Ok(Self::new(header::read_header(reader)?))
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Descends the tree one bit at a time and returns the symbol of the leaf
    /// reached, which may be `PSEUDO_EOF`.
    #[inline(always)]
    pub fn read_next<R: BitRead>(&self, reader: &mut R) -> Result<u16> {
        let mut node = &self.root;

        // A one-leaf tree uses the single code `0`.
        if let HuffNode::Leaf { symbol, .. } = node {
            reader.read_bits(1).ok_or(HuffError::MissingEof)?;
            return Ok(*symbol);
        }

        loop {
            match node {
                HuffNode::Leaf { symbol, .. } => return Ok(*symbol),
                HuffNode::Internal { left, right, .. } => {
                    let bit = reader.read_bits(1).ok_or(HuffError::MissingEof)?;
                    node = if bit == 0 { &**left } else { &**right };
                }
            }
        }
    }

    /// Decodes symbols until `PSEUDO_EOF`. Nothing is returned unless the
    /// end-of-data code is reached.
    pub fn read_body<R: BitRead>(&self, reader: &mut R) -> Result<Vec<u8>> {
        let mut output = Vec::new();

        loop {
            match self.read_next(reader)? {
                PSEUDO_EOF => break,
                symbol => output.push(symbol as u8),
            }
        }

        log::debug!("decoded {} bytes", output.len());

        Ok(output)
    }
}
