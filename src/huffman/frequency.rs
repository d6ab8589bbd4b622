use crate::bitstreams::BitRead;

use super::{BITS_PER_WORD, NUM_SYMBOLS, PSEUDO_EOF};

/// Occurrences of every byte value plus the end-of-data symbol, whose count is
/// always exactly one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Box<[usize]>,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        let mut counts = vec![0; NUM_SYMBOLS].into_boxed_slice();
        counts[PSEUDO_EOF as usize] = 1;
        Self { counts }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::default();

        for &byte in data.iter() {
            table.counts[byte as usize] += 1;
        }

        table
    }

    /// Counts 8-bit words until `reader` runs dry. The reader is left at the end of
    /// the stream; callers reset it before a second pass.
    pub fn from_reader<R: BitRead>(reader: &mut R) -> Self {
        let mut table = Self::default();

        while let Some(word) = reader.read_bits(BITS_PER_WORD) {
            table.counts[word as usize] += 1;
        }

        table
    }

    #[inline(always)]
    pub fn count(&self, symbol: u16) -> usize {
        self.counts[symbol as usize]
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u16, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u16, count))
    }

    pub fn distinct_symbols(&self) -> usize {
        self.present().count()
    }

    /// Number of input bytes counted, the end-of-data symbol excluded.
    pub fn total(&self) -> usize {
        self.counts[..PSEUDO_EOF as usize].iter().sum()
    }
}
