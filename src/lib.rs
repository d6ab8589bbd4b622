//! Static Huffman compression of byte streams.
//!
//! A compressed stream is the 32-bit magic number [`HUFF_TREE`], the pre-order
//! serialized code tree, then the code of every input byte followed by the code
//! of the end-of-data symbol, zero-padded to a whole byte.
//!
//! ```
//! let data = b"abracadabra";
//!
//! let compressed = huffman_rust::compress(data).unwrap();
//! assert_eq!(huffman_rust::decompress(&compressed).unwrap(), data);
//! ```

pub mod bitstreams;
pub mod error;
pub mod huffman;
pub mod processor;
pub mod properties;
pub mod utils;

pub use error::{HuffError, Result};
pub use huffman::{HuffNode, HUFF_TREE, PSEUDO_EOF};
pub use processor::{DecompressionStats, HuffConfig, HuffProcessor};
pub use properties::Properties;

pub fn compress(input: &[u8]) -> Result<Box<[u8]>> {
    HuffProcessor::default().compress(input).map(|(compressed, _)| compressed)
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    HuffProcessor::default().decompress(input).map(|(output, _)| output)
}
