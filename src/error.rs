use thiserror::Error;

/// Errors raised while compressing or decompressing a Huffman stream.
#[derive(Error, Debug)]
pub enum HuffError {
    /// The stream does not start with the tree-header magic number.
    #[error("illegal header starts with {0:#010x}")]
    BadMagic(u32),

    /// The stream ended while the tree header was being read.
    #[error("stream ended inside the tree header")]
    TruncatedHeader,

    /// A leaf in the tree header carries a value outside the symbol space.
    #[error("invalid symbol {0} in tree header")]
    InvalidSymbol(u16),

    /// The tree header nests deeper than any Huffman tree over the alphabet can.
    #[error("tree header is deeper than {0} levels")]
    TreeTooDeep(usize),

    /// The body ended before the end-of-data code was decoded.
    #[error("no PSEUDO_EOF before the end of the stream")]
    MissingEof,

    /// A symbol with no code was met while encoding.
    #[error("no code assigned to symbol {0}")]
    MissingCode(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed properties: {0}")]
    Properties(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;
