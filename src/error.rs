//! Error types shared across the crate.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the compression core.
///
/// Every failure is a distinct, recoverable value; the core never retries
/// and never panics on malformed data.
#[derive(Debug, Error)]
pub enum Error {
    /// The input to `compress` contained no symbols.
    #[error("empty input: nothing to compress")]
    EmptyInput,

    /// An intermediate structure was malformed, e.g. an empty frequency
    /// table handed to the tree builder. Indicates a bug in the calling
    /// code rather than bad user data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A Huffman tree failed a structural requirement, e.g. a bare leaf
    /// at the root.
    #[error("invalid tree: {0}")]
    InvalidTree(String),

    /// A container header failed structural validation: bad version,
    /// inconsistent lengths, or a truncated buffer.
    #[error("corrupt header: {0}")]
    CorruptHeader(String),

    /// The packed payload did not resolve to a complete, valid sequence
    /// of codes.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl Error {
    /// Creates an `InvalidInput` error with the given message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Creates an `InvalidTree` error with the given message.
    pub fn invalid_tree(msg: impl Into<String>) -> Self {
        Error::InvalidTree(msg.into())
    }

    /// Creates a `CorruptHeader` error with the given message.
    pub fn corrupt_header(msg: impl Into<String>) -> Self {
        Error::CorruptHeader(msg.into())
    }

    /// Creates a `Decode` error with the given message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }
}
