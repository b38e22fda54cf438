//! Lossless compression built on Huffman entropy coding.
//!
//! This module provides the full compression pipeline:
//! - Frequency analysis over byte streams
//! - Deterministic Huffman tree construction
//! - Prefix-free code table derivation
//! - Bit-level payload packing with explicit significant-bit tracking
//! - A self-describing binary container format
//!
//! The tree is never persisted; only the frequency table is stored in the
//! container, and the decoder rebuilds the identical tree from it.
//!
//! # Examples
//!
//! ```rust
//! use huffzip::{Compression, HuffmanCodec};
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(b"abracadabra")?;
//! let restored = codec.decompress(&compressed)?;
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), huffzip::Error>(())
//! ```

use crate::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress the compressed data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod bitpack;
pub mod code;
pub mod codec;
pub mod container;
pub mod frequency;
pub mod tree;

pub use bitpack::BitPacker;
pub use code::CodeTable;
pub use codec::{HuffmanCodec, Milestone};
pub use container::Container;
pub use frequency::FrequencyTable;
pub use tree::{build_tree, HuffmanNode};
