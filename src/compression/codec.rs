//! The compress/decompress facade.
//!
//! `HuffmanCodec` orchestrates the pipeline: frequency analysis, tree
//! construction, code derivation, bit packing, and container assembly for
//! compression, and the exact mirror for decompression. Each call owns
//! its intermediate structures exclusively, so a single codec value can
//! serve concurrent calls on different inputs without locking.

use log::debug;

use crate::compression::bitpack::{self, BitPacker};
use crate::compression::code::CodeTable;
use crate::compression::container::Container;
use crate::compression::frequency::FrequencyTable;
use crate::compression::tree::{build_tree, HuffmanNode};
use crate::compression::{Compression, Result};
use crate::error::Error;

/// Pipeline milestones reported to an optional observer.
///
/// Instrumentation and timing belong to the calling layer; the core only
/// announces that a stage finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Frequency analysis over the input is complete.
    FrequenciesCounted,
    /// The Huffman tree has been (re)built.
    TreeBuilt,
    /// The code table has been derived from the tree.
    CodesGenerated,
    /// The payload has been packed into bytes.
    PayloadPacked,
    /// The payload has been decoded back into symbols.
    PayloadDecoded,
}

type Observer = Box<dyn Fn(Milestone) + Send + Sync>;

/// Orchestrates Huffman compression and decompression.
#[derive(Default)]
pub struct HuffmanCodec {
    observer: Option<Observer>,
}

impl HuffmanCodec {
    /// Creates a codec without an observer.
    pub fn new() -> Self {
        HuffmanCodec { observer: None }
    }

    /// Creates a codec that calls `observer` at each pipeline milestone.
    pub fn with_observer(observer: impl Fn(Milestone) + Send + Sync + 'static) -> Self {
        HuffmanCodec {
            observer: Some(Box::new(observer)),
        }
    }

    fn notify(&self, milestone: Milestone) {
        if let Some(observer) = &self.observer {
            observer(milestone);
        }
    }

    /// Compresses `data` into a container.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if `data` is empty; compressing
    /// nothing never produces a container.
    pub fn encode(&self, data: &[u8]) -> Result<Container> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        let freq = FrequencyTable::from_bytes(data);
        debug!("frequency analysis done: {} distinct symbols", freq.len());
        self.notify(Milestone::FrequenciesCounted);

        let tree = build_tree(&freq)?;
        self.notify(Milestone::TreeBuilt);

        let codes = CodeTable::from_tree(&tree)?;
        self.notify(Milestone::CodesGenerated);

        let mut packer = BitPacker::new();
        for &symbol in data {
            let code = codes.get(symbol).ok_or_else(|| {
                Error::invalid_input(format!("symbol {symbol:#04x} missing from code table"))
            })?;
            packer.push(code);
        }
        let (payload, bit_count) = packer.finish();
        debug!("packed {} symbols into {} bits", data.len(), bit_count);
        self.notify(Milestone::PayloadPacked);

        Container::new(freq, bit_count, payload)
    }

    /// Decompresses a container back into the original bytes.
    ///
    /// The tree is rebuilt from the stored frequency table, which yields
    /// bit for bit the tree used during compression, and the payload is
    /// decoded by walking that tree: since the code is prefix-free, the
    /// first leaf reached is the only valid decode at each position.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decode` if the payload does not resolve to a
    /// complete sequence of codes or the decoded length disagrees with
    /// the frequency table.
    pub fn decode(&self, container: &Container) -> Result<Vec<u8>> {
        let freq = container.frequency_table();
        let tree = build_tree(freq)?;
        self.notify(Milestone::TreeBuilt);

        let expected_len = freq.total();
        let bit_count = container.bit_count();
        // Every code is at least one bit, so more symbols than bits is
        // corruption; catching it here also bounds the allocation below.
        if expected_len > bit_count {
            return Err(Error::decode(format!(
                "frequency table promises {expected_len} symbols but payload has {bit_count} bits"
            )));
        }

        let bits = bitpack::unpack(container.payload(), bit_count)?;
        let mut output = Vec::with_capacity(expected_len as usize);
        let mut node = &tree;
        for bit in bits.iter().by_vals() {
            let next = match node {
                HuffmanNode::Internal { left, right, .. } => {
                    if bit {
                        right.as_deref().ok_or_else(|| {
                            Error::decode("1 bit has no code in a single-symbol stream")
                        })?
                    } else {
                        left.as_ref()
                    }
                }
                HuffmanNode::Leaf { .. } => {
                    return Err(Error::invalid_tree("walk descended into a leaf"));
                }
            };
            if let HuffmanNode::Leaf { symbol, .. } = next {
                output.push(*symbol);
                node = &tree;
            } else {
                node = next;
            }
        }
        if !std::ptr::eq(node, &tree) {
            return Err(Error::decode("payload ended in the middle of a code"));
        }
        if output.len() as u64 != expected_len {
            return Err(Error::decode(format!(
                "decoded {} symbols, frequency table promised {}",
                output.len(),
                expected_len
            )));
        }
        debug!("decoded {} symbols from {} bits", output.len(), bit_count);
        self.notify(Milestone::PayloadDecoded);

        Ok(output)
    }
}

impl Compression for HuffmanCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encode(data)?.to_bytes())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let container = Container::from_bytes(data)?;
        self.decode(&container)
    }
}
