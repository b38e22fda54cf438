//! Prefix-free code table derivation.

use std::collections::HashMap;

use bitvec::prelude::*;

use crate::compression::tree::HuffmanNode;
use crate::compression::Result;
use crate::error::Error;

/// Bit container used for codes throughout the crate: byte-backed,
/// most significant bit first.
pub type CodeBits = BitVec<u8, Msb0>;

/// Mapping from each symbol to its Huffman code.
///
/// The set of codes equals exactly the set of root-to-leaf paths of the
/// tree that produced it (0 for left, 1 for right), and is therefore
/// prefix-free: no code is a prefix of another.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<u8, CodeBits>,
}

impl CodeTable {
    /// Derives the code table by traversing `root`, appending a 0 bit
    /// when descending left and a 1 bit when descending right.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTree` if `root` is a bare leaf. The tree
    /// builder wraps single-symbol trees in an internal root, so a leaf
    /// here would assign a zero-length code, which cannot be decoded.
    pub fn from_tree(root: &HuffmanNode) -> Result<CodeTable> {
        if root.is_leaf() {
            return Err(Error::invalid_tree(
                "root is a bare leaf; its symbol would receive an empty code",
            ));
        }
        let mut codes = HashMap::new();
        let mut prefix = CodeBits::new();
        collect(root, &mut prefix, &mut codes);
        Ok(CodeTable { codes })
    }

    /// Returns the code for `symbol`, if the symbol occurred in the
    /// frequency table the tree was built from.
    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> {
        self.codes.iter().map(|(&s, code)| (s, code.as_bitslice()))
    }
}

fn collect(node: &HuffmanNode, prefix: &mut CodeBits, codes: &mut HashMap<u8, CodeBits>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            prefix.push(false);
            collect(left, prefix, codes);
            prefix.pop();
            if let Some(right) = right {
                prefix.push(true);
                collect(right, prefix, codes);
                prefix.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::frequency::FrequencyTable;
    use crate::compression::tree::build_tree;

    fn table_for(data: &[u8]) -> CodeTable {
        let freq = FrequencyTable::from_bytes(data);
        let tree = build_tree(&freq).unwrap();
        CodeTable::from_tree(&tree).unwrap()
    }

    #[test]
    fn test_bare_leaf_root_rejected() {
        let leaf = HuffmanNode::Leaf {
            symbol: b'a',
            weight: 4,
        };
        assert!(matches!(
            CodeTable::from_tree(&leaf),
            Err(Error::InvalidTree(_))
        ));
    }

    #[test]
    fn test_expected_codes_for_aabbbc() {
        let codes = table_for(b"aabbbc");
        assert_eq!(codes.get(b'b').unwrap(), bits![u8, Msb0; 0]);
        assert_eq!(codes.get(b'c').unwrap(), bits![u8, Msb0; 1, 0]);
        assert_eq!(codes.get(b'a').unwrap(), bits![u8, Msb0; 1, 1]);
    }

    #[test]
    fn test_single_symbol_code_is_zero() {
        let codes = table_for(b"aaaa");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(b'a').unwrap(), bits![u8, Msb0; 0]);
    }

    #[test]
    fn test_every_input_symbol_is_coded() {
        let data = b"this is an example for huffman encoding";
        let codes = table_for(data);
        for &symbol in data {
            assert!(codes.get(symbol).is_some(), "missing code for {symbol:#04x}");
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let codes = table_for(b"mississippi riverbank");
        let all: Vec<_> = codes.iter().collect();
        for (a_sym, a_code) in &all {
            for (b_sym, b_code) in &all {
                if a_sym == b_sym {
                    continue;
                }
                assert!(
                    !a_code.starts_with(b_code),
                    "code for {a_sym:#04x} has the code for {b_sym:#04x} as a prefix"
                );
            }
        }
    }

    #[test]
    fn test_codes_are_nonempty() {
        let codes = table_for(b"abcdefgh");
        for (_, code) in codes.iter() {
            assert!(!code.is_empty());
        }
    }
}
