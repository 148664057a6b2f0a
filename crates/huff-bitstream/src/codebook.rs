//! Codebook derivation from a Huffman tree

use crate::bitstream::CodeBits;
use crate::{FrequencyTable, HuffmanNode, HuffmanTree};
use bitvec::prelude::*;
use huff_core::Symbol;
use std::collections::BTreeMap;

/// Mapping from symbol to its code, the root-to-leaf path in the tree
/// (`0` = left, `1` = right)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook<S> {
    codes: BTreeMap<S, CodeBits>,
}

impl<S: Symbol> Codebook<S> {
    /// Walk the tree with an explicit stack; each entry carries its own path.
    ///
    /// A lone-leaf root gets the empty code.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack: Vec<(&HuffmanNode<S>, CodeBits)> = vec![(tree.root(), CodeBits::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right.as_ref(), right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSlice<u8, Lsb0>> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    pub fn code_len(&self, symbol: &S) -> Option<usize> {
        self.codes.get(symbol).map(|code| code.len())
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.codes.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &BitSlice<u8, Lsb0>)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Number of bits needed to encode a sequence with the given counts,
    /// or `None` if the table holds a symbol missing from the codebook
    pub fn encoded_len(&self, table: &FrequencyTable<S>) -> Option<u64> {
        table.iter().try_fold(0u64, |total, (symbol, count)| {
            let len = self.code_len(&symbol)? as u64;
            total.checked_add(len.checked_mul(count)?)
        })
    }

    /// True when no code is a prefix of another.
    ///
    /// After lexicographic sorting, a code that prefixes another also
    /// prefixes its immediate successor, so adjacent pairs suffice.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&BitSlice<u8, Lsb0>> =
            self.codes.values().map(|code| code.as_bitslice()).collect();
        codes.sort();
        codes
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }
}
