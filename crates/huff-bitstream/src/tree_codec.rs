//! Compact wire form of a Huffman tree
//!
//! Pre-order, one tag bit per node (`1` leaf, `0` internal). A leaf is
//! followed by its symbol in `Symbol::BITS` bits and its weight as a varint.
//! Internal weights are not stored; they are recomputed from the children.
//! The bits are packed LSB-first and zero-padded to a whole byte.

use crate::bitwriter::varint_len;
use crate::{BitReader, BitWriter, HuffmanNode, HuffmanTree};
use huff_core::consts::MAX_TREE_DEPTH;
use huff_core::{HuffError, HuffResult, Symbol};
use std::collections::BTreeSet;
use std::io::{Read, Write};

impl<S: Symbol> HuffmanTree<S> {
    /// Write the tree bits without padding
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> HuffResult<()> {
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, weight } => {
                    writer.write_bit(true)?;
                    writer.write_bits(symbol.to_bits(), S::BITS)?;
                    writer.write_varint(*weight)?;
                }
                HuffmanNode::Internal { left, right, .. } => {
                    writer.write_bit(false)?;
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        Ok(())
    }

    /// Read a tree written by `write_to`
    pub fn read_from<R: Read>(reader: &mut BitReader<R>) -> HuffResult<Self> {
        let mut seen = BTreeSet::new();
        let root = read_node(reader, 0, &mut seen)?;
        Self::from_root(root)
    }

    pub fn to_bytes(&self) -> HuffResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.serialized_len());
        {
            let mut writer = BitWriter::new(&mut bytes);
            self.write_to(&mut writer)?;
            writer.flush()?;
        }
        Ok(bytes)
    }

    /// Parse a tree from exactly the bytes produced by `to_bytes`
    pub fn from_bytes(bytes: &[u8]) -> HuffResult<Self> {
        let mut reader = BitReader::new(bytes);
        let tree = Self::read_from(&mut reader).map_err(into_tree_error)?;
        reader.finish().map_err(into_tree_error)?;
        Ok(tree)
    }

    /// Number of bits `write_to` emits
    pub fn serialized_bits(&self) -> usize {
        let mut bits = 0;
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            bits += 1;
            match node {
                HuffmanNode::Leaf { weight, .. } => bits += S::BITS + varint_len(*weight),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        bits
    }

    /// Byte length of `to_bytes`, without serializing
    pub fn serialized_len(&self) -> usize {
        self.serialized_bits().div_ceil(8)
    }
}

fn read_node<S: Symbol, R: Read>(
    reader: &mut BitReader<R>,
    depth: usize,
    seen: &mut BTreeSet<S>,
) -> HuffResult<HuffmanNode<S>> {
    if depth > MAX_TREE_DEPTH {
        return Err(HuffError::InvalidTree(format!(
            "Tree deeper than {} levels",
            MAX_TREE_DEPTH
        )));
    }

    if !reader.read_bit()? {
        let left = read_node(reader, depth + 1, seen)?;
        let right = read_node(reader, depth + 1, seen)?;
        return HuffmanNode::merge(left, right);
    }

    let raw = reader.read_bits(S::BITS)?;
    let symbol = S::from_bits(raw)
        .ok_or_else(|| HuffError::InvalidTree(format!("Symbol value {} out of range", raw)))?;
    let weight = reader.read_varint()?;
    if weight == 0 {
        return Err(HuffError::InvalidTree(format!(
            "Leaf {:?} has zero weight",
            symbol
        )));
    }
    if !seen.insert(symbol) {
        return Err(HuffError::InvalidTree(format!(
            "Symbol {:?} appears twice",
            symbol
        )));
    }

    Ok(HuffmanNode::Leaf { symbol, weight })
}

fn into_tree_error(err: HuffError) -> HuffError {
    match err {
        HuffError::MalformedBitstream(msg) => HuffError::InvalidTree(msg),
        other => other,
    }
}
