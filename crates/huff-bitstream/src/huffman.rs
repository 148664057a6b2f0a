//! Huffman tree construction

use crate::{Codebook, FrequencyTable};
use huff_core::{HuffError, HuffResult, Symbol};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Huffman tree node
///
/// An internal node always owns exactly two children and its weight is the
/// sum of theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Join two subtrees under a new internal node
    pub fn merge(left: HuffmanNode<S>, right: HuffmanNode<S>) -> HuffResult<Self> {
        let weight = left.weight().checked_add(right.weight()).ok_or_else(|| {
            HuffError::InvalidTree("Combined weight overflows u64".to_string())
        })?;
        Ok(HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest weight first,
/// and among equal weights the node created first
struct QueueEntry<S> {
    weight: u64,
    sequence: usize,
    node: HuffmanNode<S>,
}

impl<S> QueueEntry<S> {
    fn key(&self) -> (u64, usize) {
        (self.weight, self.sequence)
    }
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other.key().cmp(&self.key())
    }
}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete Huffman tree
///
/// A tree with a single symbol is a lone leaf; its code is empty and it is
/// decoded without consuming any bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves enter the queue in ascending symbol order, numbered from 0;
    /// every merged node takes the next number. Ties on weight are broken
    /// by that number, so the same table always yields the same tree. The
    /// first node extracted becomes the left child.
    pub fn from_frequencies(table: &FrequencyTable<S>) -> HuffResult<Self> {
        if table.is_empty() {
            return Err(HuffError::InvalidParameter(
                "Cannot build a tree from an empty frequency table".to_string(),
            ));
        }

        let mut queue = BinaryHeap::with_capacity(table.len());
        for (sequence, (symbol, weight)) in table.iter().enumerate() {
            if weight == 0 {
                return Err(HuffError::InvalidParameter(format!(
                    "Symbol {:?} has a zero count",
                    symbol
                )));
            }
            queue.push(QueueEntry {
                weight,
                sequence,
                node: HuffmanNode::Leaf { symbol, weight },
            });
        }

        let mut next_sequence = queue.len();
        while let Some(first) = queue.pop() {
            let Some(second) = queue.pop() else {
                log::trace!(
                    "Built Huffman tree over {} symbols, total weight {}",
                    table.len(),
                    first.weight
                );
                return Ok(Self { root: first.node });
            };

            let node = HuffmanNode::merge(first.node, second.node)?;
            queue.push(QueueEntry {
                weight: node.weight(),
                sequence: next_sequence,
                node,
            });
            next_sequence += 1;
        }

        Err(HuffError::InvalidParameter(
            "Cannot build a tree from an empty frequency table".to_string(),
        ))
    }

    /// Wrap an existing root node, checking the weight invariant
    pub fn from_root(root: HuffmanNode<S>) -> HuffResult<Self> {
        fn check<T: Symbol>(node: &HuffmanNode<T>) -> HuffResult<()> {
            match node {
                HuffmanNode::Leaf { weight: 0, symbol } => Err(HuffError::InvalidTree(format!(
                    "Leaf {:?} has zero weight",
                    symbol
                ))),
                HuffmanNode::Leaf { .. } => Ok(()),
                HuffmanNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    if left.weight().checked_add(right.weight()) != Some(*weight) {
                        return Err(HuffError::InvalidTree(format!(
                            "Internal weight {} is not {} + {}",
                            weight,
                            left.weight(),
                            right.weight()
                        )));
                    }
                    check(left)?;
                    check(right)
                }
            }
        }

        check(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Total weight, i.e. the length of the sequence the tree was built from
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// True for the single-leaf tree of a one-symbol alphabet
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => count += 1,
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => max_depth = max_depth.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        max_depth
    }

    pub fn codebook(&self) -> Codebook<S> {
        Codebook::from_tree(self)
    }
}
