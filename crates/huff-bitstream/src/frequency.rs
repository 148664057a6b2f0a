//! Symbol frequency model

use huff_core::{HuffError, HuffResult, Symbol};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Occurrence counts of every symbol present in a sequence
///
/// Every stored count is strictly positive and the counts sum to the length
/// of the tabulated sequence. Iteration is in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "S: Serialize",
        deserialize = "S: Symbol + Deserialize<'de>"
    ))
)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol of `symbols`
    pub fn tabulate(symbols: &[S]) -> Self {
        let mut counts = BTreeMap::new();
        for &symbol in symbols {
            *counts.entry(symbol).or_insert(0u64) += 1;
        }
        Self { counts }
    }

    /// Build a table from explicit `(symbol, count)` pairs
    pub fn from_counts<I>(counts: I) -> HuffResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = BTreeMap::new();
        for (symbol, count) in counts {
            if count == 0 {
                return Err(HuffError::InvalidParameter(format!(
                    "Symbol {:?} has a zero count",
                    symbol
                )));
            }
            if table.insert(symbol, count).is_some() {
                return Err(HuffError::InvalidParameter(format!(
                    "Symbol {:?} listed twice",
                    symbol
                )));
            }
        }
        Ok(Self { counts: table })
    }

    /// Count of `symbol`, 0 when absent
    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.counts.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulate() {
        let table = FrequencyTable::tabulate(&[3u8, 1, 3, 3, 2, 1]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&3), 3);
        assert_eq!(table.get(&1), 2);
        assert_eq!(table.get(&2), 1);
        assert_eq!(table.get(&9), 0);
        assert_eq!(table.total(), 6);
        assert_eq!(table.symbols().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_tabulate_empty() {
        let table = FrequencyTable::<u8>::tabulate(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_from_counts() {
        let table = FrequencyTable::from_counts([('b', 2), ('a', 5)]).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![('a', 5), ('b', 2)]);

        assert!(matches!(
            FrequencyTable::from_counts([('a', 0)]),
            Err(HuffError::InvalidParameter(_))
        ));
        assert!(matches!(
            FrequencyTable::from_counts([('a', 1), ('a', 2)]),
            Err(HuffError::InvalidParameter(_))
        ));
    }
}
