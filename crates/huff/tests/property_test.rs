//! Property-based testing for the Huffman engine
//!
//! Uses proptest to check the code construction invariants over arbitrary
//! symbol sequences.

use huff::*;
use proptest::prelude::*;

/// Sequences over a small alphabet, so that symbols repeat and ties occur
fn small_alphabet_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..12, 1..2000)
}

fn check_weights(node: &HuffmanNode<u8>) -> u64 {
    match node {
        HuffmanNode::Leaf { weight, .. } => *weight,
        HuffmanNode::Internal {
            weight,
            left,
            right,
        } => {
            let sum = check_weights(left) + check_weights(right);
            assert_eq!(*weight, sum);
            sum
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..3000)) {
        let encoded = compress(&data).unwrap();
        let decoded = decode_symbols(&encoded.bitstream, encoded.tree.as_ref(), Some(data.len())).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn prop_roundtrip_small_alphabet(data in small_alphabet_strategy()) {
        let encoded = compress(&data).unwrap();
        prop_assert_eq!(decompress(&encoded).unwrap(), data);
    }

    #[test]
    fn prop_prefix_free(data in small_alphabet_strategy()) {
        let table = FrequencyTable::tabulate(&data);
        let codebook = HuffmanTree::from_frequencies(&table).unwrap().codebook();

        prop_assert_eq!(codebook.len(), table.len());
        if codebook.len() >= 2 {
            prop_assert!(codebook.is_prefix_free());
            prop_assert!(codebook.iter().all(|(_, code)| !code.is_empty()));
        }
    }

    #[test]
    fn prop_weight_invariant(data in small_alphabet_strategy()) {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::tabulate(&data)).unwrap();
        prop_assert_eq!(check_weights(tree.root()), data.len() as u64);
        prop_assert_eq!(tree.weight(), data.len() as u64);
    }

    #[test]
    fn prop_monotonic_code_length(data in small_alphabet_strategy()) {
        let table = FrequencyTable::tabulate(&data);
        let codebook = HuffmanTree::from_frequencies(&table).unwrap().codebook();

        for (a, freq_a) in table.iter() {
            for (b, freq_b) in table.iter() {
                if freq_a > freq_b {
                    prop_assert!(codebook.code_len(&a) <= codebook.code_len(&b));
                }
            }
        }
    }

    #[test]
    fn prop_bit_count_matches_codebook(data in small_alphabet_strategy()) {
        let encoded = compress(&data).unwrap();
        let table = FrequencyTable::tabulate(&data);
        let codebook = encoded.tree.as_ref().unwrap().codebook();

        prop_assert_eq!(encoded.bitstream.len() as u64, codebook.encoded_len(&table).unwrap());
    }

    #[test]
    fn prop_tree_bytes_roundtrip(data in small_alphabet_strategy()) {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::tabulate(&data)).unwrap();
        let bytes = tree.to_bytes().unwrap();

        prop_assert_eq!(bytes.len(), tree.serialized_len());
        prop_assert_eq!(HuffmanTree::<u8>::from_bytes(&bytes).unwrap(), tree);
    }

    #[test]
    fn prop_multi_stream_independence(
        channels in prop::collection::vec(prop::collection::vec(any::<u8>(), 64), 1..5)
    ) {
        let encoding = HuffmanEncoder::default().encode_streams(&channels).unwrap();
        let decoded = HuffmanDecoder::default().decode_streams(&encoding).unwrap();
        prop_assert_eq!(decoded, channels);
    }
}
