//! Integration test for round-trip encoding/decoding

use huff::*;

/// Helper function to create a grayscale gradient with some noise-like texture
fn create_test_samples(width: usize, height: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let base = (x * 255) / width.max(1);
            let texture = (x * 7 + y * 13) % 9;
            samples.push((base + texture).min(255) as u8);
        }
    }
    samples
}

fn roundtrip<S: Symbol>(symbols: &[S]) -> EncodedStream<S> {
    let encoded = HuffmanEncoder::default()
        .encode(symbols)
        .expect("Encoding failed");
    let decoded = HuffmanDecoder::default()
        .decode(&encoded)
        .expect("Decoding failed");
    assert_eq!(decoded, symbols);
    encoded
}

#[test]
fn test_roundtrip_concrete_scenario() {
    let symbols: Vec<char> = "AABAC".chars().collect();
    let table = FrequencyTable::from_counts([('A', 5), ('B', 2), ('C', 1), ('D', 1)]).unwrap();
    let tree = HuffmanTree::from_frequencies(&table).unwrap();
    let codebook = tree.codebook();

    assert_eq!(codebook.code_len(&'A'), Some(1));
    assert_eq!(codebook.code_len(&'C'), Some(3));
    assert_eq!(codebook.code_len(&'D'), Some(3));

    let bits = encode_symbols(&symbols, &codebook).unwrap();
    let decoded = decode_symbols(&bits, Some(&tree), Some(symbols.len())).unwrap();
    assert_eq!(decoded.iter().collect::<String>(), "AABAC");
}

#[test]
fn test_roundtrip_grayscale_image() {
    let samples = create_test_samples(64, 48);
    let encoded = roundtrip(&samples);

    let stats = encoded.statistics();
    println!("{}", stats);
    assert_eq!(stats.original_size, samples.len());
    // Never worse than the fixed 8-bit code
    assert!(stats.bits_per_symbol() <= 8.0);
}

#[test]
fn test_roundtrip_different_sizes() {
    for (width, height) in [(1, 1), (3, 5), (32, 32), (128, 96)] {
        let samples = create_test_samples(width, height);
        roundtrip(&samples);
    }
}

#[test]
fn test_roundtrip_wide_symbols() {
    let words: Vec<u32> = (0..5000u32).map(|i| i.wrapping_mul(2654435761) >> 20).collect();
    roundtrip(&words);

    let text: Vec<char> = "ünïcødé tëxt with ✓ and spaces ".repeat(20).chars().collect();
    roundtrip(&text);
}

#[test]
fn test_roundtrip_via_serialized_tree() {
    let samples = create_test_samples(40, 40);
    let encoded = HuffmanEncoder::default().encode(&samples).unwrap();

    // Ship the tree and the packed bits, then rebuild both on the other side
    let tree_bytes = encoded.tree.as_ref().unwrap().to_bytes().unwrap();
    let bit_bytes = encoded.bitstream.to_bytes();
    assert_eq!(tree_bytes.len(), encoded.tree_size());

    let tree = HuffmanTree::<u8>::from_bytes(&tree_bytes).unwrap();
    let bits = Bitstream::from_bytes(&bit_bytes, encoded.bitstream.len()).unwrap();
    let decoded = decode_symbols(&bits, Some(&tree), Some(encoded.symbol_count)).unwrap();

    assert_eq!(decoded, samples);
}

#[test]
fn test_roundtrip_via_rebuilt_tree() {
    let samples = create_test_samples(50, 20);
    let encoded = HuffmanEncoder::default().encode(&samples).unwrap();

    // A decoder holding only the frequency table rebuilds the same tree
    let table = FrequencyTable::tabulate(&samples);
    let rebuilt = HuffmanTree::from_frequencies(&table).unwrap();
    assert_eq!(Some(&rebuilt), encoded.tree.as_ref());

    let decoded = decode_symbols(&encoded.bitstream, Some(&rebuilt), None).unwrap();
    assert_eq!(decoded, samples);
}
