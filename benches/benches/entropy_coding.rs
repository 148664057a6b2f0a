//! Benchmarks for Huffman tree construction, encoding and decoding
//!
//! Run with: cargo bench --bench entropy_coding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huff_bitstream::{FrequencyTable, HuffmanTree};
use huff_decoder::decode_symbols;
use huff_encoder::encode_symbols;

fn skewed_samples(alphabet_size: u32, len: u32) -> Vec<u8> {
    (0..len)
        .map(|i| ((i.wrapping_mul(2654435761) >> 16) % alphabet_size).min(i % alphabet_size) as u8)
        .collect()
}

fn bench_tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("Huffman Tree Building");

    let small = FrequencyTable::from_counts([(0u8, 100), (1, 200), (2, 300), (3, 400)]).unwrap();
    group.bench_function("build_tree_4_symbols", |b| {
        b.iter(|| HuffmanTree::from_frequencies(black_box(&small)).unwrap());
    });

    let large = FrequencyTable::from_counts((0..=255u8).map(|i| (i, ((i as u64 * 17) % 500) + 10))).unwrap();
    group.bench_function("build_tree_256_symbols", |b| {
        b.iter(|| HuffmanTree::from_frequencies(black_box(&large)).unwrap());
    });

    let tree = HuffmanTree::from_frequencies(&large).unwrap();
    group.bench_function("derive_codebook_256_symbols", |b| {
        b.iter(|| black_box(&tree).codebook());
    });

    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Huffman Encode/Decode");

    let samples = skewed_samples(64, 100_000);
    let tree = HuffmanTree::from_frequencies(&FrequencyTable::tabulate(&samples)).unwrap();
    let codebook = tree.codebook();
    let bits = encode_symbols(&samples, &codebook).unwrap();

    group.bench_function("tabulate_100k", |b| {
        b.iter(|| FrequencyTable::tabulate(black_box(&samples)));
    });

    group.bench_function("encode_100k", |b| {
        b.iter(|| encode_symbols(black_box(&samples), black_box(&codebook)).unwrap());
    });

    group.bench_function("decode_100k", |b| {
        b.iter(|| decode_symbols(black_box(&bits), Some(&tree), Some(samples.len())).unwrap());
    });

    group.finish();
}

fn bench_encode_by_alphabet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Huffman Encode by Alphabet Size");

    for alphabet_size in [2u32, 8, 32, 128, 256] {
        let samples = skewed_samples(alphabet_size, 10_000);
        let codebook = HuffmanTree::from_frequencies(&FrequencyTable::tabulate(&samples))
            .unwrap()
            .codebook();

        group.bench_with_input(
            BenchmarkId::from_parameter(alphabet_size),
            &alphabet_size,
            |b, _| {
                b.iter(|| encode_symbols(black_box(&samples), black_box(&codebook)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tree_building,
    bench_encode_decode,
    bench_encode_by_alphabet_size
);
criterion_main!(benches);
