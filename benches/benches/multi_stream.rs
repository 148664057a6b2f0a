//! Sequential vs rayon multi-stream encoding
//!
//! Run with: cargo bench --bench multi_stream

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huff_decoder::{DecoderOptions, HuffmanDecoder};
use huff_encoder::{EncoderOptions, HuffmanEncoder};

fn rgb_channels(width: usize, height: usize) -> Vec<Vec<u8>> {
    let mut channels = vec![Vec::with_capacity(width * height); 3];
    for y in 0..height {
        for x in 0..width {
            channels[0].push((x * 255 / width) as u8);
            channels[1].push((y * 255 / height) as u8);
            channels[2].push(((x ^ y) & 0xF0) as u8);
        }
    }
    channels
}

fn bench_multi_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("Multi-Stream 512x512 RGB");
    let channels = rgb_channels(512, 512);

    for parallel in [false, true] {
        let label = if parallel { "rayon" } else { "sequential" };
        let encoder = HuffmanEncoder::new(EncoderOptions::new().parallel(parallel));
        let decoder = HuffmanDecoder::new(DecoderOptions::new().parallel(parallel));
        let encoding = encoder.encode_streams(&channels).unwrap();

        group.bench_function(format!("encode_{}", label), |b| {
            b.iter(|| encoder.encode_streams(black_box(&channels)).unwrap());
        });
        group.bench_function(format!("decode_{}", label), |b| {
            b.iter(|| decoder.decode_streams(black_box(&encoding)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multi_stream);
criterion_main!(benches);
