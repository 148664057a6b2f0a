//! Compress the three channels of an RGB buffer independently

use huff::{merge_interleaved, split_interleaved, EncoderOptions, HuffmanDecoder, HuffmanEncoder};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Per-channel Huffman compression ===\n");

    let test_cases = [
        (64, 64, "gradient", "Small gradient"),
        (256, 256, "gradient", "Large gradient"),
        (64, 64, "solid", "Small solid color"),
        (128, 128, "checkerboard", "Medium checkerboard"),
    ];

    println!(
        "{:<25} {:>12} {:>12} {:>10} {:>10}",
        "Test", "Raw (bytes)", "Comp (bytes)", "Tree", "Ratio"
    );
    println!("{}", "-".repeat(73));

    let encoder = HuffmanEncoder::new(EncoderOptions::new().parallel(true));
    let decoder = HuffmanDecoder::default();

    for (width, height, pattern, label) in test_cases {
        let rgb = generate_test_image(width, height, pattern);
        let channels = split_interleaved(&rgb, 3)?;

        let encoding = encoder.encode_streams(&channels)?;
        let decoded = merge_interleaved(&decoder.decode_streams(&encoding)?)?;
        anyhow::ensure!(decoded == rgb, "{}: channel data mismatch", label);

        let stats = encoding.statistics();
        println!(
            "{:<25} {:>12} {:>12.0} {:>10} {:>9.2}%",
            label, stats.original_size, stats.total_estimated_size, stats.tree_overhead, stats.ratio
        );
    }

    Ok(())
}

fn generate_test_image(width: usize, height: usize, pattern: &str) -> Vec<u8> {
    let mut image = vec![0u8; width * height * 3];

    match pattern {
        "gradient" => {
            for y in 0..height {
                for x in 0..width {
                    let idx = (y * width + x) * 3;
                    image[idx] = (x * 255 / width.max(1)) as u8;
                    image[idx + 1] = (y * 255 / height.max(1)) as u8;
                    image[idx + 2] = 128;
                }
            }
        }
        "solid" => image.fill(128),
        "checkerboard" => {
            for y in 0..height {
                for x in 0..width {
                    let idx = (y * width + x) * 3;
                    let val = if (x / 8 + y / 8) % 2 == 0 { 255 } else { 0 };
                    image[idx..idx + 3].fill(val);
                }
            }
        }
        _ => {}
    }

    image
}
