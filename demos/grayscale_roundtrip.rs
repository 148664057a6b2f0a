//! Example demonstrating a grayscale round trip with a statistics report
//!
//! ```bash
//! RUST_LOG=debug cargo run -p huff --example grayscale_roundtrip
//! ```

use huff::{HuffmanDecoder, HuffmanEncoder};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Huffman Grayscale Round Trip");
    println!("============================\n");

    let width = 256;
    let height = 256;
    println!("Creating a {}x{} test image...", width, height);

    // Radial gradient, quantized to 32 levels
    let mut samples = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - width as f32 / 2.0;
            let dy = y as f32 - height as f32 / 2.0;
            let r = (dx * dx + dy * dy).sqrt();
            samples.push(((r as usize / 6) * 8).min(255) as u8);
        }
    }

    println!("\n1. Compressing image data with Huffman coding...");
    let encoded = HuffmanEncoder::default().encode(&samples)?;
    let preview: String = encoded.bitstream.to_string().chars().take(70).collect();
    println!("   Example of encoded data (first 70 bits): {}...", preview);
    println!("{}", "-".repeat(40));

    println!("2. Compression statistics");
    println!("{}", encoded.statistics());
    println!("{}", "-".repeat(40));

    println!("3. Decompressing the data...");
    let decoded = HuffmanDecoder::default().decode(&encoded)?;

    if decoded == samples {
        println!("4. Verification successful: decompressed data matches original data.");
    } else {
        anyhow::bail!("verification failed: data mismatch");
    }

    Ok(())
}
