//! # Error Handling Examples
//!
//! Shows which failure each misuse of the encoder/decoder produces.
//!
//! ```bash
//! cargo run -p huff --example error_handling
//! ```

use huff::{
    compress, decode_symbols, encode_symbols, Bitstream, HuffError, HuffmanEncoder, HuffmanTree,
};

fn main() -> anyhow::Result<()> {
    println!("Huffman Error Handling Examples");
    println!("===============================\n");

    // ==================== UNKNOWN SYMBOL ====================
    println!("1. Encoding with a codebook from another sequence...");
    let codebook = compress(b"aab")?.tree.map(|t| t.codebook());
    if let Some(codebook) = codebook {
        match encode_symbols(b"abc", &codebook) {
            Err(HuffError::UnknownSymbol(msg)) => println!("   ✓ Caught UnknownSymbol: {}\n", msg),
            other => println!("   ✗ Unexpected result: {:?}\n", other),
        }
    }

    // ==================== TRUNCATED BITSTREAM ====================
    println!("2. Decoding a truncated bitstream...");
    let encoded = compress(b"the quick brown fox")?;
    let truncated: Bitstream = encoded
        .bitstream
        .iter()
        .take(encoded.bitstream.len() - 1)
        .collect();
    match decode_symbols(&truncated, encoded.tree.as_ref(), None) {
        Err(e @ HuffError::MalformedBitstream(_)) => println!("   ✓ {}\n", e),
        other => println!("   ✗ Unexpected result: {:?}\n", other),
    }

    // ==================== SINGLE-SYMBOL TREE ====================
    println!("3. Decoding a single-symbol tree without a length...");
    let encoded = compress(&[0u8; 1024])?;
    match decode_symbols(&encoded.bitstream, encoded.tree.as_ref(), None) {
        Err(HuffError::DegenerateLengthMissing) => {
            println!("   ✓ Caught DegenerateLengthMissing");
            println!("   - {} samples were encoded in {} bits\n", encoded.symbol_count, encoded.bitstream.len());
        }
        other => println!("   ✗ Unexpected result: {:?}\n", other),
    }

    // ==================== CORRUPT TREE ====================
    println!("4. Reading a corrupt serialized tree...");
    match HuffmanTree::<u8>::from_bytes(&[0x00, 0x00]) {
        Err(e @ HuffError::InvalidTree(_)) => println!("   ✓ {}\n", e),
        other => println!("   ✗ Unexpected result: {:?}\n", other),
    }

    // ==================== UNEQUAL CHANNELS ====================
    println!("5. Encoding channels of different lengths...");
    match HuffmanEncoder::default().encode_streams(&[vec![1u8; 10], vec![2u8; 9]]) {
        Err(e @ HuffError::StreamLengthMismatch { .. }) => println!("   ✓ {}\n", e),
        other => println!("   ✗ Unexpected result: {:?}\n", other),
    }

    Ok(())
}
