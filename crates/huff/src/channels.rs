//! Conversion between interleaved sample buffers and per-channel streams

use huff_core::{HuffError, HuffResult, Symbol};

/// Split an interleaved buffer (e.g. `RGBRGB...`) into one stream per channel
pub fn split_interleaved<S: Symbol>(samples: &[S], channels: usize) -> HuffResult<Vec<Vec<S>>> {
    if channels == 0 {
        return Err(HuffError::InvalidParameter(
            "Channel count must be at least 1".to_string(),
        ));
    }
    if samples.len() % channels != 0 {
        return Err(HuffError::InvalidParameter(format!(
            "{} samples do not divide into {} channels",
            samples.len(),
            channels
        )));
    }

    let per_channel = samples.len() / channels;
    let mut streams = vec![Vec::with_capacity(per_channel); channels];
    for pixel in samples.chunks_exact(channels) {
        for (stream, &sample) in streams.iter_mut().zip(pixel) {
            stream.push(sample);
        }
    }
    Ok(streams)
}

/// Interleave per-channel streams back into one buffer
pub fn merge_interleaved<S: Symbol>(streams: &[Vec<S>]) -> HuffResult<Vec<S>> {
    let Some(first) = streams.first() else {
        return Ok(Vec::new());
    };
    for (index, stream) in streams.iter().enumerate().skip(1) {
        if stream.len() != first.len() {
            return Err(HuffError::StreamLengthMismatch {
                stream: index,
                expected: first.len(),
                actual: stream.len(),
            });
        }
    }

    let mut samples = Vec::with_capacity(first.len() * streams.len());
    for i in 0..first.len() {
        samples.extend(streams.iter().map(|stream| stream[i]));
    }
    Ok(samples)
}
