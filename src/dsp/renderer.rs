//! WAV renderer — renders text to a WAV byte buffer.

use crate::config::MorseConfig;
use crate::error::MorseResult;
use crate::player::{PlayOptions, play_text};
use crate::sink::MemorySink;

use super::engine::MorseEngine;

/// Render running text to one mono timeline, line pauses as silence.
pub fn render_text(
    engine: &MorseEngine,
    text: &str,
    options: &PlayOptions,
) -> MorseResult<Vec<f64>> {
    let mut sink = MemorySink::new(engine.sample_rate());
    play_text(engine, &mut sink, text, options)?;
    Ok(sink.into_samples())
}

/// Render text to a WAV file as bytes (16-bit mono PCM).
pub fn render_wav(text: &str, config: MorseConfig, sample_rate: u32) -> MorseResult<Vec<u8>> {
    let engine = MorseEngine::new(config, sample_rate)?;
    let samples = render_text(&engine, text, &PlayOptions::default())?;
    Ok(encode_wav_mono(&to_pcm_i16(&samples), sample_rate))
}

/// Quantize [-1, 1] samples to i16, clamping out-of-range input.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16)
        .collect()
}

const BYTES_PER_SAMPLE: u32 = 2;
const WAV_HEADER_LEN: usize = 44;

/// Wrap mono 16-bit PCM in a canonical 44-byte RIFF/WAVE header.
fn encode_wav_mono(pcm: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_size = pcm.len() as u32 * BYTES_PER_SAMPLE;

    let mut buf = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + data_size).to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buf.extend_from_slice(&1u16.to_le_bytes()); // mono
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&(sample_rate * BYTES_PER_SAMPLE).to_le_bytes());
    buf.extend_from_slice(&(BYTES_PER_SAMPLE as u16).to_le_bytes());
    buf.extend_from_slice(&16u16.to_le_bytes());

    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    buf.extend(pcm.iter().flat_map(|s| s.to_le_bytes()));
    buf
}
