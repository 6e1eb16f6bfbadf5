//! DSP Engine — Morse waveform synthesis.
//!
//! Timing is quantized first, then every tone and space is synthesized once
//! and reused. The same engine feeds live playback through an
//! [`AudioSink`](crate::sink::AudioSink) and offline WAV export.

pub mod declick;
pub mod encoder;
pub mod engine;
pub mod renderer;
pub mod spacing;
pub mod timing;
pub mod waveform;
