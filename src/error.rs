//! Error types for the Morse synthesis engine.
//!
//! Only configuration problems are errors. Characters missing from the code
//! table are reported through [`crate::dsp::encoder::WordPlan::unsupported`]
//! and never abort encoding.

use thiserror::Error;

/// Result type for engine operations.
pub type MorseResult<T> = Result<T, MorseError>;

#[derive(Debug, Error)]
pub enum MorseError {
    /// Sample rate is zero.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate { rate: u32 },

    /// Tone frequency is non-positive, non-finite, or not below Nyquist.
    #[error("invalid tone frequency {frequency} Hz at sample rate {sample_rate} Hz")]
    InvalidFrequency { frequency: f64, sample_rate: u32 },

    /// Speed is zero.
    #[error("invalid speed: {wpm} wpm")]
    InvalidSpeed { wpm: u32 },

    /// Amplitude outside [0, 1].
    #[error("invalid amplitude {amplitude}, expected 0.0..=1.0")]
    InvalidAmplitude { amplitude: f64 },

    /// Declick cycles negative, or the ramp would exceed half a dit.
    #[error("invalid declick: {cycles} cycles gives a {ramp_samples}-sample ramp, dit is {dit_samples} samples")]
    InvalidDeclick {
        cycles: f64,
        ramp_samples: usize,
        dit_samples: usize,
    },

    /// Quantized dit length came out as zero samples.
    #[error("degenerate timing: {wpm} wpm at {frequency} Hz / {sample_rate} Hz yields {samples_per_dit} samples per dit")]
    DegenerateTiming {
        wpm: u32,
        frequency: f64,
        sample_rate: u32,
        samples_per_dit: usize,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Returned by [`crate::sink::AudioSink`] implementations backed by a
    /// real device when it refuses a buffer. The bundled sinks never fail.
    #[error("audio sink error: {message}")]
    Sink { message: String },
}
