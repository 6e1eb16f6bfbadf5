//! Dit timing quantized to whole carrier cycles.
//!
//! The nominal dit is `60 / (50 * wpm)` seconds (PARIS = 50 units). That
//! length is rounded *up* to a whole number of cycles of the tone so every
//! burst starts and ends on a zero crossing. The playback speed is then
//! derived back from the sample count, so it may run slightly slower than
//! requested, never by more than one carrier cycle per dit.

use serde::Serialize;

use crate::error::{MorseError, MorseResult};

/// Dit units in the standard word "PARIS ".
pub const UNITS_PER_WORD: f64 = 50.0;

/// Longest dit accepted, in seconds (0.6 wpm).
pub const MAX_DIT_SECONDS: f64 = 2.0;

/// Quantized timing for one engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub sample_rate: u32,
    /// Samples per carrier cycle (generally fractional).
    pub full_cycle_samples: f64,
    /// Whole carrier cycles in one dit.
    pub cycles_per_dit: u32,
    /// Length of one unit in samples.
    pub samples_per_dit: usize,
    /// Duration of one unit, recomputed from `samples_per_dit`.
    pub tdit_seconds: f64,
}

impl Timing {
    pub fn compute(sample_rate: u32, frequency: f64, wpm: u32) -> MorseResult<Self> {
        if sample_rate == 0 {
            return Err(MorseError::InvalidSampleRate { rate: sample_rate });
        }
        if wpm == 0 {
            return Err(MorseError::InvalidSpeed { wpm });
        }
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(MorseError::InvalidFrequency {
                frequency,
                sample_rate,
            });
        }

        let sr = sample_rate as f64;
        let raw_dit_samples = sr * 60.0 / (UNITS_PER_WORD * wpm as f64);
        let full_cycle_samples = sr / frequency;
        if full_cycle_samples < 2.0 {
            return Err(MorseError::InvalidFrequency {
                frequency,
                sample_rate,
            });
        }

        let cycles = (raw_dit_samples / full_cycle_samples).ceil();
        let dit_samples = cycles * full_cycle_samples;
        // Checked in f64: a very low tone makes the product overflow usize.
        if !dit_samples.is_finite() || dit_samples < 1.0 || dit_samples > sr * MAX_DIT_SECONDS {
            return Err(MorseError::DegenerateTiming {
                wpm,
                frequency,
                sample_rate,
                samples_per_dit: dit_samples as usize,
            });
        }
        let samples_per_dit = dit_samples as usize;

        Ok(Timing {
            sample_rate,
            full_cycle_samples,
            cycles_per_dit: cycles as u32,
            samples_per_dit,
            tdit_seconds: samples_per_dit as f64 / sr,
        })
    }

    /// Speed actually produced after quantization.
    pub fn effective_wpm(&self) -> f64 {
        60.0 / (UNITS_PER_WORD * self.tdit_seconds)
    }

    /// Samples in `units` dit units.
    pub fn units(&self, units: usize) -> usize {
        self.samples_per_dit * units
    }
}
