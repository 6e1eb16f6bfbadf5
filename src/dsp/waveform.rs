//! Elemental sample buffers: the dit tone, the dah tone, and one unit of
//! silence.

use std::f64::consts::PI;

use super::timing::Timing;

/// The three buffers every other buffer is assembled from.
#[derive(Debug, Clone)]
pub struct ElementalBuffers {
    pub dit: Vec<f64>,
    /// Three dits back to back, one continuous tone.
    pub dah: Vec<f64>,
    pub unit_silence: Vec<f64>,
}

impl ElementalBuffers {
    /// Synthesize undeclicked buffers for `timing`.
    pub fn build(timing: &Timing, frequency: f64, amplitude: f64) -> Self {
        let dit = tone_burst(
            timing.samples_per_dit,
            frequency,
            amplitude,
            timing.sample_rate,
        );
        let dah = repeat(&dit, 3);
        ElementalBuffers {
            dit,
            dah,
            unit_silence: silence(timing.samples_per_dit),
        }
    }
}

/// `amplitude * sin(2π·f·i/sr)` for exactly `len` samples.
///
/// Sample times are computed from the index rather than accumulated, so the
/// length never drifts.
pub fn tone_burst(len: usize, frequency: f64, amplitude: f64, sample_rate: u32) -> Vec<f64> {
    let w = 2.0 * PI * frequency / sample_rate as f64;
    (0..len).map(|i| amplitude * (w * i as f64).sin()).collect()
}

pub fn silence(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

/// `buf` concatenated `times` times.
pub fn repeat(buf: &[f64], times: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(buf.len() * times);
    for _ in 0..times {
        out.extend_from_slice(buf);
    }
    out
}
