//! Linear fade at tone edges to keep keying clicks out of the spectrum.

use crate::error::{MorseError, MorseResult};

/// Ramp length in samples for `cycles` carrier cycles.
pub fn ramp_samples(full_cycle_samples: f64, cycles: f64) -> usize {
    (full_cycle_samples * cycles) as usize
}

/// Reject a ramp that would overlap itself on a buffer of `tone_len` samples.
pub fn check_ramp(cycles: f64, ramp: usize, tone_len: usize) -> MorseResult<()> {
    if ramp > tone_len / 2 {
        return Err(MorseError::InvalidDeclick {
            cycles,
            ramp_samples: ramp,
            dit_samples: tone_len,
        });
    }
    Ok(())
}

/// Scale sample `i` and sample `len-1-i` by `i / ramp` for `i` in `0..ramp`.
///
/// Applied to a whole tone; the caller must have checked `ramp <= len / 2`.
pub fn apply(buf: &mut [f64], ramp: usize) {
    let len = buf.len();
    for i in 0..ramp.min(len / 2) {
        let gain = i as f64 / ramp as f64;
        buf[i] *= gain;
        buf[len - 1 - i] *= gain;
    }
}
