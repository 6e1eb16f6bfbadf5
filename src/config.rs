//! Engine configuration.
//!
//! Field names follow camelCase in JSON so the same document can be handed
//! to the WASM bindings from JavaScript.

use serde::{Deserialize, Serialize};

use crate::error::{MorseError, MorseResult};

/// Synthesis parameters. Immutable once an engine has been built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MorseConfig {
    /// Speed in words per minute (PARIS convention).
    pub wpm: u32,
    /// Linear output gain [0, 1].
    pub amplitude: f64,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Add one unit to character spacing and two to word spacing.
    pub farnsworth: bool,
    /// Triple the character spacing and rebuild the word spacing from it.
    pub double_farnsworth: bool,
    /// Fade length at each tone edge, in carrier cycles.
    pub declick_cycles: f64,
}

impl Default for MorseConfig {
    fn default() -> Self {
        MorseConfig {
            wpm: 35,
            amplitude: 0.2,
            frequency: 500.0,
            farnsworth: false,
            double_farnsworth: false,
            declick_cycles: 1.5,
        }
    }
}

impl MorseConfig {
    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json(json: &str) -> MorseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the parameters that can be judged without timing.
    ///
    /// Ramp-versus-dit length is checked later, once the dit is quantized.
    pub fn validate(&self, sample_rate: u32) -> MorseResult<()> {
        if sample_rate == 0 {
            return Err(MorseError::InvalidSampleRate { rate: sample_rate });
        }
        if self.wpm == 0 {
            return Err(MorseError::InvalidSpeed { wpm: self.wpm });
        }
        let nyquist = sample_rate as f64 / 2.0;
        if !self.frequency.is_finite() || self.frequency <= 0.0 || self.frequency >= nyquist {
            return Err(MorseError::InvalidFrequency {
                frequency: self.frequency,
                sample_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(MorseError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        if !self.declick_cycles.is_finite() || self.declick_cycles < 0.0 {
            return Err(MorseError::InvalidDeclick {
                cycles: self.declick_cycles,
                ramp_samples: 0,
                dit_samples: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        MorseConfig::default().validate(48000).unwrap();
    }

    #[test]
    fn json_partial_uses_defaults() {
        let cfg = MorseConfig::from_json(r#"{ "wpm": 25, "farnsworth": true }"#).unwrap();
        assert_eq!(
            cfg,
            MorseConfig {
                wpm: 25,
                farnsworth: true,
                ..MorseConfig::default()
            }
        );
    }

    #[test]
    fn json_camel_case_fields() {
        let cfg = MorseConfig::from_json(
            r#"{ "doubleFarnsworth": true, "declickCycles": 2.0, "amplitude": 0.15 }"#,
        )
        .unwrap();
        assert!(cfg.double_farnsworth);
        assert_eq!(cfg.declick_cycles, 2.0);
        assert_eq!(cfg.amplitude, 0.15);
    }

    #[test]
    fn json_garbage_is_error() {
        assert!(matches!(
            MorseConfig::from_json("not json"),
            Err(MorseError::ConfigParse(_))
        ));
    }

    #[test]
    fn rejects_zero_sample_rate() {
        assert!(matches!(
            MorseConfig::default().validate(0),
            Err(MorseError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn rejects_zero_speed() {
        let cfg = MorseConfig {
            wpm: 0,
            ..MorseConfig::default()
        };
        assert!(matches!(
            cfg.validate(48000),
            Err(MorseError::InvalidSpeed { .. })
        ));
    }

    #[test]
    fn rejects_bad_frequency() {
        for frequency in [0.0, -500.0, f64::NAN, 24000.0, 30000.0] {
            let cfg = MorseConfig {
                frequency,
                ..MorseConfig::default()
            };
            assert!(
                matches!(cfg.validate(48000), Err(MorseError::InvalidFrequency { .. })),
                "{frequency} Hz should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_amplitude() {
        for amplitude in [-0.1, 1.5, f64::NAN] {
            let cfg = MorseConfig {
                amplitude,
                ..MorseConfig::default()
            };
            assert!(matches!(
                cfg.validate(48000),
                Err(MorseError::InvalidAmplitude { .. })
            ));
        }
    }

    #[test]
    fn rejects_negative_declick() {
        let cfg = MorseConfig {
            declick_cycles: -1.0,
            ..MorseConfig::default()
        };
        assert!(matches!(
            cfg.validate(48000),
            Err(MorseError::InvalidDeclick { .. })
        ));
    }
}
