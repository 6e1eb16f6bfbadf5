//! Morse Engine — precomputes every buffer once and renders words from them.
//!
//! Construction validates the configuration, quantizes the dit, synthesizes
//! the elemental tones, declicks them as whole units and assembles the
//! spacing buffers. After that the engine is read-only; each call to
//! [`MorseEngine::encode_word`] produces one independent output buffer.

use crate::config::MorseConfig;
use crate::error::MorseResult;
use crate::sink::AudioSink;

use super::declick;
use super::encoder::{plan_word, Element, WordPlan};
use super::spacing::SpacingBuffers;
use super::timing::Timing;
use super::waveform::ElementalBuffers;

/// One encoded word, ready for an audio sink.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedWord {
    pub samples: Vec<f64>,
    /// Characters skipped because they have no code.
    pub unsupported: Vec<char>,
    /// The word as sent, with skipped characters marked `!c!`.
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct MorseEngine {
    config: MorseConfig,
    timing: Timing,
    ramp_samples: usize,
    dit: Vec<f64>,
    dah: Vec<f64>,
    unit_silence: Vec<f64>,
    spacing: SpacingBuffers,
}

impl MorseEngine {
    pub fn new(config: MorseConfig, sample_rate: u32) -> MorseResult<Self> {
        config.validate(sample_rate)?;
        let timing = Timing::compute(sample_rate, config.frequency, config.wpm)?;

        let ramp_samples = declick::ramp_samples(timing.full_cycle_samples, config.declick_cycles);
        declick::check_ramp(config.declick_cycles, ramp_samples, timing.samples_per_dit)?;

        let ElementalBuffers {
            mut dit,
            mut dah,
            unit_silence,
        } = ElementalBuffers::build(&timing, config.frequency, config.amplitude);

        // Whole-unit ramps: a dah fades only at its outer edges.
        declick::apply(&mut dit, ramp_samples);
        declick::apply(&mut dah, ramp_samples);

        let spacing =
            SpacingBuffers::build(&unit_silence, config.farnsworth, config.double_farnsworth);

        tracing::debug!(
            wpm = config.wpm,
            effective_wpm = timing.effective_wpm(),
            samples_per_dit = timing.samples_per_dit,
            cycles_per_dit = timing.cycles_per_dit,
            ramp_samples,
            inter_char = spacing.inter_char.len(),
            word = spacing.word.len(),
            "morse engine ready"
        );

        Ok(MorseEngine {
            config,
            timing,
            ramp_samples,
            dit,
            dah,
            unit_silence,
            spacing,
        })
    }

    /// Build an engine at the sink's default sample rate.
    pub fn from_sink<S: AudioSink + ?Sized>(config: MorseConfig, sink: &S) -> MorseResult<Self> {
        Self::new(config, sink.default_sample_rate())
    }

    pub fn config(&self) -> &MorseConfig {
        &self.config
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn sample_rate(&self) -> u32 {
        self.timing.sample_rate
    }

    pub fn ramp_samples(&self) -> usize {
        self.ramp_samples
    }

    pub fn dit(&self) -> &[f64] {
        &self.dit
    }

    pub fn dah(&self) -> &[f64] {
        &self.dah
    }

    pub fn unit_silence(&self) -> &[f64] {
        &self.unit_silence
    }

    pub fn intra_char_space(&self) -> &[f64] {
        &self.spacing.intra_char
    }

    pub fn inter_char_space(&self) -> &[f64] {
        &self.spacing.inter_char
    }

    pub fn word_space(&self) -> &[f64] {
        &self.spacing.word
    }

    /// Precomputed buffer for one element.
    pub fn element(&self, element: Element) -> &[f64] {
        match element {
            Element::Dit => &self.dit,
            Element::Dah => &self.dah,
            Element::IntraGap => &self.spacing.intra_char,
            Element::CharGap => &self.spacing.inter_char,
            Element::WordGap => &self.spacing.word,
        }
    }

    /// Exact sample count of a planned word.
    pub fn plan_len(&self, plan: &WordPlan) -> usize {
        plan.elements.iter().map(|&e| self.element(e).len()).sum()
    }

    /// Encode `text` as one word into a fresh buffer.
    pub fn encode_word(&self, text: &str) -> EncodedWord {
        let mut samples = Vec::new();
        let plan = self.encode_word_into(text, &mut samples);
        EncodedWord {
            samples,
            unsupported: plan.unsupported,
            display: plan.display,
        }
    }

    /// Encode `text` into `out`, replacing its contents. Reusing `out`
    /// across words keeps its allocation.
    pub fn encode_word_into(&self, text: &str, out: &mut Vec<f64>) -> WordPlan {
        let plan = plan_word(text);
        out.clear();
        out.reserve(self.plan_len(&plan));
        for &element in &plan.elements {
            out.extend_from_slice(self.element(element));
        }
        plan
    }
}
