//! Plays running text through a sink, one word per buffer.
//!
//! Short buffers keep latency low: each word is encoded, played and waited
//! on before the next is built. A pause follows every line.

use std::time::Duration;

use crate::dsp::engine::MorseEngine;
use crate::error::MorseResult;
use crate::sink::AudioSink;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOptions {
    /// Idle time after each line of input.
    pub line_pause: Duration,
}

impl Default for PlayOptions {
    fn default() -> Self {
        PlayOptions {
            line_pause: Duration::from_millis(500),
        }
    }
}

/// What was sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackReport {
    pub words: usize,
    /// Samples handed to the sink, excluding pauses.
    pub samples: usize,
    /// Skipped characters, in input order.
    pub unsupported: Vec<char>,
    /// Sent text, one line per input line, skipped characters marked.
    pub transcript: String,
}

pub fn play_text<S: AudioSink + ?Sized>(
    engine: &MorseEngine,
    sink: &mut S,
    text: &str,
    options: &PlayOptions,
) -> MorseResult<PlaybackReport> {
    let mut report = PlaybackReport::default();
    let mut buffer = Vec::new();

    for line in text.lines() {
        for (i, word) in line.split_whitespace().enumerate() {
            let plan = engine.encode_word_into(word, &mut buffer);
            sink.play(&buffer)?;
            sink.wait_until_done()?;

            tracing::info!(word = %plan.display, samples = buffer.len(), "sent");
            if i > 0 {
                report.transcript.push(' ');
            }
            report.transcript.push_str(&plan.display);
            report.words += 1;
            report.samples += buffer.len();
            report.unsupported.extend(plan.unsupported);
        }
        report.transcript.push('\n');
        sink.pause(options.line_pause)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MorseConfig;
    use crate::error::MorseError;
    use crate::sink::{MemorySink, NullSink};
    use pretty_assertions::assert_eq;

    fn engine() -> MorseEngine {
        MorseEngine::new(MorseConfig::default(), 8000).unwrap()
    }

    #[test]
    fn one_buffer_per_word() {
        let e = engine();
        let mut sink = MemorySink::new(8000);
        let opts = PlayOptions {
            line_pause: Duration::ZERO,
        };
        let report = play_text(&e, &mut sink, "CQ CQ DE K5DRU\nUR RST 599 599 BK", &opts).unwrap();
        assert_eq!(report.words, 9);
        assert_eq!(sink.buffers, 9);
        assert_eq!(report.transcript, "CQ CQ DE K5DRU\nUR RST 599 599 BK\n");
        assert_eq!(report.samples, sink.samples.len());
    }

    #[test]
    fn words_match_engine_output() {
        let e = engine();
        let mut sink = MemorySink::new(8000);
        let opts = PlayOptions {
            line_pause: Duration::ZERO,
        };
        play_text(&e, &mut sink, "  de   k5dru ", &opts).unwrap();
        let expected = [e.encode_word("DE").samples, e.encode_word("K5DRU").samples].concat();
        assert_eq!(sink.samples, expected);
    }

    #[test]
    fn line_pause_appended_per_line() {
        let e = engine();
        let mut sink = MemorySink::new(8000);
        let opts = PlayOptions {
            line_pause: Duration::from_millis(250),
        };
        let report = play_text(&e, &mut sink, "E\n\nT", &opts).unwrap();
        assert_eq!(sink.samples.len(), report.samples + 3 * 2000);
        assert_eq!(report.transcript, "E\n\nT\n");
    }

    #[test]
    fn unsupported_collected() {
        let e = engine();
        let mut sink = NullSink::new(8000);
        let report = play_text(&e, &mut sink, "50% off <now>", &PlayOptions::default()).unwrap();
        assert_eq!(report.unsupported, vec!['%', '<', '>']);
        assert_eq!(report.transcript, "50!%! OFF !<!NOW!>!\n");
        assert_eq!(sink.played, report.samples);
    }

    /// Accepts `limit` buffers, then reports the device as gone.
    struct FlakySink {
        limit: usize,
        played: usize,
    }

    impl AudioSink for FlakySink {
        fn default_sample_rate(&self) -> u32 {
            8000
        }

        fn play(&mut self, _samples: &[f64]) -> MorseResult<()> {
            if self.played == self.limit {
                return Err(MorseError::Sink {
                    message: "device unplugged".to_string(),
                });
            }
            self.played += 1;
            Ok(())
        }

        fn wait_until_done(&mut self) -> MorseResult<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_error_stops_playback() {
        let mut sink = FlakySink { limit: 2, played: 0 };
        let e = MorseEngine::from_sink(MorseConfig::default(), &sink).unwrap();
        let err = play_text(&e, &mut sink, "CQ CQ DE K5DRU", &PlayOptions::default()).unwrap_err();
        assert!(matches!(err, MorseError::Sink { .. }));
        assert_eq!(err.to_string(), "audio sink error: device unplugged");
        assert_eq!(sink.played, 2);
    }
}
