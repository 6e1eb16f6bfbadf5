//! Audio sink seam.
//!
//! The engine only produces buffers. Anything that actually makes sound
//! implements [`AudioSink`]; the crate ships a discarding sink and an
//! in-memory recorder.

use std::time::Duration;

use crate::error::MorseResult;

/// Destination for encoded word buffers.
pub trait AudioSink {
    /// Sample rate the engine should be built for.
    fn default_sample_rate(&self) -> u32;

    /// Start playing a buffer.
    fn play(&mut self, samples: &[f64]) -> MorseResult<()>;

    /// Block until the last buffer has finished.
    fn wait_until_done(&mut self) -> MorseResult<()>;

    /// Idle between lines.
    fn pause(&mut self, duration: Duration) -> MorseResult<()> {
        std::thread::sleep(duration);
        Ok(())
    }
}

/// Discards everything. Pauses return immediately.
#[derive(Debug, Clone)]
pub struct NullSink {
    pub sample_rate: u32,
    /// Total samples handed to `play`.
    pub played: usize,
}

impl NullSink {
    pub fn new(sample_rate: u32) -> Self {
        NullSink {
            sample_rate,
            played: 0,
        }
    }
}

impl AudioSink for NullSink {
    fn default_sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn play(&mut self, samples: &[f64]) -> MorseResult<()> {
        self.played += samples.len();
        Ok(())
    }

    fn wait_until_done(&mut self) -> MorseResult<()> {
        Ok(())
    }

    fn pause(&mut self, _duration: Duration) -> MorseResult<()> {
        Ok(())
    }
}

/// Records every played buffer into one timeline; pauses become silence.
#[derive(Debug, Clone)]
pub struct MemorySink {
    pub sample_rate: u32,
    pub samples: Vec<f64>,
    /// Number of `play` calls.
    pub buffers: usize,
}

impl MemorySink {
    pub fn new(sample_rate: u32) -> Self {
        MemorySink {
            sample_rate,
            samples: Vec::new(),
            buffers: 0,
        }
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl AudioSink for MemorySink {
    fn default_sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn play(&mut self, samples: &[f64]) -> MorseResult<()> {
        self.samples.extend_from_slice(samples);
        self.buffers += 1;
        Ok(())
    }

    fn wait_until_done(&mut self) -> MorseResult<()> {
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> MorseResult<()> {
        let n = (duration.as_secs_f64() * self.sample_rate as f64).round() as usize;
        self.samples.resize(self.samples.len() + n, 0.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new(8000);
        sink.play(&[0.1, 0.2]).unwrap();
        sink.play(&[0.3]).unwrap();
        assert_eq!(sink.samples, vec![0.1, 0.2, 0.3]);
        assert_eq!(sink.buffers, 2);
    }

    #[test]
    fn memory_sink_pause_is_silence() {
        let mut sink = MemorySink::new(8000);
        sink.pause(Duration::from_millis(500)).unwrap();
        assert_eq!(sink.samples.len(), 4000);
        assert!(sink.samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn null_sink_counts() {
        let mut sink = NullSink::new(44100);
        sink.play(&[0.0; 10]).unwrap();
        sink.wait_until_done().unwrap();
        assert_eq!(sink.played, 10);
        assert_eq!(sink.default_sample_rate(), 44100);
    }
}
