//! Silence buffers between elements, characters and words.
//!
//! All spaces are concatenations of the unit silence. Farnsworth modes only
//! stretch character and word spacing; the gap inside a character stays at
//! one unit so the code keeps its rhythm.

use super::waveform::repeat;

#[derive(Debug, Clone)]
pub struct SpacingBuffers {
    /// Gap between elements of one character (1 unit).
    pub intra_char: Vec<f64>,
    /// Gap between characters of one word.
    pub inter_char: Vec<f64>,
    /// Gap after a word.
    pub word: Vec<f64>,
}

impl SpacingBuffers {
    pub fn build(unit_silence: &[f64], farnsworth: bool, double_farnsworth: bool) -> Self {
        let mut inter_char = repeat(unit_silence, 3);
        let mut word = [inter_char.as_slice(), inter_char.as_slice(), unit_silence].concat();

        if farnsworth {
            inter_char.extend_from_slice(unit_silence);
            word.extend_from_slice(unit_silence);
            word.extend_from_slice(unit_silence);
        }

        if double_farnsworth {
            inter_char = repeat(&inter_char, 3);
            word = [word.as_slice(), word.as_slice(), inter_char.as_slice()].concat();
        }

        SpacingBuffers {
            intra_char: unit_silence.to_vec(),
            inter_char,
            word,
        }
    }
}
