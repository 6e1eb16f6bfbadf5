//! Text to element sequence.
//!
//! A word is planned as an ordered list of [`Element`]s first, then rendered
//! by the engine from its precomputed buffers. Planning first gives the exact
//! output length up front.

use crate::code_table::{self, Symbol, SymbolEntry};

/// One segment of keyed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Dit,
    Dah,
    /// Gap between elements of a character.
    IntraGap,
    /// Gap between characters.
    CharGap,
    /// Gap after a word, or for a literal space.
    WordGap,
}

impl Element {
    pub fn is_tone(&self) -> bool {
        matches!(self, Element::Dit | Element::Dah)
    }
}

/// Planned output for one word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordPlan {
    pub elements: Vec<Element>,
    /// Characters with no code, in input order.
    pub unsupported: Vec<char>,
    /// Upper-cased input with unsupported characters wrapped as `!c!`.
    pub display: String,
}

impl WordPlan {
    pub fn tone_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_tone()).count()
    }
}

/// Marker shown in place of a character that cannot be sent.
pub fn unsupported_marker(ch: char) -> String {
    format!("!{ch}!")
}

/// Append the elements of one character, MSB first, with one intra-character
/// gap between consecutive elements and none after the last.
pub fn push_symbol(elements: &mut Vec<Element>, entry: &SymbolEntry) {
    for (i, symbol) in entry.elements().enumerate() {
        if i > 0 {
            elements.push(Element::IntraGap);
        }
        elements.push(match symbol {
            Symbol::Dit => Element::Dit,
            Symbol::Dah => Element::Dah,
        });
    }
}

/// Plan a word.
///
/// Input is case-folded to upper case. A literal space becomes a word gap.
/// Consecutive sent characters are separated by a character gap; skipped
/// characters contribute nothing, so the gap lands between the sent
/// neighbours. A trailing word gap is always appended.
pub fn plan_word(text: &str) -> WordPlan {
    let mut plan = WordPlan::default();
    let mut after_char = false;

    for ch in text.chars().flat_map(char::to_uppercase) {
        if ch == ' ' {
            plan.elements.push(Element::WordGap);
            plan.display.push(' ');
            after_char = false;
            continue;
        }

        let Some(entry) = code_table::lookup(ch) else {
            tracing::warn!(character = %ch, "unsupported character skipped");
            plan.unsupported.push(ch);
            plan.display.push_str(&unsupported_marker(ch));
            continue;
        };

        if after_char {
            plan.elements.push(Element::CharGap);
        }
        push_symbol(&mut plan.elements, &entry);
        plan.display.push(ch);
        after_char = true;
    }

    plan.elements.push(Element::WordGap);
    plan
}
