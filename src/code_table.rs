//! International Morse code table.
//!
//! Each symbol is stored as a bit count plus a right-justified pattern where
//! `0` is a dit and `1` is a dah. The most significant used bit
//! (`len - 1`) is sent first.

use std::collections::HashMap;
use std::sync::LazyLock;

/// One keyed element of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dit,
    Dah,
}

/// A character and its variable-length code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    pub ch: char,
    /// Number of elements, 1..=7.
    pub len: u8,
    /// Right-justified element bits, dah = 1.
    pub bits: u8,
}

impl SymbolEntry {
    const fn new(ch: char, len: u8, bits: u8) -> Self {
        SymbolEntry { ch, len, bits }
    }

    /// Is element `position` (0 = last sent) a dah?
    pub fn is_dah(&self, position: u8) -> bool {
        self.bits & (1 << position) != 0
    }

    /// Elements in transmission order, MSB first.
    pub fn elements(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.len).rev().map(move |pos| {
            if self.is_dah(pos) {
                Symbol::Dah
            } else {
                Symbol::Dit
            }
        })
    }

    /// Dot/dash notation, e.g. `".--."` for `P`.
    pub fn pattern(&self) -> String {
        self.elements()
            .map(|s| match s {
                Symbol::Dit => '.',
                Symbol::Dah => '-',
            })
            .collect()
    }

    /// Duration in dit units, including intra-character gaps.
    pub fn units(&self) -> usize {
        let tones: usize = self
            .elements()
            .map(|s| match s {
                Symbol::Dit => 1,
                Symbol::Dah => 3,
            })
            .sum();
        tones + self.len as usize - 1
    }
}

// ── Table ───────────────────────────────────────────────────

const SYMBOLS: &[SymbolEntry] = &[
    // Letters
    SymbolEntry::new('A', 2, 0b01),
    SymbolEntry::new('B', 4, 0b1000),
    SymbolEntry::new('C', 4, 0b1010),
    SymbolEntry::new('D', 3, 0b100),
    SymbolEntry::new('E', 1, 0b0),
    SymbolEntry::new('F', 4, 0b0010),
    SymbolEntry::new('G', 3, 0b110),
    SymbolEntry::new('H', 4, 0b0000),
    SymbolEntry::new('I', 2, 0b00),
    SymbolEntry::new('J', 4, 0b0111),
    SymbolEntry::new('K', 3, 0b101),
    SymbolEntry::new('L', 4, 0b0100),
    SymbolEntry::new('M', 2, 0b11),
    SymbolEntry::new('N', 2, 0b10),
    SymbolEntry::new('O', 3, 0b111),
    SymbolEntry::new('P', 4, 0b0110),
    SymbolEntry::new('Q', 4, 0b1101),
    SymbolEntry::new('R', 3, 0b010),
    SymbolEntry::new('S', 3, 0b000),
    SymbolEntry::new('T', 1, 0b1),
    SymbolEntry::new('U', 3, 0b001),
    SymbolEntry::new('V', 4, 0b0001),
    SymbolEntry::new('W', 3, 0b011),
    SymbolEntry::new('X', 4, 0b1001),
    SymbolEntry::new('Y', 4, 0b1011),
    SymbolEntry::new('Z', 4, 0b1100),
    // Digits
    SymbolEntry::new('0', 5, 0b11111),
    SymbolEntry::new('1', 5, 0b01111),
    SymbolEntry::new('2', 5, 0b00111),
    SymbolEntry::new('3', 5, 0b00011),
    SymbolEntry::new('4', 5, 0b00001),
    SymbolEntry::new('5', 5, 0b00000),
    SymbolEntry::new('6', 5, 0b10000),
    SymbolEntry::new('7', 5, 0b11000),
    SymbolEntry::new('8', 5, 0b11100),
    SymbolEntry::new('9', 5, 0b11110),
    // Punctuation
    SymbolEntry::new('!', 6, 0b101011), // KW digraph
    SymbolEntry::new('"', 6, 0b010010),
    SymbolEntry::new('$', 7, 0b0001001), // SX digraph
    SymbolEntry::new('&', 5, 0b01000), // AS digraph
    SymbolEntry::new('\'', 6, 0b011110),
    SymbolEntry::new('(', 5, 0b10110),
    SymbolEntry::new(')', 6, 0b101101),
    SymbolEntry::new('+', 5, 0b01010),
    SymbolEntry::new(',', 6, 0b110011),
    SymbolEntry::new('-', 6, 0b100001),
    SymbolEntry::new('.', 6, 0b010101),
    SymbolEntry::new('/', 5, 0b10010),
    SymbolEntry::new(':', 6, 0b111000),
    SymbolEntry::new(';', 6, 0b101010),
    SymbolEntry::new('=', 5, 0b10001),
    SymbolEntry::new('?', 6, 0b001100),
    SymbolEntry::new('@', 6, 0b011010),
    SymbolEntry::new('_', 6, 0b001101), // not in ITU-R M.1677
    // Typographic aliases seen in feed text
    SymbolEntry::new('\u{201C}', 6, 0b010010), // “
    SymbolEntry::new('\u{201D}', 6, 0b010010), // ”
    SymbolEntry::new('\u{2018}', 6, 0b011110), // ‘
    SymbolEntry::new('\u{2019}', 6, 0b011110), // ’
    SymbolEntry::new('\u{2014}', 6, 0b100001), // em dash sent as '-'
];

static TABLE: LazyLock<HashMap<char, SymbolEntry>> =
    LazyLock::new(|| SYMBOLS.iter().map(|e| (e.ch, *e)).collect());

/// Look up an already upper-cased character.
pub fn lookup(ch: char) -> Option<SymbolEntry> {
    TABLE.get(&ch).copied()
}

/// All table entries in definition order.
pub fn entries() -> &'static [SymbolEntry] {
    SYMBOLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paris_patterns() {
        let got: Vec<String> = "PARIS"
            .chars()
            .map(|c| lookup(c).unwrap().pattern())
            .collect();
        assert_eq!(got, vec![".--.", ".-", ".-.", "..", "..."]);
    }

    #[test]
    fn paris_is_fifty_units() {
        // 5 letters, 4 inter-character gaps of 3, one word gap of 7
        let letters: usize = "PARIS".chars().map(|c| lookup(c).unwrap().units()).sum();
        assert_eq!(letters + 4 * 3 + 7, 50);
    }

    #[test]
    fn lengths_in_range() {
        for e in entries() {
            assert!((1..=7).contains(&e.len), "{:?} has bad length", e.ch);
            assert!(
                (e.bits as u16) < (1u16 << e.len),
                "{:?} pattern has bits above its length",
                e.ch
            );
        }
    }

    #[test]
    fn no_lowercase_keys() {
        assert!(lookup('a').is_none());
        assert!(entries().iter().all(|e| !e.ch.is_lowercase()));
    }

    #[test]
    fn unique_keys() {
        assert_eq!(TABLE.len(), entries().len());
    }

    #[test]
    fn digits_and_punctuation() {
        assert_eq!(lookup('0').unwrap().pattern(), "-----");
        assert_eq!(lookup('5').unwrap().pattern(), ".....");
        assert_eq!(lookup('?').unwrap().pattern(), "..--..");
        assert_eq!(lookup('$').unwrap().pattern(), "...-..-");
        assert_eq!(lookup('/').unwrap().pattern(), "-..-.");
    }

    #[test]
    fn aliases_match_ascii() {
        assert_eq!(lookup('\u{2014}').unwrap().bits, lookup('-').unwrap().bits);
        assert_eq!(lookup('\u{2019}').unwrap().bits, lookup('\'').unwrap().bits);
        assert_eq!(lookup('\u{201C}').unwrap().bits, lookup('"').unwrap().bits);
    }

    #[test]
    fn unmapped_characters() {
        for c in ['#', '%', '*', '<', '~', ' '] {
            assert!(lookup(c).is_none(), "{c:?} should be unmapped");
        }
    }
}
