//! Phoneme-to-viseme lookup tables.
//!
//! Tables are scanned in declared order and the first matching pattern wins,
//! so entry order is part of the mapping.

use crate::types::VisemeCode;

/// One pattern of IPA symbols and the mouth shapes it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisemeRule {
    pub pattern: &'static str,
    pub visemes: &'static [VisemeCode],
}

const fn rule(pattern: &'static str, visemes: &'static [VisemeCode]) -> VisemeRule {
    VisemeRule { pattern, visemes }
}

/// Ordered rules whose patterns are all `width` symbols long.
#[derive(Debug, Clone, Copy)]
pub struct VisemeTable {
    pub width: usize,
    pub rules: &'static [VisemeRule],
}

impl VisemeTable {
    /// First rule whose pattern equals `head`.
    pub fn find(&self, head: &str) -> Option<&'static VisemeRule> {
        self.rules.iter().find(|rule| rule.pattern == head)
    }
}

pub static TRIGRAPHS: VisemeTable = VisemeTable {
    width: 3,
    rules: &[rule("aɪɹ", &[12, 16, 2]), rule("aʊɹ", &[12, 14, 2])],
};

pub static DIGRAPHS: VisemeTable = VisemeTable {
    width: 2,
    rules: &[
        rule("eɪ", &[14, 16]),
        rule("oʊ", &[18, 14]),
        rule("aɪ", &[12, 16]),
        rule("aʊ", &[12, 14]),
        rule("ɔɪ", &[13, 16]),
        rule("ju", &[16, 17]),
        rule("ɪɹ", &[16, 2]),
        rule("ɛɹ", &[14, 2]),
        rule("ʊɹ", &[14, 2]),
        rule("ɔɹ", &[13, 2]),
        rule("ɑɹ", &[12, 2]),
        rule("tʃ", &[8, 5]),
        rule("dʒ", &[8, 5]),
    ],
};

pub static SINGLES: VisemeTable = VisemeTable {
    width: 1,
    rules: &[
        rule(".", &[0]),
        rule("?", &[0]),
        rule("!", &[0]),
        rule(",", &[0]),
        rule(";", &[0]),
        rule(";", &[0]),
        rule("i", &[16]),
        rule("ɪ", &[16]),
        rule("ɛ", &[14]),
        rule("æ", &[11]),
        rule("ɑ", &[12]),
        rule("ɔ", &[13]),
        rule("ʊ", &[14]),
        rule("u", &[17]),
        rule("ʌ", &[11]),
        rule("ə", &[11]),
        rule("ɝ", &[15]),
        rule("ɚ", &[11]),
        rule("w", &[17]),
        rule("j", &[16]),
        rule("o", &[18]),
        rule("p", &[10]),
        rule("b", &[10]),
        rule("t", &[8]),
        rule("d", &[8]),
        rule("k", &[9]),
        rule("g", &[9]),
        rule("m", &[10]),
        rule("n", &[8]),
        rule("ŋ", &[9]),
        rule("f", &[7]),
        rule("v", &[7]),
        rule("θ", &[8]),
        rule("ð", &[6]),
        rule("s", &[4]),
        rule("z", &[4]),
        rule("ʃ", &[5]),
        rule("ʒ", &[5]),
        rule("h", &[1]),
        rule("l", &[3]),
        rule("ɹ", &[2]),
    ],
};

/// Tables in the order the segmenter tries them, widest first.
pub static TABLES: [&VisemeTable; 3] = [&TRIGRAPHS, &DIGRAPHS, &SINGLES];
