use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::phonemes::{mark_unknown, PhonemeError, Result, Transcriber};

const RAW_LEXICON: &str = include_str!("../../assets/phonemes/lexicon.txt");

const PRIMARY_STRESS: char = 'ˈ';
const SECONDARY_STRESS: char = 'ˌ';

/// Shared transcriber backed by the bundled CMU-style lexicon.
pub static DEFAULT_LEXICON: Lazy<LexiconTranscriber> = Lazy::new(|| {
    LexiconTranscriber::from_lexicon(RAW_LEXICON)
        .unwrap_or_else(|err| panic!("failed to initialize bundled lexicon: {err}"))
});

/// Dictionary transcriber keyed by lowercase orthographic words.
///
/// Each entry holds the IPA rendering of every listed pronunciation variant,
/// primary variant first.
#[derive(Debug, Clone)]
pub struct LexiconTranscriber {
    entries: HashMap<String, Vec<String>>,
}

impl LexiconTranscriber {
    /// Creates a transcriber from raw CMU-style lexicon data.
    pub fn from_lexicon(data: &str) -> Result<Self> {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();

        for (idx, line) in data.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let raw_word = parts.next().ok_or_else(|| {
                PhonemeError::new(format!("lexicon line {idx} missing word column: {trimmed}"))
            })?;

            let phones: Vec<&str> = parts.collect();
            if phones.is_empty() {
                return Err(PhonemeError::new(format!(
                    "lexicon line {idx} missing phoneme sequence for {raw_word}"
                )));
            }

            let ipa = arpabet_to_ipa(&phones)
                .map_err(|err| PhonemeError::new(format!("lexicon line {idx}: {err}")))?;

            entries
                .entry(trim_variant(raw_word).to_lowercase())
                .or_default()
                .push(ipa);
        }

        if entries.is_empty() {
            return Err(PhonemeError::new("pronunciation lexicon contained no entries"));
        }

        debug!(entries = entries.len(), "parsed pronunciation lexicon");
        Ok(Self { entries })
    }

    /// Reads and parses a lexicon file such as the full CMU dictionary.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|err| {
            PhonemeError::new(format!("failed to read lexicon {}: {err}", path.display()))
        })?;
        let lexicon = Self::from_lexicon(&data)?;
        info!(
            path = %path.display(),
            entries = lexicon.len(),
            "loaded pronunciation lexicon"
        );
        Ok(lexicon)
    }

    /// Returns a handle to the globally shared bundled lexicon.
    pub fn shared() -> &'static Self {
        &DEFAULT_LEXICON
    }

    /// Looks up every IPA variant for a word.
    pub fn variants(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(&word.to_lowercase())
            .map(|variants| variants.as_slice())
    }

    /// Looks up the primary IPA rendering for a word.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.variants(word)
            .and_then(|variants| variants.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn transcribe_token(&self, token: &str, out: &mut String) {
        let (lead, core, trail) = split_token(token);
        out.push_str(lead);
        if !core.is_empty() {
            match self.lookup(core) {
                Some(ipa) => out.push_str(ipa),
                None => out.push_str(&mark_unknown(core)),
            }
        }
        out.push_str(trail);
    }
}

impl Transcriber for LexiconTranscriber {
    fn transcribe(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut token_start = None;
        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = token_start.take() {
                    self.transcribe_token(&text[start..idx], &mut out);
                }
                out.push(ch);
            } else if token_start.is_none() {
                token_start = Some(idx);
            }
        }
        if let Some(start) = token_start {
            self.transcribe_token(&text[start..], &mut out);
        }
        out
    }
}

/// Converts ARPAbet phones (with optional stress digits) to an IPA string.
pub fn arpabet_to_ipa(phones: &[&str]) -> std::result::Result<String, String> {
    let mut ipa = String::new();
    for phone in phones {
        let (base, stress) = split_stress(phone);
        let symbol = match (base, stress) {
            ("AH", Some('1' | '2')) => "ʌ",
            ("AH", _) => "ə",
            ("ER", Some('1' | '2')) => "ɝ",
            ("ER", _) => "ɚ",
            _ => arpabet_symbol(base).ok_or_else(|| format!("unknown ARPAbet phone {phone}"))?,
        };
        match stress {
            Some('1') => ipa.push(PRIMARY_STRESS),
            Some('2') => ipa.push(SECONDARY_STRESS),
            _ => {}
        }
        ipa.push_str(symbol);
    }
    Ok(ipa)
}

fn split_stress(phone: &str) -> (&str, Option<char>) {
    match phone.char_indices().last() {
        Some((idx, ch)) if ch.is_ascii_digit() => (&phone[..idx], Some(ch)),
        _ => (phone, None),
    }
}

fn arpabet_symbol(base: &str) -> Option<&'static str> {
    let symbol = match base {
        "AA" => "ɑ",
        "AE" => "æ",
        "AO" => "ɔ",
        "AW" => "aʊ",
        "AY" => "aɪ",
        "B" => "b",
        "CH" => "tʃ",
        "D" => "d",
        "DH" => "ð",
        "EH" => "ɛ",
        "EY" => "eɪ",
        "F" => "f",
        "G" => "g",
        "HH" => "h",
        "IH" => "ɪ",
        "IY" => "i",
        "JH" => "dʒ",
        "K" => "k",
        "L" => "l",
        "M" => "m",
        "N" => "n",
        "NG" => "ŋ",
        "OW" => "oʊ",
        "OY" => "ɔɪ",
        "P" => "p",
        "R" => "ɹ",
        "S" => "s",
        "SH" => "ʃ",
        "T" => "t",
        "TH" => "θ",
        "UH" => "ʊ",
        "UW" => "u",
        "V" => "v",
        "W" => "w",
        "Y" => "j",
        "Z" => "z",
        "ZH" => "ʒ",
        _ => return None,
    };
    Some(symbol)
}

/// Splits a token into leading punctuation, the word itself, and trailing
/// punctuation.
fn split_token(token: &str) -> (&str, &str, &str) {
    let is_word_char = |ch: char| ch.is_alphabetic() || ch == '\'';
    let start = token.find(is_word_char).unwrap_or(token.len());
    let end = token
        .rfind(is_word_char)
        .map(|idx| idx + token[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(start);
    (&token[..start], &token[start..end], &token[end..])
}

fn trim_variant(raw_word: &str) -> &str {
    raw_word
        .split_once('(')
        .map(|(base, _)| base)
        .unwrap_or(raw_word)
}
