//! Phoneme-to-viseme segmentation.
//!
//! The phonetic string is scanned left to right. At each position the widest
//! table with enough remaining symbols is tried first; a symbol that no table
//! matches is consumed on its own and produces nothing.

pub mod tables;

use serde::Serialize;

use crate::types::VisemeCode;
use tables::TABLES;

/// One scan step: the symbols consumed and the codes they produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisemeSpan<'a> {
    pub symbols: &'a str,
    pub visemes: &'static [VisemeCode],
}

impl VisemeSpan<'_> {
    /// True when the span was dropped because no table matched it.
    pub fn is_dropped(&self) -> bool {
        self.visemes.is_empty()
    }
}

/// Converts a resolved phonetic string into viseme codes.
pub fn segment(phonetic: &str) -> Vec<VisemeCode> {
    segment_spans(phonetic)
        .into_iter()
        .flat_map(|span| span.visemes.iter().copied())
        .collect()
}

/// Runs the scan and returns every step, including dropped symbols.
pub fn segment_spans(phonetic: &str) -> Vec<VisemeSpan<'_>> {
    let mut spans = Vec::new();
    let mut rest = phonetic;
    while !rest.is_empty() {
        let span = next_span(rest);
        rest = &rest[span.symbols.len()..];
        spans.push(span);
    }
    spans
}

fn next_span(rest: &str) -> VisemeSpan<'_> {
    for table in TABLES {
        let Some(candidate) = head(rest, table.width) else {
            continue;
        };
        if let Some(rule) = table.find(candidate) {
            return VisemeSpan {
                symbols: candidate,
                visemes: rule.visemes,
            };
        }
    }

    let width = rest.chars().next().map_or(rest.len(), char::len_utf8);
    VisemeSpan {
        symbols: &rest[..width],
        visemes: &[],
    }
}

/// The first `count` symbols of `text`, or `None` when fewer remain.
fn head(text: &str, count: usize) -> Option<&str> {
    match text.char_indices().nth(count) {
        Some((end, _)) => Some(&text[..end]),
        None => (text.chars().count() == count).then_some(text),
    }
}
