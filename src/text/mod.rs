//! Text normalization for raw dialogue lines.
//!
//! Turns a raw script line into lowercase text over a restricted alphabet so
//! the transcriber only ever sees plain words and sentence punctuation.

pub mod numbers;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\[{][^\[\]{}]*[\]}]").expect("annotation pattern"));
static RE_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9.]*[0-9]+").expect("numeral pattern"));
static RE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z'.?!,;:\s]").expect("alphabet pattern"));

/// Normalizes a raw dialogue line.
///
/// Steps run in a fixed order and each feeds the next: lowercase, strip
/// `[...]`/`{...}` annotations, spell out numerals, turn hyphens into spaces,
/// then drop everything outside `a-z ' . ? ! , ; :` and whitespace.
pub fn normalize(raw: &str) -> String {
    let line = raw.to_lowercase();
    let line = strip_annotations(&line);
    let line = spell_numerals(&line);
    let line = line.replace('-', " ");
    restrict_alphabet(&line)
}

/// Removes script directives such as `{w=0.5}`, `[player]` or `{i}`.
///
/// Spans do not nest; the first closing delimiter of either family ends the
/// span.
pub fn strip_annotations(line: &str) -> String {
    RE_ANNOTATION.replace_all(line, "").into_owned()
}

/// Replaces every numeral with its word rendering.
pub fn spell_numerals(line: &str) -> String {
    RE_NUMERAL
        .replace_all(line, |caps: &Captures| numbers::numeral_to_words(&caps[0]))
        .into_owned()
}

fn restrict_alphabet(line: &str) -> String {
    RE_DISALLOWED.replace_all(line, "").into_owned()
}

/// Returns true when `ch` may appear in normalized text.
pub fn is_normalized_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '\'' | '.' | '?' | '!' | ',' | ';' | ':') || ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::{normalize, spell_numerals, strip_annotations};

    #[test]
    fn strips_directives_without_nesting() {
        assert_eq!(strip_annotations("wait{w=0.5} here"), "wait here");
        assert_eq!(strip_annotations("[player], hi"), ", hi");
        assert_eq!(strip_annotations("mixed [span} end"), "mixed  end");
        assert_eq!(strip_annotations("[a{b] c"), "[a c");
        assert_eq!(strip_annotations("open [never closed"), "open [never closed");
    }

    #[test]
    fn numerals_swallow_their_decimal_points() {
        assert_eq!(spell_numerals("v1.5"), "vone point five");
        assert_eq!(spell_numerals("end 2."), "end two point zero.");
    }

    #[test]
    fn only_ascii_digits_count_as_numerals() {
        assert_eq!(normalize("room ５"), "room ");
        assert_eq!(normalize("room ٣"), "room ");
    }

    #[test]
    fn hyphenated_number_words_split_on_spaces() {
        assert_eq!(normalize("21"), "twenty one point zero");
    }

    #[test]
    fn line_with_markup_and_numeral() {
        assert_eq!(
            normalize("[mon] Hello, World-5!"),
            " hello, world five point zero!"
        );
    }

    #[test]
    fn drops_symbols_outside_alphabet() {
        assert_eq!(normalize("\"Well… okay~\""), "well okay");
        assert_eq!(normalize("It's fine; really: yes?"), "it's fine; really: yes?");
    }

    #[test]
    fn keeps_line_breaks_and_tabs() {
        assert_eq!(normalize("a\tb\nc"), "a\tb\nc");
    }
}
