use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::phonemes::{mark_unknown, UNKNOWN_MARKER};

/// Hand-written pronunciations for names the lexicon does not know.
///
/// Several are approximations of Japanese readings that land on the same
/// mouth shapes, e.g. a Japanese "r" written as English "d".
pub const BUILTIN_OVERRIDES: [(&str, &str); 6] = [
    ("monika*", "mɑnɪkə"),
    ("yuri*", "jɪdi"),
    ("natsuki*", "natski"),
    ("sayori*", "sajodi"),
    ("doki*", "doki"),
    ("salvato*", "sælvɑtoʊ"),
];

static RE_MARKED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+\*").expect("marked word pattern"));

static BUILTIN_TABLE: Lazy<OverrideTable> = Lazy::new(OverrideTable::builtin);

/// Exact-match replacements for marked words, keyed by lowercase marked word.
#[derive(Debug, Clone)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl Default for OverrideTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OverrideTable {
    /// Table holding only the built-in entries.
    pub fn builtin() -> Self {
        let entries = BUILTIN_OVERRIDES
            .iter()
            .map(|(word, ipa)| (word.to_string(), ipa.to_string()))
            .collect();
        Self { entries }
    }

    /// Returns a handle to the globally shared built-in table.
    pub fn shared() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Adds entries on top of the current ones; later entries win.
    ///
    /// Keys are lowercased and gain the unknown-word marker when missing.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (word, ipa) in entries {
            self.entries.insert(marked_key(word.as_ref()), ipa.into());
        }
        self
    }

    /// Replacement for a single marked word, if any.
    pub fn lookup(&self, marked: &str) -> Option<&str> {
        self.entries.get(&marked.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every marked word in `text`.
    ///
    /// Words with no entry are removed entirely and leave no placeholder.
    pub fn resolve(&self, text: &str) -> String {
        RE_MARKED_WORD
            .replace_all(text, |caps: &Captures| {
                let marked = &caps[0];
                match self.lookup(marked) {
                    Some(ipa) => {
                        debug!(word = marked, ipa, "replaced unknown word");
                        ipa.to_string()
                    }
                    None => {
                        debug!(word = marked, "dropped unknown word");
                        String::new()
                    }
                }
            })
            .into_owned()
    }
}

/// Resolves marked words against the built-in table.
pub fn resolve_unknown(text: &str) -> String {
    OverrideTable::shared().resolve(text)
}

fn marked_key(word: &str) -> String {
    let word = word.trim().to_lowercase();
    if word.ends_with(UNKNOWN_MARKER) {
        word
    } else {
        mark_unknown(&word)
    }
}
