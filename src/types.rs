//! Core types shared across the lip-sync pipeline

use serde::Serialize;

/// Mouth-shape identifier selecting one sprite.
pub type VisemeCode = u8;

/// Highest viseme code any table emits.
pub const MAX_VISEME: VisemeCode = 18;

/// Number of distinct mouth shapes a renderer needs sprites for.
pub const VISEME_COUNT: usize = MAX_VISEME as usize + 1;

/// Every intermediate produced while converting one dialogue line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// Line as received from the script reader
    pub raw: String,
    /// Lowercased, annotation-free text over the restricted alphabet
    pub normalized: String,
    /// Transcriber output, possibly holding marked unknown words
    pub phonetic: String,
    /// Phonetic string after unknown-word resolution
    pub resolved: String,
    /// Mouth shapes in playback order
    pub visemes: Vec<VisemeCode>,
}
