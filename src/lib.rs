//! Lip-sync for dialogue lines.
//!
//! A line of dialogue goes through four pure stages: [`normalize`],
//! [`transcribe`], [`resolve_unknown`] and [`segment`]. The result is a
//! sequence of viseme codes in `0..=18`, one mouth-shape sprite per code.

pub mod config;
pub mod logging;
pub mod phonemes;
pub mod pipeline;
pub mod text;
pub mod types;
pub mod visemes;

pub use phonemes::{resolve_unknown, transcribe, Transcriber};
pub use pipeline::LipSyncPipeline;
pub use text::normalize;
pub use types::{LineReport, VisemeCode, MAX_VISEME, VISEME_COUNT};
pub use visemes::segment;

/// Converts a raw dialogue line with the bundled lexicon and overrides.
pub fn line_to_visemes(raw: &str) -> Vec<VisemeCode> {
    LipSyncPipeline::default().visemes(raw)
}
