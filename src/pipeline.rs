//! Line-to-viseme pipeline composing the four conversion stages.

use tracing::trace;

use crate::phonemes::{LexiconTranscriber, OverrideTable, Transcriber};
use crate::text::normalize;
use crate::types::{LineReport, VisemeCode};
use crate::visemes::segment;

/// Converts dialogue lines into viseme sequences.
///
/// Holds no per-line state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct LipSyncPipeline<T> {
    transcriber: T,
    overrides: OverrideTable,
}

impl Default for LipSyncPipeline<&'static LexiconTranscriber> {
    fn default() -> Self {
        Self::new(LexiconTranscriber::shared())
    }
}

impl<T: Transcriber> LipSyncPipeline<T> {
    /// Pipeline using `transcriber` and the built-in override table.
    pub fn new(transcriber: T) -> Self {
        Self {
            transcriber,
            overrides: OverrideTable::builtin(),
        }
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn transcriber(&self) -> &T {
        &self.transcriber
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Converts one raw line into mouth shapes in playback order.
    pub fn visemes(&self, raw: &str) -> Vec<VisemeCode> {
        self.analyze(raw).visemes
    }

    /// Converts one raw line, keeping every intermediate string.
    pub fn analyze(&self, raw: &str) -> LineReport {
        let normalized = normalize(raw);
        trace!(%normalized, "normalized line");

        let phonetic = self.transcriber.transcribe(&normalized);
        trace!(%phonetic, "transcribed line");

        let resolved = self.overrides.resolve(&phonetic);
        trace!(%resolved, "resolved unknown words");

        let visemes = segment(&resolved);
        trace!(count = visemes.len(), ?visemes, "segmented visemes");

        LineReport {
            raw: raw.to_string(),
            normalized,
            phonetic,
            resolved,
            visemes,
        }
    }
}
