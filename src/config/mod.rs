use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::phonemes::{LexiconTranscriber, OverrideTable};
use crate::pipeline::LipSyncPipeline;

/// Environment variable naming a CMU-style lexicon to use instead of the
/// bundled one.
pub const LEXICON_ENV: &str = "LIPSYNC_LEXICON";

/// Pipeline settings, typically read from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Lexicon replacing the bundled one.
    #[serde(alias = "lexicon")]
    pub lexicon_path: Option<PathBuf>,
    /// Extra override-table entries, word to IPA.
    pub overrides: BTreeMap<String, String>,
}

impl PipelineConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to parse pipeline config JSON")
    }

    /// Reads a config file; a relative lexicon path resolves against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read pipeline config {:?}", path))?;
        let mut config = Self::from_json(&data)
            .with_context(|| format!("invalid pipeline config {:?}", path))?;
        if let (Some(lexicon), Some(dir)) = (config.lexicon_path.as_mut(), path.parent()) {
            if lexicon.is_relative() {
                *lexicon = dir.join(&*lexicon);
            }
        }
        Ok(config)
    }

    /// Config whose lexicon comes from `LIPSYNC_LEXICON`, when set.
    pub fn from_env() -> Self {
        Self {
            lexicon_path: std::env::var_os(LEXICON_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn override_table(&self) -> OverrideTable {
        OverrideTable::builtin().with_entries(&self.overrides)
    }

    pub fn build(&self) -> Result<LipSyncPipeline<LexiconTranscriber>> {
        let transcriber = match &self.lexicon_path {
            Some(path) => LexiconTranscriber::from_path(path)
                .with_context(|| format!("failed to load lexicon {:?}", path))?,
            None => LexiconTranscriber::shared().clone(),
        };
        Ok(LipSyncPipeline::new(transcriber).with_overrides(self.override_table()))
    }
}
