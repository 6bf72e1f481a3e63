//! Normalizer configuration.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes:
//!
//! ```json
//! { "lexicon_path": "cache/lexicon.txt", "pipeline": { "locale": "id" } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EjaanError, Result};
use crate::lexicon::RootSource;

/// Default location of the persisted lexicon.
pub const DEFAULT_LEXICON_PATH: &str = "data/full_dictionary.txt";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Persisted lexicon, loaded when present and written after a build.
    pub lexicon_path: PathBuf,
    /// Where root words come from when the lexicon has to be built.
    pub root_source: RootSource,
    /// Approximate match index parameters.
    pub index: IndexConfig,
    /// Correction pipeline parameters.
    pub pipeline: PipelineConfig,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            lexicon_path: PathBuf::from(DEFAULT_LEXICON_PATH),
            root_source: RootSource::default(),
            index: IndexConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl NormalizerConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: NormalizerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that would otherwise fail late.
    pub fn validate(&self) -> Result<()> {
        self.index.validate()?;
        self.pipeline.validate()
    }
}

/// Parameters of the symmetric-delete index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Largest edit distance the index can answer.
    pub max_distance: usize,
    /// Number of leading characters used to generate deletion variants.
    pub prefix_length: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            max_distance: 2,
            prefix_length: 7,
        }
    }
}

impl IndexConfig {
    fn validate(&self) -> Result<()> {
        if self.prefix_length == 0 {
            return Err(EjaanError::config("index.prefix_length must be at least 1"));
        }
        if self.prefix_length <= self.max_distance {
            return Err(EjaanError::config(format!(
                "index.prefix_length ({}) must exceed index.max_distance ({})",
                self.prefix_length, self.max_distance
            )));
        }
        Ok(())
    }
}

/// Parameters of the correction passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stripped tokens shorter than this only accept same-length corrections.
    pub short_token_length: usize,
    /// PERSON/ORGANIZATION spans scoring above this are protected from spelling correction.
    pub protect_threshold: f32,
    /// Entity spans scoring above this are capitalized.
    pub capitalize_threshold: f32,
    /// Characters inspected on each side of a numeral by the list heuristic.
    pub list_window: usize,
    /// Locale passed to the numeral renderer.
    pub locale: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            short_token_length: 4,
            protect_threshold: 0.5,
            capitalize_threshold: 0.6,
            list_window: 20,
            locale: "id".to_string(),
        }
    }
}

impl PipelineConfig {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("protect_threshold", self.protect_threshold),
            ("capitalize_threshold", self.capitalize_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EjaanError::config(format!(
                    "pipeline.{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.locale.trim().is_empty() {
            return Err(EjaanError::config("pipeline.locale must not be empty"));
        }
        Ok(())
    }
}
