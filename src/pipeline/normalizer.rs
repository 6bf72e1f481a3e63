//! The pipeline entry point.

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::config::{NormalizerConfig, PipelineConfig};
use crate::entity::{EntityRecognizer, GazetteerRecognizer};
use crate::error::Result;
use crate::numeral::{IndonesianNumerals, NumeralRenderer};
use crate::pipeline::CorrectionPass;
use crate::pipeline::capitalization::EntityCapitalization;
use crate::pipeline::change_log::{ChangeLog, ChangeRecord};
use crate::pipeline::numerals::NumeralConversion;
use crate::pipeline::prefix_typo::PrefixTypoCorrection;
use crate::pipeline::punctuation::PunctuationSpacing;
use crate::pipeline::reduplication::Reduplication;
use crate::pipeline::spelling::SpellingCorrection;
use crate::spelling::SpellingEngine;

/// Result of one `process` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// The corrected text.
    pub corrected: String,
    /// Every applied change, in pipeline order.
    pub changes: Vec<ChangeRecord>,
}

/// Runs the six correction passes in order.
///
/// The normalizer only holds shared immutable state, so one instance can
/// serve any number of threads.
///
/// ```
/// use std::sync::Arc;
///
/// use ejaan::config::{IndexConfig, PipelineConfig};
/// use ejaan::entity::NoopRecognizer;
/// use ejaan::lexicon::Lexicon;
/// use ejaan::numeral::IndonesianNumerals;
/// use ejaan::pipeline::TextNormalizer;
/// use ejaan::spelling::SpellingEngine;
///
/// let lexicon = Lexicon::from_terms(["saya", "makan", "nasi", "kupu"]);
/// let engine = SpellingEngine::from_lexicon(lexicon, IndexConfig::default());
/// let normalizer = TextNormalizer::new(
///     Arc::new(engine),
///     Arc::new(NoopRecognizer),
///     Arc::new(IndonesianNumerals),
///     &PipelineConfig::default(),
/// );
///
/// let correction = normalizer.process("saya makn nasi ,kupu kupu");
/// assert_eq!(correction.corrected, "Saya makan nasi, kupu-kupu");
/// assert_eq!(correction.changes.len(), 2);
/// ```
pub struct TextNormalizer {
    passes: Vec<Arc<dyn CorrectionPass>>,
}

impl TextNormalizer {
    /// Assemble the pipeline around shared collaborators.
    pub fn new(
        engine: Arc<SpellingEngine>,
        recognizer: Arc<dyn EntityRecognizer>,
        renderer: Arc<dyn NumeralRenderer>,
        config: &PipelineConfig,
    ) -> Self {
        let passes: Vec<Arc<dyn CorrectionPass>> = vec![
            Arc::new(PunctuationSpacing::new()),
            Arc::new(Reduplication::new()),
            Arc::new(PrefixTypoCorrection::new()),
            Arc::new(SpellingCorrection::new(
                engine,
                Arc::clone(&recognizer),
                config.protect_threshold,
                config.short_token_length,
            )),
            Arc::new(NumeralConversion::new(
                renderer,
                config.locale.clone(),
                config.list_window,
            )),
            Arc::new(EntityCapitalization::new(
                recognizer,
                config.capitalize_threshold,
            )),
        ];

        TextNormalizer { passes }
    }

    /// Open the lexicon named by `config` and use the built-in place-name
    /// recognizer and Indonesian numerals.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        config.validate()?;
        let engine = SpellingEngine::open(config)?;
        info!("Spelling engine ready with {} forms", engine.len());

        Ok(Self::new(
            Arc::new(engine),
            Arc::new(GazetteerRecognizer::places()?),
            Arc::new(IndonesianNumerals),
            &config.pipeline,
        ))
    }

    /// Names of the passes in execution order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Correct `text`. The change log starts empty on every call.
    pub fn process(&self, text: &str) -> Correction {
        let mut log = ChangeLog::new();
        let mut current = text.to_string();

        for pass in &self.passes {
            let before = log.len();
            current = pass.apply(&current, &mut log);
            debug!("Pass {} recorded {} changes", pass.name(), log.len() - before);
        }

        Correction {
            corrected: current,
            changes: log.into_records(),
        }
    }
}
