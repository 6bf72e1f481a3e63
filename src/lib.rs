//! # Ejaan
//!
//! A normalizer for informally written Indonesian text.
//!
//! ## Features
//!
//! - Morphological generation of inflected surface forms from root words
//! - A lexicon built from generated forms and place/function-word gazetteers
//! - Symmetric-delete fuzzy lookup bounded by edit distance
//! - A six-pass correction pipeline (punctuation, reduplication, prefix
//!   typos, spelling, numerals, capitalization) with a per-call change log
//! - Pluggable entity recognition and numeral rendering

pub mod analysis;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod lexicon;
pub mod morphology;
pub mod numeral;
pub mod pipeline;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::config::{IndexConfig, NormalizerConfig, PipelineConfig};
    pub use crate::entity::{EntityLabel, EntityRecognizer, EntitySpan};
    pub use crate::error::{EjaanError, Result};
    pub use crate::lexicon::{Lexicon, LexiconBuilder, RootSource};
    pub use crate::numeral::NumeralRenderer;
    pub use crate::pipeline::{ChangeKind, ChangeRecord, Correction, TextNormalizer};
    pub use crate::spelling::{SpellingEngine, Suggestion};
}
