//! Gazetteer-based location recognizer.

use ahash::AHashSet;
use regex::Regex;

use crate::entity::recognizer::{EntityLabel, EntityRecognizer, EntitySpan};
use crate::error::{EjaanError, Result};
use crate::lexicon::gazetteer;
use crate::util::text::{char_boundaries, starts_uppercase};

/// Confidence reported for gazetteer hits.
pub const GAZETTEER_SCORE: f32 = 0.9;

/// Tags whole-word, case-insensitive occurrences of known place names.
///
/// Multi-word names match across any whitespace, and the longest name wins
/// where names overlap (`jakarta selatan` over `jakarta`). Ambiguous names,
/// which double as ordinary words, are only tagged where the writer already
/// capitalized them.
#[derive(Debug, Clone)]
pub struct GazetteerRecognizer {
    pattern: Regex,
    label: EntityLabel,
    ambiguous: AHashSet<String>,
}

impl GazetteerRecognizer {
    /// Create a recognizer tagging `names` with `label`.
    pub fn new<I, S>(names: I, label: EntityLabel) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(EjaanError::entity("Gazetteer recognizer needs at least one name"));
        }
        names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        names.dedup();

        let alternatives: Vec<String> = names
            .iter()
            .map(|name| {
                name.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect();
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
            .map_err(|e| EjaanError::Anyhow(anyhow::Error::from(e)))?;

        Ok(GazetteerRecognizer {
            pattern,
            label,
            ambiguous: AHashSet::new(),
        })
    }

    /// Only tag `names` where they start with an uppercase letter.
    pub fn with_ambiguous_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ambiguous
            .extend(names.into_iter().map(|name| normalize(name.as_ref())));
        self
    }

    /// Recognizer over the built-in Indonesian city, province and island lists.
    pub fn places() -> Result<Self> {
        Ok(Self::new(gazetteer::place_names(), EntityLabel::Location)?
            .with_ambiguous_names(gazetteer::AMBIGUOUS_PLACE_NAMES))
    }

    fn accepts(&self, matched: &str) -> bool {
        starts_uppercase(matched) || !self.ambiguous.contains(&normalize(matched))
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let boundaries = char_boundaries(text);
        let to_char = |byte: usize| boundaries.partition_point(|&b| b < byte);

        Ok(self
            .pattern
            .find_iter(text)
            .filter(|m| self.accepts(m.as_str()))
            .map(|m| {
                EntitySpan::new(
                    to_char(m.start()),
                    to_char(m.end()),
                    self.label.clone(),
                    GAZETTEER_SCORE,
                )
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "gazetteer"
    }
}
