//! Entity recognizer trait and span types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EjaanError, Result};

/// Category of a recognized entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    GeoPolitical,
    /// Any label outside the four above, kept verbatim.
    Other(String),
}

impl EntityLabel {
    /// Person and organization names are never spell-corrected.
    pub fn is_protected(&self) -> bool {
        matches!(self, EntityLabel::Person | EntityLabel::Organization)
    }

    /// Labels whose spans are title-cased.
    pub fn is_capitalized(&self) -> bool {
        !matches!(self, EntityLabel::Other(_))
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "PERSON"),
            EntityLabel::Organization => write!(f, "ORGANIZATION"),
            EntityLabel::Location => write!(f, "LOCATION"),
            EntityLabel::GeoPolitical => write!(f, "GPE"),
            EntityLabel::Other(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for EntityLabel {
    type Err = EjaanError;

    /// Accepts both short tags (`PER`, `LOC`) and long names (`PERSON`, `LOCATION`).
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        if label.is_empty() {
            return Err(EjaanError::entity("Empty entity label"));
        }
        Ok(match label.to_ascii_uppercase().as_str() {
            "PER" | "PERSON" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" | "ORGANISATION" => EntityLabel::Organization,
            "LOC" | "LOCATION" => EntityLabel::Location,
            "GPE" => EntityLabel::GeoPolitical,
            _ => EntityLabel::Other(label.to_string()),
        })
    }
}

impl From<String> for EntityLabel {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(EntityLabel::Other(s))
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.to_string()
    }
}

/// A recognized entity: `[start, end)` in characters, with label and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

impl EntitySpan {
    /// Create a new span.
    pub fn new(start: usize, end: usize, label: EntityLabel, score: f32) -> Self {
        EntitySpan {
            start,
            end,
            label,
            score,
        }
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the two spans share at least one character.
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

/// Finds entity spans in text.
///
/// Implementations may be slow or fail; callers treat an error as "no
/// entities" and carry on.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entities in `text`. Offsets are character offsets into `text`.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;

    /// Get the name of this recognizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A recognizer that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
