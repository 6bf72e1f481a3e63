//! Audit trail of applied corrections.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::entity::EntityLabel;

/// What kind of correction produced a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ChangeKind {
    /// Repeated word joined with a hyphen.
    Reduplication,
    /// Unassimilated nasal prefix.
    PrefixTypo,
    /// Hardcoded lexical typo handled with the prefix rules.
    LexicalTypo,
    /// Lexicon-guided spelling correction.
    Spelling,
    /// Numeral spelled out as a single word.
    NumToWord,
    /// Round numeral rewritten with a scale word.
    LargeNum,
    /// Entity span title-cased.
    Capitalization(EntityLabel),
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Reduplication => write!(f, "Reduplication"),
            ChangeKind::PrefixTypo => write!(f, "KPST Correction"),
            ChangeKind::LexicalTypo => write!(f, "KPST/Typo Correction"),
            ChangeKind::Spelling => write!(f, "Spelling"),
            ChangeKind::NumToWord => write!(f, "Num to Word"),
            ChangeKind::LargeNum => write!(f, "Large Num"),
            ChangeKind::Capitalization(label) => write!(f, "Capitalization ({label})"),
        }
    }
}

impl From<ChangeKind> for String {
    fn from(kind: ChangeKind) -> Self {
        kind.to_string()
    }
}

/// One applied correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub original: String,
    pub corrected: String,
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?} -> {:?}", self.kind, self.original, self.corrected)
    }
}

/// Append-only list of changes for one `process` call.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
}

impl ChangeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change. Identical fragments are not a change and are ignored.
    pub fn record(&mut self, kind: ChangeKind, original: &str, corrected: &str) {
        if original == corrected {
            return;
        }
        let record = ChangeRecord {
            kind,
            original: original.to_string(),
            corrected: corrected.to_string(),
        };
        debug!("{record}");
        self.records.push(record);
    }

    /// Recorded changes in order.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the log, returning its records.
    pub fn into_records(self) -> Vec<ChangeRecord> {
        self.records
    }
}
