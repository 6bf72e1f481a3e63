//! Fuzzy lookup results.

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};

/// A lexicon entry within edit distance of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The lexicon entry.
    pub term: String,
    /// Levenshtein distance from the query.
    pub distance: usize,
    /// Weight of the entry in the lexicon.
    pub frequency: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(term: String, distance: usize, frequency: u32) -> Self {
        Suggestion {
            term,
            distance,
            frequency,
        }
    }
}

/// Closest first; ties go to the heavier entry, then to alphabetical order.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.distance, Reverse(self.frequency), &self.term).cmp(&(
            other.distance,
            Reverse(other.frequency),
            &other.term,
        ))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
