//! Levenshtein edit distance.
//!
//! Only insertions, deletions and substitutions are counted; adjacent
//! transpositions cost two edits. The approximate match index verifies every
//! candidate produced from its deletion variants with these functions.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// Distances are measured in `char`s, not bytes.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    distance_chars(&s1_chars, &s2_chars, usize::MAX).unwrap_or(usize::MAX)
}

fn distance_chars(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        let distance = len1.max(len2);
        return (distance <= threshold).then_some(distance);
    }

    // Two rows are enough
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Distance calculator for one query against many candidates.
///
/// The query is decoded into `char`s once instead of once per candidate.
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: String) -> Self {
        let query_chars = query.chars().collect();
        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of characters in the query.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate distance with threshold for early termination.
    ///
    /// Returns `None` as soon as the distance is known to exceed `threshold`.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars(&self.query_chars, &candidate_chars, threshold)
    }
}
