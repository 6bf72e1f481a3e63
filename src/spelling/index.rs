//! Symmetric-delete approximate match index.
//!
//! Every lexicon term is indexed under the strings obtained by deleting up to
//! `max_distance` characters from its first `prefix_length` characters. A
//! query generates the same deletion variants of its own prefix; any term
//! sharing a variant is a candidate, and candidates are verified with the
//! full-string Levenshtein distance before they are returned.

use ahash::{AHashMap, AHashSet};
use log::{debug, info};
use rayon::prelude::*;

use crate::config::IndexConfig;
use crate::lexicon::Lexicon;
use crate::spelling::suggest::Suggestion;
use crate::util::levenshtein::LevenshteinMatcher;

/// Read-only exact and fuzzy lookup over a lexicon.
///
/// The index takes ownership of the lexicon's terms: they live once, sorted,
/// with their frequencies in a parallel vector addressed by term id.
#[derive(Debug, Clone)]
pub struct SymmetricDeleteIndex {
    config: IndexConfig,
    terms: Vec<String>,
    frequencies: Vec<u32>,
    deletes: AHashMap<String, Vec<u32>>,
}

impl SymmetricDeleteIndex {
    /// Index every term of `lexicon`.
    pub fn new(lexicon: Lexicon, config: IndexConfig) -> Self {
        let (terms, frequencies): (Vec<String>, Vec<u32>) =
            lexicon.into_sorted_entries().into_iter().unzip();

        let variants: Vec<AHashSet<String>> = terms
            .par_iter()
            .map(|term| delete_variants(&prefix(term, config.prefix_length), config.max_distance))
            .collect();

        let mut deletes: AHashMap<String, Vec<u32>> = AHashMap::new();
        for (id, term_variants) in variants.into_iter().enumerate() {
            for variant in term_variants {
                deletes.entry(variant).or_default().push(id as u32);
            }
        }

        info!(
            "Indexed {} terms under {} deletion variants (max distance {}, prefix length {})",
            terms.len(),
            deletes.len(),
            config.max_distance,
            config.prefix_length
        );

        SymmetricDeleteIndex {
            config,
            terms,
            frequencies,
            deletes,
        }
    }

    /// The parameters the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Number of indexed terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `term`, lowercased, is in the lexicon.
    pub fn lookup_exact(&self, term: &str) -> bool {
        self.term_id(&term.to_lowercase()).is_some()
    }

    /// Frequency of `term`, lowercased, or 0 when absent.
    pub fn frequency(&self, term: &str) -> u32 {
        self.term_id(&term.to_lowercase())
            .map_or(0, |id| self.frequencies[id])
    }

    /// Indexed terms in ascending order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    fn term_id(&self, term: &str) -> Option<usize> {
        self.terms
            .binary_search_by(|entry| entry.as_str().cmp(term))
            .ok()
    }

    /// Every term within `max_distance` edits of `term`, closest first.
    ///
    /// `max_distance` is capped at the distance the index was built for. Ties
    /// are ordered by descending frequency, then alphabetically.
    pub fn lookup_closest(&self, term: &str, max_distance: usize) -> Vec<Suggestion> {
        let query = term.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let max_distance = if max_distance > self.config.max_distance {
            debug!(
                "Capping lookup distance {} to index maximum {}",
                max_distance, self.config.max_distance
            );
            self.config.max_distance
        } else {
            max_distance
        };

        let matcher = LevenshteinMatcher::new(query);
        let mut seen: AHashSet<u32> = AHashSet::new();
        let mut suggestions = Vec::new();

        for variant in delete_variants(&prefix(matcher.query(), self.config.prefix_length), max_distance) {
            let Some(ids) = self.deletes.get(&variant) else {
                continue;
            };
            for &id in ids {
                if !seen.insert(id) {
                    continue;
                }
                let candidate = &self.terms[id as usize];
                if candidate.chars().count().abs_diff(matcher.query_len()) > max_distance {
                    continue;
                }
                if let Some(distance) = matcher.distance_threshold(candidate, max_distance) {
                    suggestions.push(Suggestion::new(
                        candidate.clone(),
                        distance,
                        self.frequencies[id as usize],
                    ));
                }
            }
        }

        suggestions.sort();
        suggestions
    }

    /// The best match for `term` within `max_distance`, if any.
    pub fn closest(&self, term: &str, max_distance: usize) -> Option<Suggestion> {
        self.lookup_closest(term, max_distance).into_iter().next()
    }
}

fn prefix(term: &str, prefix_length: usize) -> String {
    term.chars().take(prefix_length).collect()
}

/// `word` and every string reachable from it by deleting up to `max_distance` characters.
fn delete_variants(word: &str, max_distance: usize) -> AHashSet<String> {
    let mut variants = AHashSet::new();
    variants.insert(word.to_string());

    let mut frontier = vec![word.to_string()];
    for _ in 0..max_distance {
        let mut next = Vec::new();
        for current in &frontier {
            let chars: Vec<char> = current.chars().collect();
            for skip in 0..chars.len() {
                let variant: String = chars
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, c)| *c)
                    .collect();
                if variants.insert(variant.clone()) {
                    next.push(variant);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    variants
}
