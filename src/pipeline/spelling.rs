//! Lexicon-guided spelling correction.

use std::sync::Arc;

use log::warn;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::entity::{EntityRecognizer, EntitySpan};
use crate::pipeline::change_log::{ChangeKind, ChangeLog};
use crate::pipeline::{CorrectionPass, rewrite_tokens};
use crate::spelling::SpellingEngine;
use crate::util::text::{is_word_char, starts_uppercase, title_case};

/// Replaces out-of-lexicon words with their closest lexicon entry.
///
/// A token is kept as written when any of these holds:
///
/// - it overlaps a PERSON or ORGANIZATION span scoring above the protection
///   threshold,
/// - its word characters (letters, digits, `_`, `-`) are empty or include a digit,
/// - it is in the lexicon, or every non-empty hyphen-separated part is,
/// - no entry lies within the engine's edit distance,
/// - it is shorter than the short-token length and the best entry differs
///   in length.
///
/// A replacement is title-cased when the token as written starts uppercase,
/// so a leading quote or bracket keeps it lowercase. The punctuation
/// surrounding the word is kept.
pub struct SpellingCorrection {
    engine: Arc<SpellingEngine>,
    recognizer: Arc<dyn EntityRecognizer>,
    tokenizer: WhitespaceTokenizer,
    protect_threshold: f32,
    short_token_length: usize,
}

impl SpellingCorrection {
    pub fn new(
        engine: Arc<SpellingEngine>,
        recognizer: Arc<dyn EntityRecognizer>,
        protect_threshold: f32,
        short_token_length: usize,
    ) -> Self {
        SpellingCorrection {
            engine,
            recognizer,
            tokenizer: WhitespaceTokenizer::new(),
            protect_threshold,
            short_token_length,
        }
    }

    /// Non-empty PERSON/ORGANIZATION spans above the threshold. A recognizer
    /// failure leaves nothing protected.
    fn protected_spans(&self, text: &str) -> Vec<EntitySpan> {
        match self.recognizer.recognize(text) {
            Ok(spans) => spans
                .into_iter()
                .filter(|span| {
                    !span.is_empty()
                        && span.label.is_protected()
                        && span.score > self.protect_threshold
                })
                .collect(),
            Err(e) => {
                warn!(
                    "Entity recognizer {} failed, correcting without protected spans: {e}",
                    self.recognizer.name()
                );
                Vec::new()
            }
        }
    }

    /// The correction for a single unprotected token, if any.
    pub fn correct_token(&self, token: &str) -> Option<String> {
        let clean: String = token
            .chars()
            .filter(|c| is_word_char(*c) || *c == '-')
            .collect();
        if clean.is_empty() || clean.chars().any(char::is_numeric) {
            return None;
        }

        let lower = clean.to_lowercase();
        if self.engine.lookup_exact(&lower) {
            return None;
        }
        if lower.contains('-')
            && lower
                .split('-')
                .filter(|part| !part.is_empty())
                .all(|part| self.engine.lookup_exact(part))
        {
            return None;
        }

        let best = self
            .engine
            .index()
            .closest(&lower, self.engine.max_distance())?;

        let clean_len = clean.chars().count();
        if clean_len < self.short_token_length && best.term.chars().count() != clean_len {
            return None;
        }

        let word = if starts_uppercase(token) {
            title_case(&best.term)
        } else {
            best.term
        };

        let leading: String = token
            .chars()
            .take_while(|c| !is_word_char(*c) && *c != '-')
            .collect();
        let mut fixed = leading;
        fixed.push_str(&word);
        if let Some(last) = token.chars().last()
            && !last.is_alphanumeric()
        {
            fixed.push(last);
        }

        Some(fixed)
    }

    fn is_protected(token: &Token, spans: &[EntitySpan]) -> bool {
        spans
            .iter()
            .any(|span| token.overlaps(span.start, span.end))
    }
}

impl CorrectionPass for SpellingCorrection {
    fn apply(&self, text: &str, log: &mut ChangeLog) -> String {
        let spans = self.protected_spans(text);
        let tokens = self.tokenizer.split(text);

        rewrite_tokens(text, &tokens, |token| {
            if Self::is_protected(token, &spans) {
                return None;
            }
            let fixed = self.correct_token(&token.text)?;
            log.record(ChangeKind::Spelling, &token.text, &fixed);
            Some(fixed)
        })
    }

    fn name(&self) -> &'static str {
        "spelling"
    }
}
