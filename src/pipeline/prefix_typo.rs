//! Unassimilated nasal prefixes (KPST rule).
//!
//! Roots starting with `k`, `p`, `s` or `t` lose that consonant after the
//! `me-` prefix when a vowel follows (`pakai` -> `memakai`). Writers often
//! keep it; this pass restores the assimilated form.

use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::morphology::affix::is_vowel;
use crate::pipeline::change_log::{ChangeKind, ChangeLog};
use crate::pipeline::{CorrectionPass, rewrite_tokens};
use crate::util::text::{capitalize_first, starts_uppercase};

/// Malformed prefix and its replacement, checked in this order before a vowel.
pub const PREFIX_RULES: [(&str, &str); 4] = [
    ("memp", "mem"),
    ("ment", "men"),
    ("mens", "meny"),
    ("mengk", "meng"),
];

/// Misspellings replaced wherever they occur inside a word.
pub const LEXICAL_TYPOS: [(&str, &str); 1] = [("menpegang", "memegang")];

/// Rewrites words carrying an unassimilated prefix, first matching rule only.
///
/// Matched words are lowercased apart from a leading capital, which is kept.
#[derive(Debug, Clone, Default)]
pub struct PrefixTypoCorrection {
    tokenizer: WhitespaceTokenizer,
}

impl PrefixTypoCorrection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The corrected form of `word` and the kind of correction, if a rule applies.
    pub fn correct_word(word: &str) -> Option<(String, ChangeKind)> {
        let lower = word.to_lowercase();

        let (fixed, kind) = PREFIX_RULES
            .iter()
            .find_map(|(malformed, assimilated)| {
                lower
                    .strip_prefix(malformed)
                    .filter(|rest| rest.chars().next().is_some_and(is_vowel))
                    .map(|rest| (format!("{assimilated}{rest}"), ChangeKind::PrefixTypo))
            })
            .or_else(|| {
                LEXICAL_TYPOS
                    .iter()
                    .find(|(typo, _)| lower.contains(typo))
                    .map(|(typo, fixed)| (lower.replace(typo, fixed), ChangeKind::LexicalTypo))
            })?;

        if starts_uppercase(word) {
            Some((capitalize_first(&fixed), kind))
        } else {
            Some((fixed, kind))
        }
    }
}

impl CorrectionPass for PrefixTypoCorrection {
    fn apply(&self, text: &str, log: &mut ChangeLog) -> String {
        let tokens = self.tokenizer.split(text);
        rewrite_tokens(text, &tokens, |token| {
            let (fixed, kind) = Self::correct_word(&token.text)?;
            log.record(kind, &token.text, &fixed);
            Some(fixed)
        })
    }

    fn name(&self) -> &'static str {
        "prefix_typo"
    }
}
