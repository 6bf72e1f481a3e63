//! The text correction pipeline.
//!
//! A [`TextNormalizer`] runs six [`CorrectionPass`]es in a fixed order, each
//! consuming the previous pass's output:
//!
//! 1. [`punctuation::PunctuationSpacing`]
//! 2. [`reduplication::Reduplication`]
//! 3. [`prefix_typo::PrefixTypoCorrection`]
//! 4. [`spelling::SpellingCorrection`]
//! 5. [`numerals::NumeralConversion`]
//! 6. [`capitalization::EntityCapitalization`]
//!
//! Passes record what they rewrite in a [`ChangeLog`] owned by the single
//! `process` call, so concurrent calls never see each other's changes.

pub mod capitalization;
pub mod change_log;
pub mod normalizer;
pub mod numerals;
pub mod prefix_typo;
pub mod punctuation;
pub mod reduplication;
pub mod spelling;

use crate::analysis::token::Token;
use crate::util::text::char_boundaries;

pub use change_log::{ChangeKind, ChangeLog, ChangeRecord};
pub use normalizer::{Correction, TextNormalizer};

/// A single rewrite over a whole text.
///
/// Passes never fail: a collaborator error degrades the pass (down to a
/// no-op) and is logged.
pub trait CorrectionPass: Send + Sync {
    /// Rewrite `text`, recording applied changes in `log`.
    fn apply(&self, text: &str, log: &mut ChangeLog) -> String;

    /// Get the name of this pass.
    fn name(&self) -> &'static str;
}

/// Rebuild `text` token by token, copying everything between tokens verbatim.
///
/// `rewrite` returns the replacement for a token, or `None` to keep it.
pub(crate) fn rewrite_tokens<F>(text: &str, tokens: &[Token], mut rewrite: F) -> String
where
    F: FnMut(&Token) -> Option<String>,
{
    let boundaries = char_boundaries(text);
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for token in tokens {
        output.push_str(&text[boundaries[last_end]..boundaries[token.start_offset]]);
        match rewrite(token) {
            Some(replacement) => output.push_str(&replacement),
            None => output.push_str(&token.text),
        }
        last_end = token.end_offset;
    }
    output.push_str(&text[boundaries[last_end]..]);

    output
}
