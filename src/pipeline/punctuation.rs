//! Spacing around sentence punctuation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::pipeline::CorrectionPass;
use crate::pipeline::change_log::ChangeLog;

lazy_static! {
    static ref SPACE_BEFORE_MARK: Regex = Regex::new(r"\s+([.,;:?!])").unwrap();
    static ref MARK_BEFORE_LETTER: Regex = Regex::new(r"([.,;:?!])([a-zA-Z])").unwrap();
}

/// Removes whitespace before `.,;:?!` and adds a space after a mark that is
/// directly followed by a letter. Not recorded in the change log.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSpacing;

impl PunctuationSpacing {
    pub fn new() -> Self {
        PunctuationSpacing
    }
}

impl CorrectionPass for PunctuationSpacing {
    fn apply(&self, text: &str, _log: &mut ChangeLog) -> String {
        let text = SPACE_BEFORE_MARK.replace_all(text, "$1");
        MARK_BEFORE_LETTER.replace_all(&text, "$1 $2").into_owned()
    }

    fn name(&self) -> &'static str {
        "punctuation_spacing"
    }
}
