//! Numerals: spell out standalone numbers, abbreviate round large ones.

use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::numeral::NumeralRenderer;
use crate::pipeline::CorrectionPass;
use crate::pipeline::change_log::{ChangeKind, ChangeLog};
use crate::util::text::{char_boundaries, char_slice};

lazy_static! {
    static ref NUMERAL: Regex = Regex::new(r"\b\d[\d.,]*\b").unwrap();
}

/// Scale words tried largest first when a number cannot be spelled out as one word.
pub const SCALE_WORDS: [(u64, &str); 4] = [
    (1_000_000_000_000, "triliun"),
    (1_000_000_000, "miliar"),
    (1_000_000, "juta"),
    (1_000, "ribu"),
];

/// Rewrites digit runs (with `.`/`,` separators) in one of two ways:
///
/// - a number whose words form a single word, outside a list, is spelled out
///   (`5` -> `lima`),
/// - otherwise an exact multiple of a scale is written `<quotient> <scale>`
///   (`3000000` -> `3 juta`).
///
/// Anything else is left alone, including numbers too large for `u64`.
pub struct NumeralConversion {
    renderer: Arc<dyn NumeralRenderer>,
    locale: String,
    list_window: usize,
}

impl NumeralConversion {
    pub fn new(
        renderer: Arc<dyn NumeralRenderer>,
        locale: impl Into<String>,
        list_window: usize,
    ) -> Self {
        NumeralConversion {
            renderer,
            locale: locale.into(),
            list_window,
        }
    }

    /// Whether the numeral at chars `[start, end)` looks like part of an
    /// enumeration: a comma within the window, plus `dan` or a digit.
    ///
    /// The window includes the numeral itself.
    pub fn is_part_of_list(&self, text: &str, start: usize, end: usize) -> bool {
        let window = char_slice(
            text,
            start.saturating_sub(self.list_window),
            end.saturating_add(self.list_window),
        );
        window.contains(',') && (window.contains("dan") || window.chars().any(char::is_numeric))
    }

    fn rewrite(&self, numeral: &str, in_list: bool, log: &mut ChangeLog) -> Option<String> {
        let digits: String = numeral.chars().filter(|c| *c != '.' && *c != ',').collect();
        let number: u64 = match digits.parse() {
            Ok(number) => number,
            _ => {
                debug!("Leaving numeral {numeral:?} unchanged: not a u64");
                return None;
            }
        };

        match self.renderer.to_words(number, &self.locale) {
            Ok(words) if words.split_whitespace().count() == 1 && !in_list => {
                log.record(ChangeKind::NumToWord, numeral, &words);
                return Some(words);
            }
            Ok(_) => {}
            Err(e) => debug!(
                "Renderer {} cannot spell {number}: {e}",
                self.renderer.name()
            ),
        }

        let (scale, label) = SCALE_WORDS
            .iter()
            .find(|(scale, _)| number >= *scale && number % scale == 0)?;
        let fixed = format!("{} {label}", number / scale);
        log.record(ChangeKind::LargeNum, numeral, &fixed);
        Some(fixed)
    }
}

impl CorrectionPass for NumeralConversion {
    fn apply(&self, text: &str, log: &mut ChangeLog) -> String {
        let boundaries = char_boundaries(text);
        let to_char = |byte: usize| boundaries.partition_point(|&b| b < byte);

        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;

        for m in NUMERAL.find_iter(text) {
            output.push_str(&text[last_end..m.start()]);
            let in_list = self.is_part_of_list(text, to_char(m.start()), to_char(m.end()));
            match self.rewrite(m.as_str(), in_list, log) {
                Some(fixed) => output.push_str(&fixed),
                None => output.push_str(m.as_str()),
            }
            last_end = m.end();
        }
        output.push_str(&text[last_end..]);

        output
    }

    fn name(&self) -> &'static str {
        "numerals"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EjaanError, Result};
    use crate::numeral::IndonesianNumerals;

    /// Spells every number as one made-up word.
    struct OneWordRenderer;

    impl NumeralRenderer for OneWordRenderer {
        fn to_words(&self, n: u64, _locale: &str) -> Result<String> {
            Ok(format!("angka{n}"))
        }

        fn name(&self) -> &'static str {
            "one_word"
        }
    }

    struct FailingRenderer;

    impl NumeralRenderer for FailingRenderer {
        fn to_words(&self, _n: u64, _locale: &str) -> Result<String> {
            Err(EjaanError::numeral("out of range"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn apply(renderer: Arc<dyn NumeralRenderer>, text: &str) -> (String, ChangeLog) {
        let mut log = ChangeLog::new();
        let fixed = NumeralConversion::new(renderer, "id", 20).apply(text, &mut log);
        (fixed, log)
    }

    #[test]
    fn test_single_word_numbers_are_spelled_out() {
        let (fixed, log) = apply(Arc::new(IndonesianNumerals), "Saya punya 5 apel dan 10 jeruk");
        assert_eq!(fixed, "Saya punya lima apel dan sepuluh jeruk");
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].kind, ChangeKind::NumToWord);
    }

    #[test]
    fn test_round_numbers_use_scale_words() {
        let (fixed, log) = apply(
            Arc::new(IndonesianNumerals),
            "Harga 5000 rupiah, dana 3.000.000.000 untuk 2024",
        );
        assert_eq!(fixed, "Harga 5 ribu rupiah, dana 3 miliar untuk 2024");
        assert!(log.records().iter().all(|r| r.kind == ChangeKind::LargeNum));
        assert_eq!(log.records()[1].original, "3.000.000.000");
    }

    #[test]
    fn test_list_context_blocks_spelling_out() {
        let (fixed, log) = apply(Arc::new(OneWordRenderer), "1, 2, dan 3");
        assert_eq!(fixed, "1, 2, dan 3");
        assert!(log.is_empty());
    }

    #[test]
    fn test_list_heuristic_window() {
        let pass = NumeralConversion::new(Arc::new(OneWordRenderer), "id", 20);
        let text = "Saya punya 5000 rupiah";
        assert!(!pass.is_part_of_list(text, 11, 15));
        assert!(pass.is_part_of_list("ada 7, lalu", 4, 5));
    }

    #[test]
    fn test_renderer_failure_falls_back() {
        let (fixed, log) = apply(Arc::new(FailingRenderer), "ada 7000 dan 7");
        assert_eq!(fixed, "ada 7 ribu dan 7");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_overflow_is_left_alone() {
        let (fixed, log) = apply(Arc::new(OneWordRenderer), "angka 99999999999999999999999 besar");
        assert_eq!(fixed, "angka 99999999999999999999999 besar");
        assert!(log.is_empty());
    }
}
