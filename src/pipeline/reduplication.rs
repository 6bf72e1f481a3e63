//! Reduplication: `kupu kupu` becomes `kupu-kupu`.

use crate::pipeline::CorrectionPass;
use crate::pipeline::change_log::{ChangeKind, ChangeLog};
use crate::util::text::is_word_char;

/// Joins two identical consecutive words with a hyphen.
///
/// Words are maximal runs of ASCII letters separated by exactly one space,
/// compared case-insensitively and bounded by non-word characters on both
/// outer sides. The first word's casing is used for both halves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reduplication;

impl Reduplication {
    pub fn new() -> Self {
        Reduplication
    }
}

/// `[start, end)` char ranges of every maximal ASCII-letter run.
fn letter_runs(chars: &[char]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, c) in chars.iter().enumerate() {
        match (c.is_ascii_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, chars.len()));
    }

    runs
}

impl CorrectionPass for Reduplication {
    fn apply(&self, text: &str, log: &mut ChangeLog) -> String {
        let chars: Vec<char> = text.chars().collect();
        let runs = letter_runs(&chars);

        let mut output = String::with_capacity(text.len() + 4);
        let mut cursor = 0;
        let mut i = 0;

        while i + 1 < runs.len() {
            let (s1, e1) = runs[i];
            let (s2, e2) = runs[i + 1];

            let bounded_left = s1 == 0 || !is_word_char(chars[s1 - 1]);
            let single_space = s2 == e1 + 1 && chars[e1] == ' ';
            let bounded_right = e2 == chars.len() || !is_word_char(chars[e2]);
            let same_word = e1 - s1 == e2 - s2
                && chars[s1..e1]
                    .iter()
                    .zip(&chars[s2..e2])
                    .all(|(a, b)| a.eq_ignore_ascii_case(b));

            if bounded_left && single_space && bounded_right && same_word {
                let word: String = chars[s1..e1].iter().collect();
                let original: String = chars[s1..e2].iter().collect();
                let fixed = format!("{word}-{word}");

                output.extend(&chars[cursor..s1]);
                output.push_str(&fixed);
                log.record(ChangeKind::Reduplication, &original, &fixed);

                cursor = e2;
                i += 2;
            } else {
                i += 1;
            }
        }

        output.extend(&chars[cursor..]);
        output
    }

    fn name(&self) -> &'static str {
        "reduplication"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_repeated_word() {
        let mut log = ChangeLog::new();
        let fixed = Reduplication::new().apply("kupu kupu", &mut log);

        assert_eq!(fixed, "kupu-kupu");
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].kind, ChangeKind::Reduplication);
        assert_eq!(log.records()[0].original, "kupu kupu");
    }

    #[test]
    fn test_case_insensitive_and_keeps_first_casing() {
        let mut log = ChangeLog::new();
        let fixed = Reduplication::new().apply("Anak anak bermain, hati HATI.", &mut log);
        assert_eq!(fixed, "Anak-Anak bermain, hati-hati.");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_requires_whole_words_and_single_space() {
        let mut log = ChangeLog::new();
        let pass = Reduplication::new();

        assert_eq!(pass.apply("rumah rumahnya", &mut log), "rumah rumahnya");
        assert_eq!(pass.apply("serumah rumah", &mut log), "serumah rumah");
        assert_eq!(pass.apply("kupu  kupu", &mut log), "kupu  kupu");
        assert_eq!(pass.apply("2kupu kupu", &mut log), "2kupu kupu");
        assert!(log.is_empty());
    }

    #[test]
    fn test_triple_repetition_pairs_first_two() {
        let mut log = ChangeLog::new();
        let fixed = Reduplication::new().apply("lagi lagi lagi", &mut log);
        assert_eq!(fixed, "lagi-lagi lagi");
    }

    #[test]
    fn test_preserves_surrounding_text() {
        let mut log = ChangeLog::new();
        let fixed = Reduplication::new().apply("Ada (kura kura) di café.", &mut log);
        assert_eq!(fixed, "Ada (kura-kura) di café.");
    }
}
