//! Entity-aware capitalization.

use std::sync::Arc;

use lazy_static::lazy_static;
use log::warn;
use regex::{Captures, Regex};

use crate::entity::{EntityRecognizer, EntitySpan};
use crate::pipeline::CorrectionPass;
use crate::pipeline::change_log::{ChangeKind, ChangeLog};
use crate::util::text::{char_boundaries, starts_uppercase, title_case};

lazy_static! {
    static ref SENTENCE_START: Regex = Regex::new(r"(^|[.!?]\s+)([a-z])").unwrap();
}

/// Title-cases lowercase entity names, then capitalizes sentence starts.
///
/// Spans labelled PERSON, ORGANIZATION, LOCATION or GPE scoring above the
/// threshold are title-cased unless they already start uppercase. Where
/// spans overlap, the one starting last wins. When the recognizer fails the
/// whole pass, sentence capitalization included, is skipped.
pub struct EntityCapitalization {
    recognizer: Arc<dyn EntityRecognizer>,
    threshold: f32,
}

/// A title-cased span ready to be spliced in.
struct Replacement {
    span: EntitySpan,
    text: String,
}

impl EntityCapitalization {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, threshold: f32) -> Self {
        EntityCapitalization {
            recognizer,
            threshold,
        }
    }

    /// Non-overlapping replacements in descending start order.
    fn replacements(
        &self,
        text: &str,
        boundaries: &[usize],
        mut spans: Vec<EntitySpan>,
        log: &mut ChangeLog,
    ) -> Vec<Replacement> {
        let char_len = boundaries.len() - 1;
        spans.sort_by(|a, b| b.start.cmp(&a.start));

        let mut accepted: Vec<Replacement> = Vec::new();
        for mut span in spans {
            if !span.label.is_capitalized() || span.score <= self.threshold {
                continue;
            }
            span.end = span.end.min(char_len);
            if span.is_empty() || accepted.iter().any(|r| r.span.overlaps(&span)) {
                continue;
            }

            let word = &text[boundaries[span.start]..boundaries[span.end]];
            if starts_uppercase(word) {
                continue;
            }
            let fixed = title_case(word);
            log.record(ChangeKind::Capitalization(span.label.clone()), word, &fixed);
            accepted.push(Replacement { span, text: fixed });
        }

        accepted
    }
}

impl CorrectionPass for EntityCapitalization {
    fn apply(&self, text: &str, log: &mut ChangeLog) -> String {
        let spans = match self.recognizer.recognize(text) {
            Ok(spans) => spans,
            Err(e) => {
                warn!(
                    "Entity recognizer {} failed, skipping capitalization: {e}",
                    self.recognizer.name()
                );
                return text.to_string();
            }
        };

        let boundaries = char_boundaries(text);
        let mut replacements = self.replacements(text, &boundaries, spans, log);
        replacements.reverse();

        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;
        for replacement in &replacements {
            output.push_str(&text[boundaries[last_end]..boundaries[replacement.span.start]]);
            output.push_str(&replacement.text);
            last_end = replacement.span.end;
        }
        output.push_str(&text[boundaries[last_end]..]);

        SENTENCE_START
            .replace_all(&output, |caps: &Captures| {
                format!("{}{}", &caps[1], caps[2].to_uppercase())
            })
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "capitalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityLabel, GazetteerRecognizer, NoopRecognizer};
    use crate::error::{EjaanError, Result};

    struct FixedRecognizer(Vec<EntitySpan>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>> {
            Err(EjaanError::entity("model unavailable"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn apply(recognizer: Arc<dyn EntityRecognizer>, text: &str) -> (String, ChangeLog) {
        let mut log = ChangeLog::new();
        let fixed = EntityCapitalization::new(recognizer, 0.6).apply(text, &mut log);
        (fixed, log)
    }

    #[test]
    fn test_location_is_capitalized() {
        let spans = vec![EntitySpan::new(8, 15, EntityLabel::Location, 0.7)];
        let (fixed, log) = apply(Arc::new(FixedRecognizer(spans)), "saya ke jakarta");

        assert_eq!(fixed, "Saya ke Jakarta");
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].kind.to_string(), "Capitalization (LOCATION)");
        assert_eq!(log.records()[0].original, "jakarta");
        assert_eq!(log.records()[0].corrected, "Jakarta");
    }

    #[test]
    fn test_threshold_label_and_existing_capitals() {
        let spans = vec![
            EntitySpan::new(0, 4, EntityLabel::Person, 0.95),
            EntitySpan::new(8, 15, EntityLabel::Location, 0.6),
            EntitySpan::new(16, 21, EntityLabel::Other("DATE".to_string()), 0.99),
            EntitySpan::new(22, 26, EntityLabel::Organization, 0.9),
        ];
        let (fixed, log) = apply(
            Arc::new(FixedRecognizer(spans)),
            "joko di bandung senin BUMN",
        );

        assert_eq!(fixed, "Joko di bandung senin BUMN");
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].kind.to_string(), "Capitalization (PERSON)");
    }

    #[test]
    fn test_overlapping_spans_keep_the_later_one() {
        let spans = vec![
            EntitySpan::new(5, 15, EntityLabel::Location, 0.9),
            EntitySpan::new(10, 15, EntityLabel::Location, 0.9),
        ];
        let (fixed, log) = apply(Arc::new(FixedRecognizer(spans)), "dari jawa barat");
        assert_eq!(fixed, "Dari jawa Barat");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_empty_spans_are_ignored() {
        let spans = vec![EntitySpan::new(8, 8, EntityLabel::Location, 0.9)];
        let (fixed, log) = apply(Arc::new(FixedRecognizer(spans)), "saya ke medan");
        assert_eq!(fixed, "Saya ke medan");
        assert!(log.is_empty());
    }

    #[test]
    fn test_out_of_range_spans_are_clamped() {
        let spans = vec![
            EntitySpan::new(8, 40, EntityLabel::Location, 0.9),
            EntitySpan::new(50, 60, EntityLabel::Location, 0.9),
        ];
        let (fixed, _) = apply(Arc::new(FixedRecognizer(spans)), "saya ke medan");
        assert_eq!(fixed, "Saya ke Medan");
    }

    #[test]
    fn test_with_gazetteer_recognizer() {
        let recognizer = GazetteerRecognizer::places().unwrap();
        let (fixed, log) = apply(Arc::new(recognizer), "kami pindah dari jawa barat ke bali.");
        assert_eq!(fixed, "Kami pindah dari Jawa Barat ke Bali.");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_gazetteer_leaves_prepositions_and_common_words_alone() {
        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(GazetteerRecognizer::places().unwrap());

        let (fixed, log) = apply(Arc::clone(&recognizer), "saya tinggal di yogyakarta");
        assert_eq!(fixed, "Saya tinggal di Yogyakarta");
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].original, "yogyakarta");

        let (fixed, log) = apply(Arc::clone(&recognizer), "kepala saya kena batu");
        assert_eq!(fixed, "Kepala saya kena batu");
        assert!(log.is_empty());

        let (fixed, log) = apply(recognizer, "nasib saya malang");
        assert_eq!(fixed, "Nasib saya malang");
        assert!(log.is_empty());
    }

    #[test]
    fn test_sentence_starts_are_capitalized() {
        let (fixed, log) = apply(Arc::new(NoopRecognizer), "halo. apa kabar? baik!  ya");
        assert_eq!(fixed, "Halo. Apa kabar? Baik!  Ya");
        assert!(log.is_empty());
    }

    #[test]
    fn test_recognizer_failure_skips_pass() {
        let (fixed, log) = apply(Arc::new(FailingRecognizer), "halo. apa kabar");
        assert_eq!(fixed, "halo. apa kabar");
        assert!(log.is_empty());
    }
}
