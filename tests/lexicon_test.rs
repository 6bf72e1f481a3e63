use ejaan::config::{IndexConfig, NormalizerConfig};
use ejaan::error::Result;
use ejaan::lexicon::{Lexicon, LexiconBuilder, RootSource};
use ejaan::morphology::generator::FormGenerator;
use ejaan::pipeline::TextNormalizer;
use ejaan::spelling::SpellingEngine;
use ejaan::util::levenshtein::levenshtein_distance;
use tempfile::TempDir;

const ROOTS: [&str; 8] = [
    "makan", "baca", "pukul", "tulis", "rasa", "ajar", "suka", "buku",
];

fn inline_config(dir: &TempDir) -> NormalizerConfig {
    NormalizerConfig {
        lexicon_path: dir.path().join("data").join("full_dictionary.txt"),
        root_source: RootSource::Inline {
            roots: ROOTS.iter().map(|root| root.to_string()).collect(),
        },
        ..NormalizerConfig::default()
    }
}

#[test]
fn test_generated_forms_of_makan() {
    let forms = FormGenerator::generate("makan");

    for expected in [
        "makan",
        "memakan",
        "pemakan",
        "dimakan",
        "termakan",
        "makanan",
        "memakankan",
        "dimakani",
        "makanannya",
        "dimakanlah",
        "semakanpun",
    ] {
        assert!(forms.contains(expected), "missing {expected}");
    }
    assert!(!forms.contains("menmakan"));
}

#[test]
fn test_lexicon_survives_a_save_and_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("lexicon.txt");

    let lexicon = LexiconBuilder::with_builtin_lists().roots(ROOTS).build();
    lexicon.save_to_file(&path)?;
    let loaded = Lexicon::load_from_file(&path)?;

    assert_eq!(loaded.len(), lexicon.len());
    for (term, weight) in lexicon.iter() {
        assert_eq!(loaded.frequency(term), weight);
    }
    assert!(loaded.contains("membaca"));
    assert!(loaded.contains("pengajar"));
    assert!(loaded.contains("menulis"));

    Ok(())
}

#[test]
fn test_every_persisted_term_passes_the_filter() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("lexicon.txt");

    LexiconBuilder::with_builtin_lists()
        .roots(["makan", "abc1"])
        .extra_terms(["rp5000", "o'clock"])
        .build()
        .save_to_file(&path)?;

    let loaded = Lexicon::load_from_file(&path)?;
    assert!(loaded.iter().all(|(term, _)| Lexicon::is_valid_term(term)));
    assert!(!loaded.contains("rp5000"));
    assert!(!loaded.contains("mengabc1"));

    Ok(())
}

#[test]
fn test_fuzzy_lookup_matches_brute_force() {
    let lexicon = LexiconBuilder::with_builtin_lists().roots(ROOTS).build();
    let engine = SpellingEngine::from_lexicon(lexicon.clone(), IndexConfig::default());

    for query in ["memkan", "membca", "pemukl", "tulisn", "jakrta", "belajr", "xyz"] {
        let found = engine.lookup_closest(query, 2);

        let mut expected: Vec<&str> = lexicon
            .iter()
            .map(|(term, _)| term)
            .filter(|term| levenshtein_distance(query, term) <= 2)
            .collect();
        expected.sort_unstable();
        let mut actual: Vec<&str> = found.iter().map(|s| s.term.as_str()).collect();
        actual.sort_unstable();
        assert_eq!(actual, expected, "query {query}");

        assert!(found.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
    }
}

#[test]
fn test_exact_lookup_is_distance_zero() {
    let lexicon = LexiconBuilder::new().roots(["baca"]).build();
    let engine = SpellingEngine::from_lexicon(lexicon, IndexConfig::default());

    assert!(engine.lookup_exact("membaca"));
    assert!(engine.lookup_exact("MEMBACA"));
    assert!(!engine.lookup_exact("membca"));

    let found = engine.lookup_closest("membaca", 2);
    assert_eq!(found[0].term, "membaca");
    assert_eq!(found[0].distance, 0);
}

#[test]
fn test_normalizer_from_config_builds_missing_lexicon() -> Result<()> {
    let dir = TempDir::new()?;
    let config = inline_config(&dir);

    let normalizer = TextNormalizer::from_config(&config)?;
    assert!(config.lexicon_path.exists());

    let correction = normalizer.process("saya suka membca buku di bandng");
    assert!(correction.corrected.starts_with("Saya suka membaca"));
    assert!(correction.corrected.ends_with("Bandung"));

    // a second start reuses the persisted file
    let reopened = SpellingEngine::open(&config)?;
    assert!(reopened.lookup_exact("membaca"));

    Ok(())
}

#[test]
fn test_rebuild_without_roots_keeps_builtin_lists() -> Result<()> {
    let dir = TempDir::new()?;
    let config = NormalizerConfig {
        root_source: RootSource::None,
        ..inline_config(&dir)
    };

    let engine = SpellingEngine::rebuild(&config)?;
    assert!(engine.lookup_exact("surabaya"));
    assert!(engine.lookup_exact("rupiah"));
    assert!(!engine.lookup_exact("membaca"));
    assert_eq!(
        Lexicon::load_from_file(&config.lexicon_path)?.len(),
        engine.len()
    );

    Ok(())
}
