//! The lexicon: a weighted set of valid surface forms.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;
use log::warn;

use crate::error::{EjaanError, Result};

/// A set of correctly spelled surface forms, each carrying a frequency weight.
///
/// Forms are stored lowercased. Membership is the only correctness criterion;
/// the weight only orders fuzzy candidates that are equally distant.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: AHashMap<String, u32>,
}

impl Lexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            words: AHashMap::new(),
        }
    }

    /// Create a lexicon from terms, each with weight 1.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for term in terms {
            lexicon.add_word(term.as_ref(), 1);
        }
        lexicon
    }

    /// Whether `term` may appear in a persisted lexicon: lowercase ASCII
    /// letters and hyphens only.
    pub fn is_valid_term(term: &str) -> bool {
        !term.is_empty() && term.chars().all(|c| c.is_ascii_lowercase() || c == '-')
    }

    /// Add a word with the given frequency, replacing any previous weight.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Check if a word exists in the lexicon (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word, 0 when absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon holds no forms.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(term, frequency)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.words.iter().map(|(word, freq)| (word.as_str(), *freq))
    }

    /// Consume the lexicon into `(term, frequency)` pairs sorted by term.
    pub fn into_sorted_entries(self) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self.words.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Load a lexicon from a file with one `<term> <weight>` entry per line.
    ///
    /// Blank lines are skipped; malformed lines are skipped with a warning.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut lexicon = Lexicon::new();
        let reader = BufReader::new(File::open(path)?);

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next().map(str::parse::<u32>)) {
                (Some(term), Some(Ok(frequency))) => lexicon.add_word(term, frequency),
                _ => warn!(
                    "Skipping malformed lexicon entry at {}:{}: {line:?}",
                    path.display(),
                    line_num + 1
                ),
            }
        }

        if lexicon.is_empty() {
            return Err(EjaanError::lexicon(format!(
                "Lexicon file {} contains no entries",
                path.display()
            )));
        }

        Ok(lexicon)
    }

    /// Save the lexicon as sorted `<term> <weight>` lines, creating the
    /// parent directory when needed.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut writer = BufWriter::new(File::create(path)?);
        for (word, frequency) in entries {
            writeln!(writer, "{word} {frequency}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_lexicon_basic_operations() {
        let mut lexicon = Lexicon::new();

        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("makan"));
        assert_eq!(lexicon.frequency("makan"), 0);

        lexicon.add_word("makan", 1);
        assert!(lexicon.contains("makan"));
        assert_eq!(lexicon.frequency("makan"), 1);
        assert_eq!(lexicon.len(), 1);

        lexicon.add_word("makan", 1);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_lexicon_case_insensitive() {
        let lexicon = Lexicon::from_terms(["Jakarta"]);
        assert!(lexicon.contains("jakarta"));
        assert!(lexicon.contains("JAKARTA"));
        assert_eq!(lexicon.iter().next(), Some(("jakarta", 1)));
    }

    #[test]
    fn test_into_sorted_entries() {
        let lexicon = Lexicon::from_terms(["nasi", "makan", "kupu-kupu"]);
        let entries = lexicon.into_sorted_entries();
        assert_eq!(
            entries,
            vec![
                ("kupu-kupu".to_string(), 1),
                ("makan".to_string(), 1),
                ("nasi".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_is_valid_term() {
        assert!(Lexicon::is_valid_term("kupu-kupu"));
        assert!(Lexicon::is_valid_term("makan"));
        assert!(!Lexicon::is_valid_term(""));
        assert!(!Lexicon::is_valid_term("Makan"));
        assert!(!Lexicon::is_valid_term("rp5000"));
        assert!(!Lexicon::is_valid_term("o'clock"));
        assert!(!Lexicon::is_valid_term("café"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("lexicon.txt");

        let lexicon = Lexicon::from_terms(["nasi", "makan", "kupu-kupu"]);
        lexicon.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "kupu-kupu 1\nmakan 1\nnasi 1\n");

        let loaded = Lexicon::load_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains("kupu-kupu"));
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "makan 1").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "rusak").unwrap();
        writeln!(temp_file, "nasi x").unwrap();
        writeln!(temp_file, "minum 3").unwrap();
        temp_file.flush().unwrap();

        let lexicon = Lexicon::load_from_file(temp_file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.frequency("minum"), 3);
        assert!(!lexicon.contains("rusak"));
    }

    #[test]
    fn test_load_missing_or_empty_file() {
        assert!(matches!(
            Lexicon::load_from_file("/nonexistent/lexicon.txt"),
            Err(EjaanError::Io(_))
        ));

        let temp_file = NamedTempFile::new().unwrap();
        assert!(matches!(
            Lexicon::load_from_file(temp_file.path()),
            Err(EjaanError::Lexicon(_))
        ));
    }
}
