//! Shared spelling engine: a lexicon plus its approximate match index.

use std::path::Path;

use log::{info, warn};

use crate::config::{IndexConfig, NormalizerConfig};
use crate::error::Result;
use crate::lexicon::{Lexicon, LexiconBuilder, RootSource};
use crate::spelling::index::SymmetricDeleteIndex;
use crate::spelling::suggest::Suggestion;

/// Immutable lexicon and index, built once and shared by every correction call.
#[derive(Debug, Clone)]
pub struct SpellingEngine {
    index: SymmetricDeleteIndex,
}

impl SpellingEngine {
    /// Index an already available lexicon.
    pub fn from_lexicon(lexicon: Lexicon, config: IndexConfig) -> Self {
        SpellingEngine {
            index: SymmetricDeleteIndex::new(lexicon, config),
        }
    }

    /// Load the persisted lexicon named by `config`, building and saving it
    /// first when the file does not exist. An empty or unreadable cache file
    /// is replaced the same way.
    pub fn open(config: &NormalizerConfig) -> Result<Self> {
        let lexicon = if config.lexicon_path.exists() {
            info!("Loading lexicon from {}", config.lexicon_path.display());
            match Lexicon::load_from_file(&config.lexicon_path) {
                Ok(lexicon) => lexicon,
                Err(e) => {
                    warn!(
                        "Cached lexicon at {} is unusable, rebuilding: {e}",
                        config.lexicon_path.display()
                    );
                    build_and_persist(&config.root_source, &config.lexicon_path)
                }
            }
        } else {
            info!(
                "No lexicon at {}, building one",
                config.lexicon_path.display()
            );
            build_and_persist(&config.root_source, &config.lexicon_path)
        };

        Ok(Self::from_lexicon(lexicon, config.index))
    }

    /// Regenerate the lexicon from `config`, overwrite the persisted copy and index it.
    pub fn rebuild(config: &NormalizerConfig) -> Result<Self> {
        let lexicon = LexiconBuilder::with_builtin_lists()
            .roots_from(&config.root_source)
            .build();
        lexicon.save_to_file(&config.lexicon_path)?;
        info!(
            "Saved {} forms to {}",
            lexicon.len(),
            config.lexicon_path.display()
        );

        Ok(Self::from_lexicon(lexicon, config.index))
    }

    /// The underlying index.
    pub fn index(&self) -> &SymmetricDeleteIndex {
        &self.index
    }

    /// Number of known surface forms.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the engine knows no forms at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Largest edit distance the engine answers.
    pub fn max_distance(&self) -> usize {
        self.index.config().max_distance
    }

    /// Whether `term` is a known surface form.
    pub fn lookup_exact(&self, term: &str) -> bool {
        self.index.lookup_exact(term)
    }

    /// Known forms within `max_distance` edits of `term`, closest first.
    pub fn lookup_closest(&self, term: &str, max_distance: usize) -> Vec<Suggestion> {
        self.index.lookup_closest(term, max_distance)
    }
}

/// Build a fresh lexicon. A failed save only costs a rebuild on the next start.
fn build_and_persist(source: &RootSource, path: &Path) -> Lexicon {
    let lexicon = LexiconBuilder::with_builtin_lists().roots_from(source).build();
    match lexicon.save_to_file(path) {
        Ok(()) => info!("Saved {} forms to {}", lexicon.len(), path.display()),
        Err(e) => warn!("Could not persist lexicon to {}: {e}", path.display()),
    }
    lexicon
}
