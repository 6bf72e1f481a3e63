//! Lexicon builder: roots + generated forms + gazetteers + extra terms.

use ahash::AHashSet;
use log::{info, warn};
use rayon::prelude::*;

use crate::lexicon::dictionary::Lexicon;
use crate::lexicon::gazetteer;
use crate::lexicon::source::RootSource;
use crate::morphology::generator::FormGenerator;

/// Builds a [`Lexicon`] from root words and fixed word lists.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    roots: Vec<String>,
    gazetteers: Vec<Vec<String>>,
    extra_terms: AHashSet<String>,
}

impl LexiconBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder preloaded with the hardcoded gazetteers and extra terms.
    pub fn with_builtin_lists() -> Self {
        let mut builder = Self::new();
        for list in gazetteer::all() {
            builder = builder.gazetteer(list.iter().copied());
        }
        builder.extra_terms(gazetteer::EXTRA_TERMS.iter().copied())
    }

    /// Add root words to expand.
    pub fn roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Add roots from `source`. An unreachable source contributes nothing.
    pub fn roots_from(self, source: &RootSource) -> Self {
        match source.fetch() {
            Ok(roots) => {
                info!("Loaded {} root words", roots.len());
                self.roots(roots)
            }
            Err(e) => {
                warn!("Root word source unavailable, continuing without roots: {e}");
                self
            }
        }
    }

    /// Add a gazetteer; each entry is split on whitespace into tokens.
    pub fn gazetteer<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gazetteers
            .push(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Add terms that enter the lexicon verbatim.
    pub fn extra_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Generate, merge and filter every form into a lexicon with uniform weight 1.
    pub fn build(&self) -> Lexicon {
        info!("Generating forms for {} root words", self.roots.len());

        let mut forms: AHashSet<String> = self
            .roots
            .par_iter()
            .filter(|root| !root.is_empty())
            .fold(AHashSet::new, |mut acc, root| {
                acc.extend(FormGenerator::generate(root));
                acc
            })
            .reduce(AHashSet::new, |mut a, mut b| {
                if a.len() < b.len() {
                    std::mem::swap(&mut a, &mut b);
                }
                a.extend(b);
                a
            });

        for entry in self.gazetteers.iter().flatten() {
            forms.extend(entry.split_whitespace().map(str::to_lowercase));
        }
        forms.extend(self.extra_terms.iter().cloned());

        let total = forms.len();
        let lexicon = Lexicon::from_terms(forms.iter().filter(|f| Lexicon::is_valid_term(f)));
        info!(
            "Built lexicon with {} forms ({} rejected by the character filter)",
            lexicon.len(),
            total - lexicon.len()
        );

        lexicon
    }
}

/// Build a lexicon from `roots`, `gazetteers` and `extra_terms`.
pub fn build<R, G, E>(roots: R, gazetteers: G, extra_terms: E) -> Lexicon
where
    R: IntoIterator,
    R::Item: Into<String>,
    G: IntoIterator,
    G::Item: IntoIterator,
    <G::Item as IntoIterator>::Item: Into<String>,
    E: IntoIterator,
    E::Item: Into<String>,
{
    let mut builder = LexiconBuilder::new().roots(roots);
    for gazetteer in gazetteers {
        builder = builder.gazetteer(gazetteer);
    }
    builder.extra_terms(extra_terms).build()
}
