//! Approximate matching against the lexicon.
//!
//! [`SymmetricDeleteIndex`] answers exact and bounded-edit-distance lookups
//! over a [`Lexicon`](crate::lexicon::Lexicon). [`SpellingEngine`] owns the
//! index and takes care of loading or building the lexicon it is built from.
//! Both are immutable after construction and safe to share across threads.

pub mod engine;
pub mod index;
pub mod suggest;

pub use engine::SpellingEngine;
pub use index::SymmetricDeleteIndex;
pub use suggest::Suggestion;
