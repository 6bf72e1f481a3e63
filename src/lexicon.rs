//! Lexicon construction and persistence.
//!
//! The lexicon is the set of surface forms considered correctly spelled. It is
//! built once from three inputs:
//!
//! - root words from a [`source::RootSource`], expanded through the
//!   morphological [`FormGenerator`](crate::morphology::generator::FormGenerator),
//! - hardcoded [`gazetteer`] lists (places, pronouns, particles), split into
//!   single tokens,
//! - a small set of extra domain terms added verbatim.
//!
//! Only entries made of lowercase ASCII letters and hyphens survive. The
//! result is persisted as one `<term> 1` line per entry so later runs can skip
//! generation entirely.

pub mod builder;
pub mod dictionary;
pub mod gazetteer;
pub mod source;

pub use builder::*;
pub use dictionary::*;
pub use source::*;
