//! Named-entity recognition capability.
//!
//! The correction pipeline consumes entity spans for two things: protecting
//! person and organization names from spelling correction, and restoring
//! the capitalization of names. Recognition itself is pluggable through
//! [`EntityRecognizer`]; [`GazetteerRecognizer`] is a built-in recognizer for
//! Indonesian place names and [`NoopRecognizer`] finds nothing.

pub mod gazetteer;
pub mod recognizer;

pub use gazetteer::GazetteerRecognizer;
pub use recognizer::{EntityLabel, EntityRecognizer, EntitySpan, NoopRecognizer};
