//! Shared utility modules used across Ejaan components.

pub mod levenshtein;
pub mod text;
