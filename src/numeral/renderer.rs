//! Numeral renderer trait.

use crate::error::Result;

/// Converts an integer into words for a locale.
///
/// Unsupported locales and numbers out of range are reported as errors; the
/// caller falls back to other rewrites.
pub trait NumeralRenderer: Send + Sync {
    /// Spell out `n` in `locale`.
    fn to_words(&self, n: u64, locale: &str) -> Result<String>;

    /// Get the name of this renderer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
