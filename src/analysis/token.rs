//! Token type.
//!
//! ```
//! use ejaan::analysis::token::Token;
//!
//! let token = Token::with_offsets("rumah,", 2, 10, 16);
//! assert!(token.overlaps(12, 20));
//! assert!(!token.overlaps(12, 12));
//! ```

use serde::{Deserialize, Serialize};

/// A run of text with its position in the original input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text (exclusive)
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position and character offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Whether the token's range `[start_offset, end_offset)` shares a
    /// character with `[start, end)`. An empty range shares nothing.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        start < end && self.start_offset < end && start < self.end_offset
    }
}
