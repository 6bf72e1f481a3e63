//! Whitespace tokenizer implementation.

use crate::analysis::token::Token;

/// A tokenizer that emits every maximal run of non-whitespace characters.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Collect the tokens of `text` eagerly.
    pub fn split(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;

        for (offset, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        std::mem::take(&mut current),
                        position,
                        start,
                        offset,
                    ));
                }
            } else {
                if current.is_empty() {
                    start = offset;
                }
                current.push(c);
            }
        }

        if !current.is_empty() {
            let end = start + current.chars().count();
            let position = tokens.len();
            tokens.push(Token::with_offsets(current, position, start, end));
        }

        tokens
    }
}
