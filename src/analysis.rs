//! Tokenization with character offsets.
//!
//! The correction passes rewrite text token by token while copying every
//! character between tokens verbatim, so tokens carry their offsets into
//! the original text, counted in characters.

pub mod token;
pub mod tokenizer;
