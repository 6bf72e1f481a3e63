//! Tokenizers.
//!
//! ```
//! use ejaan::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let tokens = WhitespaceTokenizer::new().split("Saya  makan nasi.");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].start_offset, 6);
//! ```

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
