//! Error types for the Ejaan library.
//!
//! All fallible operations in Ejaan return [`Result`], whose error side is the
//! [`EjaanError`] enum. The correction pipeline itself never fails: errors
//! raised by external collaborators (entity recognizers, numeral renderers,
//! root-word sources) are logged and turned into degraded behaviour by the
//! caller.
//!
//! # Examples
//!
//! ```
//! use ejaan::error::{EjaanError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EjaanError::lexicon("Lexicon file is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Ejaan operations.
#[derive(Error, Debug)]
pub enum EjaanError {
    /// I/O errors (lexicon files, input documents, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon construction or persistence errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Entity recognizer errors
    #[error("Entity recognizer error: {0}")]
    Entity(String),

    /// Numeral rendering errors (unsupported locale, out of range, etc.)
    #[error("Numeral error: {0}")]
    Numeral(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote fetch errors (root-word downloads)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with EjaanError.
pub type Result<T> = std::result::Result<T, EjaanError>;

impl EjaanError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        EjaanError::Lexicon(msg.into())
    }

    /// Create a new entity recognizer error.
    pub fn entity<S: Into<String>>(msg: S) -> Self {
        EjaanError::Entity(msg.into())
    }

    /// Create a new numeral error.
    pub fn numeral<S: Into<String>>(msg: S) -> Self {
        EjaanError::Numeral(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EjaanError::Config(msg.into())
    }

    /// Create a new fetch error.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        EjaanError::Fetch(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EjaanError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        EjaanError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
