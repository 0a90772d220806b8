//! Errors raised while building the interpreter
//!
//! Interpretation itself never fails; these only surface while an
//! interpreter is being built (lexicon loading, fallback checks, pattern
//! compilation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Lexicon file not found at {path}: {message}")]
    LexiconNotFound { path: String, message: String },

    #[error("Failed to parse lexicon: {0}")]
    LexiconParse(String),

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Invalid fallback {field}: {message}")]
    InvalidFallback {
        field: &'static str,
        message: &'static str,
    },

    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
