//! Lexicon compilation errors.

use super::error_code::{self, TruthLensErrorCode};

/// Errors raised while compiling word sets and clickbait patterns.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Invalid clickbait pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Word {word:?} is listed as both positive and negative")]
    OverlappingPolarity { word: String },

    #[error("Word set {set} is empty")]
    EmptyWordSet { set: &'static str },
}

impl TruthLensErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        error_code::LEXICON_ERROR
    }
}
