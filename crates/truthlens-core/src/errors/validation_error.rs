//! Request validation errors raised by the calling layer.

use super::error_code::{self, TruthLensErrorCode};

/// Input rejected before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Text is required")]
    MissingText,

    #[error("Text too short: {actual} characters, minimum is {min}")]
    TextTooShort { min: usize, actual: usize },

    #[error("Text too long: {actual} characters, maximum is {max}")]
    TextTooLong { max: usize, actual: usize },
}

impl TruthLensErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }

    fn status_code(&self) -> u16 {
        422
    }
}
