//! Engine lifecycle errors.

use super::error_code::{self, TruthLensErrorCode};
use super::{ConfigError, LexiconError};

/// Errors surfaced by the analysis engine.
///
/// `analyze` only ever returns `NotReady`; the other variants come out of
/// `initialize` and leave the engine uninitialized.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Engine not initialized: call initialize() before {operation}")]
    NotReady { operation: &'static str },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

impl TruthLensErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotReady { .. } => error_code::ENGINE_NOT_READY,
            Self::Config(e) => e.error_code(),
            Self::Lexicon(e) => e.error_code(),
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            Self::NotReady { .. } => 503,
            Self::Config(_) | Self::Lexicon(_) => 500,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}
