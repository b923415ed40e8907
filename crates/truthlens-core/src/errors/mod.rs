//! Error handling for TruthLens.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod lexicon_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::TruthLensErrorCode;
pub use lexicon_error::LexiconError;
pub use validation_error::ValidationError;
