//! # truthlens-core
//!
//! Foundation crate for the TruthLens credibility engine.
//! Defines the category enums, request/result models, errors, config,
//! tracing setup, and the analyzer trait every consumer codes against.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::TruthLensConfig;
pub use errors::{EngineError, ValidationError};
pub use models::{
    AnalysisRequest, AnalysisResult, BiasLevel, BiasType, ManipulativeTechnique, Sentiment,
    Verdict,
};
pub use traits::CredibilityAnalyzer;
