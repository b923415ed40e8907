//! Seams between the engine and its consumers.

pub mod analyzer;
pub mod source_catalog;

pub use analyzer::CredibilityAnalyzer;
pub use source_catalog::SourceCatalog;
