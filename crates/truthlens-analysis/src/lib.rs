//! # truthlens-analysis
//!
//! The credibility scoring engine. Text is normalized, scanned by three
//! independent lexical detectors (sentiment, bias, manipulation), its source
//! URL is resolved against the reputation registry, and the signals are
//! folded into a 0-100 score, a verdict, and explanatory text.
//!
//! [`AnalysisEngine`] is the entry point; [`RequestGate`] and
//! [`ResultDigest`] are the pieces request-handling surfaces put around it.

pub mod bias;
pub mod engine;
pub mod gateway;
pub mod lexicon;
pub mod manipulation;
pub mod preprocess;
pub mod report;
pub mod scoring;
pub mod sentiment;
pub mod sources;

pub use engine::AnalysisEngine;
pub use gateway::{RequestGate, ResultDigest, ServiceError};
pub use lexicon::Lexicon;
pub use sources::SourceRegistry;
