use crate::errors::EngineError;
use crate::models::{AnalysisRequest, AnalysisResult};

/// Scores a text for credibility.
///
/// The heuristic engine is the current implementation; a learned model can
/// be put behind the same contract without touching callers. Implementations
/// must be pure functions of the request and their immutable configuration.
pub trait CredibilityAnalyzer: Send + Sync {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EngineError>;
}
