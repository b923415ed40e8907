//! Pieces a request-handling surface puts in front of and behind the engine.
//!
//! The engine analyzes any text it is given. Length limits belong to the
//! caller, so each surface builds a [`RequestGate`] from `GatewayConfig` and
//! renders results through a [`ResultDigest`] sized for its medium.

use serde::Serialize;
use tracing::debug;
use truthlens_core::config::GatewayConfig;
use truthlens_core::constants::{CHAT_FINDINGS_LIMIT, CHAT_RECOMMENDATIONS_LIMIT};
use truthlens_core::errors::{EngineError, TruthLensErrorCode, ValidationError};
use truthlens_core::models::{AnalysisRequest, AnalysisResult, Verdict};
use truthlens_core::traits::CredibilityAnalyzer;

/// Character-length limits applied before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestGate {
    min_len: usize,
    max_len: Option<usize>,
}

impl RequestGate {
    pub fn new(min_len: usize, max_len: Option<usize>) -> Self {
        Self { min_len, max_len }
    }

    /// Request-handling profile: 10 to 50,000 characters by default.
    pub fn api(config: &GatewayConfig) -> Self {
        Self::new(
            config.effective_api_min_text_len(),
            Some(config.effective_api_max_text_len()),
        )
    }

    /// Conversational profile: at least 20 characters by default, no maximum.
    pub fn chat(config: &GatewayConfig) -> Self {
        Self::new(config.effective_chat_min_text_len(), None)
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Reject a request whose text is empty or outside the length limits.
    pub fn check(&self, request: &AnalysisRequest) -> Result<(), ValidationError> {
        if request.text.is_empty() {
            return Err(ValidationError::MissingText);
        }
        let actual = request.text.chars().count();
        if actual < self.min_len {
            return Err(ValidationError::TextTooShort {
                min: self.min_len,
                actual,
            });
        }
        if let Some(max) = self.max_len {
            if actual > max {
                return Err(ValidationError::TextTooLong { max, actual });
            }
        }
        Ok(())
    }

    /// Check the request, then hand it to `analyzer`.
    pub fn analyze(
        &self,
        analyzer: &dyn CredibilityAnalyzer,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, ServiceError> {
        if let Err(e) = self.check(request) {
            debug!(error = %e, "request rejected by gate");
            return Err(e.into());
        }
        Ok(analyzer.analyze(request)?)
    }
}

/// Everything a surface can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl TruthLensErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Engine(e) => e.error_code(),
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            Self::Validation(e) => e.status_code(),
            Self::Engine(e) => e.status_code(),
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(e) => e.is_retryable(),
            Self::Engine(e) => e.is_retryable(),
        }
    }
}

/// Condensed view of a result for space-constrained surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultDigest {
    pub credibility_score: u8,
    pub verdict: Verdict,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ResultDigest {
    pub fn from_result(
        result: &AnalysisResult,
        findings_limit: usize,
        recommendations_limit: usize,
    ) -> Self {
        Self {
            credibility_score: result.credibility_score(),
            verdict: result.verdict(),
            key_findings: result
                .key_findings()
                .iter()
                .take(findings_limit)
                .cloned()
                .collect(),
            recommendations: result
                .recommendations()
                .iter()
                .take(recommendations_limit)
                .cloned()
                .collect(),
        }
    }

    /// Digest sized for a chat reply: three findings, two recommendations.
    pub fn chat(result: &AnalysisResult) -> Self {
        Self::from_result(result, CHAT_FINDINGS_LIMIT, CHAT_RECOMMENDATIONS_LIMIT)
    }
}
