//! The assembled, immutable analysis result.

use serde::Serialize;

use super::{
    BiasLevel, BiasSignal, BiasType, ManipulationSignal, ManipulativeTechnique, Sentiment,
    SentimentSignal, SourceAssessment, Verdict,
};

/// Everything the engine computed for one call, handed to
/// [`AnalysisResult::new`] for assembly.
#[derive(Debug, Clone)]
pub struct ResultParts {
    pub credibility_score: u8,
    pub sentiment: SentimentSignal,
    pub bias: BiasSignal,
    pub manipulation: ManipulationSignal,
    pub source: SourceAssessment,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub language: String,
    pub processing_time_ms: u64,
}

/// Credibility analysis of one text.
///
/// Fields are read-only; the verdict and bias level are derived from their
/// scores at construction, so they can never disagree. Serialize-only: the
/// only way to build one is [`AnalysisResult::new`].
///
/// ```compile_fail
/// let result: truthlens_core::models::AnalysisResult =
///     serde_json::from_str(r#"{"credibility_score": 5, "verdict": "credible"}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    credibility_score: u8,
    verdict: Verdict,
    sentiment: Sentiment,
    sentiment_score: f64,
    bias_level: BiasLevel,
    bias_score: f64,
    bias_types: Vec<BiasType>,
    manipulative_techniques: Vec<ManipulativeTechnique>,
    manipulation_score: f64,
    source_credibility: Option<f64>,
    source_name: Option<String>,
    key_findings: Vec<String>,
    recommendations: Vec<String>,
    language: String,
    processing_time_ms: u64,
}

impl AnalysisResult {
    /// Assemble a result, clamping every score into its documented range.
    pub fn new(parts: ResultParts) -> Self {
        let credibility_score = parts.credibility_score.min(100);
        let bias_score = parts.bias.score.clamp(0.0, 1.0);
        Self {
            credibility_score,
            verdict: Verdict::from_score(credibility_score),
            sentiment: parts.sentiment.label,
            sentiment_score: parts.sentiment.score.clamp(-1.0, 1.0),
            bias_level: BiasLevel::from_score(bias_score),
            bias_score,
            bias_types: parts.bias.types,
            manipulative_techniques: parts.manipulation.techniques,
            manipulation_score: parts.manipulation.score.clamp(0.0, 1.0),
            source_credibility: parts.source.credibility,
            source_name: parts.source.name,
            key_findings: parts.key_findings,
            recommendations: parts.recommendations,
            language: parts.language,
            processing_time_ms: parts.processing_time_ms,
        }
    }

    pub fn credibility_score(&self) -> u8 {
        self.credibility_score
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn sentiment_score(&self) -> f64 {
        self.sentiment_score
    }

    pub fn bias_level(&self) -> BiasLevel {
        self.bias_level
    }

    pub fn bias_score(&self) -> f64 {
        self.bias_score
    }

    pub fn bias_types(&self) -> &[BiasType] {
        &self.bias_types
    }

    pub fn manipulative_techniques(&self) -> &[ManipulativeTechnique] {
        &self.manipulative_techniques
    }

    pub fn manipulation_score(&self) -> f64 {
        self.manipulation_score
    }

    pub fn source_credibility(&self) -> Option<f64> {
        self.source_credibility
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn key_findings(&self) -> &[String] {
        &self.key_findings
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn processing_time_ms(&self) -> u64 {
        self.processing_time_ms
    }
}
