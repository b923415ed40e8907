//! Per-detector outputs fed into aggregation and reporting.

use serde::{Deserialize, Serialize};

use super::{BiasLevel, BiasType, ManipulativeTechnique, Sentiment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignal {
    pub label: Sentiment,
    /// Polarity in `[-1, 1]`.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasSignal {
    /// Score in `[0, 1]`.
    pub score: f64,
    /// Detection order, no duplicates.
    pub types: Vec<BiasType>,
}

impl BiasSignal {
    /// Level is always derived from the score, never stored.
    pub fn level(&self) -> BiasLevel {
        BiasLevel::from_score(self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManipulationSignal {
    /// Detection order, no duplicates.
    pub techniques: Vec<ManipulativeTechnique>,
    /// Score in `[0, 1]`.
    pub score: f64,
}

/// Outcome of resolving a source URL. Both fields are `None` when the URL
/// could not be parsed or was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAssessment {
    pub credibility: Option<f64>,
    pub name: Option<String>,
}

impl SourceAssessment {
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn resolved(credibility: f64, name: impl Into<String>) -> Self {
        Self {
            credibility: Some(credibility),
            name: Some(name.into()),
        }
    }
}
