//! Bias categories and the score → level mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of bias detected in a text.
///
/// `PoliticalLeft`, `PoliticalRight` and `None` are reserved: no current
/// detector emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    PoliticalLeft,
    PoliticalRight,
    Emotional,
    Sensationalist,
    None,
}

impl BiasType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PoliticalLeft => "political_left",
            Self::PoliticalRight => "political_right",
            Self::Emotional => "emotional",
            Self::Sensationalist => "sensationalist",
            Self::None => "none",
        }
    }
}

impl fmt::Display for BiasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered bias severity. Variants are declared low to high so `Ord`
/// follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasLevel {
    None,
    Low,
    Medium,
    High,
}

impl BiasLevel {
    /// Map a bias score in `[0, 1]` to its level.
    /// `<0.2` none, `<0.4` low, `<0.7` medium, else high.
    pub fn from_score(score: f64) -> Self {
        if score < 0.2 {
            Self::None
        } else if score < 0.4 {
            Self::Low
        } else if score < 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Medium and high bias get called out in findings and recommendations.
    pub fn is_notable(&self) -> bool {
        match self {
            Self::Medium | Self::High => true,
            Self::None | Self::Low => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for BiasLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
