use std::fmt;

use serde::{Deserialize, Serialize};

/// Named rhetorical technique associated with persuasive or deceptive framing.
///
/// Only `Clickbait`, `EmotionalAppeal` and `AppealToFear` are produced by the
/// current detectors; the rest are reserved for future ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManipulativeTechnique {
    Clickbait,
    EmotionalAppeal,
    FalseDichotomy,
    AppealToFear,
    CherryPicking,
    MisleadingStatistics,
    AdHominem,
    Strawman,
    Bandwagon,
    AppealToAuthority,
}

impl ManipulativeTechnique {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clickbait => "clickbait",
            Self::EmotionalAppeal => "emotional_appeal",
            Self::FalseDichotomy => "false_dichotomy",
            Self::AppealToFear => "appeal_to_fear",
            Self::CherryPicking => "cherry_picking",
            Self::MisleadingStatistics => "misleading_statistics",
            Self::AdHominem => "ad_hominem",
            Self::Strawman => "strawman",
            Self::Bandwagon => "bandwagon",
            Self::AppealToAuthority => "appeal_to_authority",
        }
    }

    /// Human-readable name: the tag with underscores replaced by spaces.
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for ManipulativeTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
