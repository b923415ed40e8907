use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical credibility verdict. Declared worst to best so `Ord` follows
/// the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    False,
    LikelyFalse,
    Uncertain,
    LikelyTrue,
    Credible,
}

impl Verdict {
    /// Step function over the credibility score:
    /// `>=80` credible, `>=60` likely true, `>=40` uncertain, `>=20` likely false.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Credible
        } else if score >= 60 {
            Self::LikelyTrue
        } else if score >= 40 {
            Self::Uncertain
        } else if score >= 20 {
            Self::LikelyFalse
        } else {
            Self::False
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credible => "credible",
            Self::LikelyTrue => "likely_true",
            Self::Uncertain => "uncertain",
            Self::LikelyFalse => "likely_false",
            Self::False => "false",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
