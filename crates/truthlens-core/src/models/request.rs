use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LANGUAGE;

/// A single analysis call. Length limits are the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Pass-through language tag.
    #[serde(default = "default_language")]
    pub language: String,
    /// Accepted for compatibility; does not change the result shape.
    #[serde(default = "default_detail")]
    pub detail: bool,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            language: default_language(),
            detail: default_detail(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_detail() -> bool {
    true
}
