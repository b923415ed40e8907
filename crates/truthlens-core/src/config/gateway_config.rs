//! Request gate configuration for the surfaces in front of the engine.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_MAX_TEXT_LEN, DEFAULT_API_MIN_TEXT_LEN, DEFAULT_CHAT_MIN_TEXT_LEN,
};

/// Length limits applied by callers before invoking the engine.
/// The engine itself never enforces these.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Minimum text length (characters) for the request-handling surface. Default: 10.
    pub api_min_text_len: Option<usize>,
    /// Maximum text length (characters) for the request-handling surface. Default: 50000.
    pub api_max_text_len: Option<usize>,
    /// Minimum text length (characters) for the conversational surface. Default: 20.
    pub chat_min_text_len: Option<usize>,
}

impl GatewayConfig {
    pub fn effective_api_min_text_len(&self) -> usize {
        self.api_min_text_len.unwrap_or(DEFAULT_API_MIN_TEXT_LEN)
    }

    pub fn effective_api_max_text_len(&self) -> usize {
        self.api_max_text_len.unwrap_or(DEFAULT_API_MAX_TEXT_LEN)
    }

    pub fn effective_chat_min_text_len(&self) -> usize {
        self.chat_min_text_len.unwrap_or(DEFAULT_CHAT_MIN_TEXT_LEN)
    }
}
