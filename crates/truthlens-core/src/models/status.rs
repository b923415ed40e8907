use serde::{Deserialize, Serialize};

/// Lifecycle state of an analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Uninitialized,
    Ready,
}

/// Health payload a surface can expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub version: String,
    pub state: EngineState,
}

impl EngineStatus {
    pub fn is_ready(&self) -> bool {
        self.state == EngineState::Ready
    }
}
