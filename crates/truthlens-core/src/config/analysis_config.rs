//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for how the engine schedules its detectors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Run the content detectors and source resolver on the rayon pool
    /// instead of sequentially. Default: false.
    pub parallel_detectors: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective parallelism flag, defaulting to false.
    pub fn effective_parallel_detectors(&self) -> bool {
        self.parallel_detectors.unwrap_or(false)
    }
}
