use serde::{Deserialize, Serialize};

/// Read-only view of the source registries, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceListing {
    pub reliable_sources: Vec<String>,
    pub unreliable_sources: Vec<String>,
}
