//! Configuration system for TruthLens.
//! TOML-based, 4-layer resolution: overrides > env > file > defaults.

pub mod analysis_config;
pub mod gateway_config;
pub mod lexicon_config;
pub mod observability_config;
pub mod sources_config;
pub mod truthlens_config;

pub use analysis_config::AnalysisConfig;
pub use gateway_config::GatewayConfig;
pub use lexicon_config::LexiconConfig;
pub use observability_config::ObservabilityConfig;
pub use sources_config::SourcesConfig;
pub use truthlens_config::{ConfigOverrides, TruthLensConfig};
