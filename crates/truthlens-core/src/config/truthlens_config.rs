//! Top-level TruthLens configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, GatewayConfig, LexiconConfig, ObservabilityConfig, SourcesConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TRUTHLENS_*`)
/// 3. Config file (`truthlens.toml` or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TruthLensConfig {
    pub lexicon: LexiconConfig,
    pub sources: SourcesConfig,
    pub analysis: AnalysisConfig,
    pub gateway: GatewayConfig,
    pub observability: ObservabilityConfig,
}

/// Caller-supplied overrides, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub parallel_detectors: Option<bool>,
    pub api_min_text_len: Option<usize>,
    pub api_max_text_len: Option<usize>,
    pub chat_min_text_len: Option<usize>,
}

impl TruthLensConfig {
    /// Load configuration with layered resolution.
    ///
    /// `path` is optional; when given it must exist. The resolved config is
    /// validated before it is returned.
    pub fn load(
        path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        // Layer 3: config file (replaces defaults wholesale per section)
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): caller overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are silently ignored.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TruthLensConfig) -> Result<(), ConfigError> {
        let lexicon = &config.lexicon;
        for (field, words) in [
            ("lexicon.positive_words", &lexicon.positive_words),
            ("lexicon.negative_words", &lexicon.negative_words),
            ("lexicon.emotional_words", &lexicon.emotional_words),
            ("lexicon.fear_words", &lexicon.fear_words),
            ("lexicon.clickbait_patterns", &lexicon.clickbait_patterns),
        ] {
            if words.iter().all(|w| w.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must contain at least one entry".to_string(),
                });
            }
        }

        for (table, entries) in [
            ("sources.reliable", &config.sources.reliable),
            ("sources.unreliable", &config.sources.unreliable),
        ] {
            for (domain, weight) in entries {
                if !(*weight > 0.0 && *weight <= 1.0) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("{table}.{domain}"),
                        message: "weight must be in (0.0, 1.0]".to_string(),
                    });
                }
                if domain.is_empty()
                    || domain.starts_with("www.")
                    || !domain.is_ascii()
                    || domain.chars().any(|c| c.is_ascii_uppercase())
                {
                    return Err(ConfigError::InvalidValue {
                        field: table.to_string(),
                        message: format!(
                            "domain {domain:?} must be lower-case ASCII (punycode) without a leading www."
                        ),
                    });
                }
            }
        }

        let gateway = &config.gateway;
        if gateway.effective_api_max_text_len() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "gateway.api_max_text_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if gateway.effective_api_min_text_len() > gateway.effective_api_max_text_len() {
            return Err(ConfigError::ValidationFailed {
                field: "gateway.api_min_text_len".to_string(),
                message: "must not exceed gateway.api_max_text_len".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `TRUTHLENS_PARALLEL_DETECTORS`, `TRUTHLENS_API_MIN_TEXT_LEN`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut TruthLensConfig) {
        if let Ok(val) = std::env::var("TRUTHLENS_PARALLEL_DETECTORS") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.parallel_detectors = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRUTHLENS_API_MIN_TEXT_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.gateway.api_min_text_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRUTHLENS_API_MAX_TEXT_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.gateway.api_max_text_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRUTHLENS_CHAT_MIN_TEXT_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.gateway.chat_min_text_len = Some(v);
            }
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut TruthLensConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.parallel_detectors {
            config.analysis.parallel_detectors = Some(v);
        }
        if let Some(v) = overrides.api_min_text_len {
            config.gateway.api_min_text_len = Some(v);
        }
        if let Some(v) = overrides.api_max_text_len {
            config.gateway.api_max_text_len = Some(v);
        }
        if let Some(v) = overrides.chat_min_text_len {
            config.gateway.chat_min_text_len = Some(v);
        }
    }

    /// Install the tracing subscriber, falling back to `observability.log_filter`
    /// when `TRUTHLENS_LOG` is unset. Only the first call in a process installs.
    pub fn init_tracing(&self) {
        crate::tracing::init_tracing_with_default(self.observability.effective_log_filter());
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
