//! Shared constants for the TruthLens credibility engine.

/// TruthLens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default language tag attached to requests.
pub const DEFAULT_LANGUAGE: &str = "en";

// ── Aggregation ────────────────────────────────────────────────────────────

/// Starting credibility before any penalty or bonus.
pub const BASE_CREDIBILITY: i32 = 70;

/// Multiplier applied to the bias score (floored) and subtracted.
pub const BIAS_PENALTY_WEIGHT: f64 = 20.0;

/// Multiplier applied to the manipulation score (floored) and subtracted.
pub const MANIPULATION_PENALTY_WEIGHT: f64 = 25.0;

/// Bonus for a source weighted above `HIGH_SOURCE_THRESHOLD`.
pub const RELIABLE_SOURCE_BONUS: i32 = 15;

/// Bonus for a source weighted in `(NEUTRAL_SOURCE_THRESHOLD, HIGH_SOURCE_THRESHOLD]`.
pub const MODERATE_SOURCE_BONUS: i32 = 5;

/// Penalty for a source weighted below `LOW_SOURCE_THRESHOLD`.
pub const UNRELIABLE_SOURCE_PENALTY: i32 = 20;

pub const HIGH_SOURCE_THRESHOLD: f64 = 0.8;
pub const NEUTRAL_SOURCE_THRESHOLD: f64 = 0.5;
pub const LOW_SOURCE_THRESHOLD: f64 = 0.3;

/// Weight reported for a domain present in neither registry.
pub const UNKNOWN_SOURCE_WEIGHT: f64 = 0.5;

// ── Detectors ──────────────────────────────────────────────────────────────

/// Sentiment scores strictly beyond ±this value get a polar label.
pub const SENTIMENT_POLARITY_THRESHOLD: f64 = 0.2;

/// Bias: emotional marker count must exceed this.
pub const BIAS_EMOTIONAL_MIN_EXCLUSIVE: usize = 3;

/// Bias score added per detected bias type.
pub const BIAS_TYPE_WEIGHT: f64 = 0.3;

/// Manipulation: emotional marker count must reach this.
pub const EMOTIONAL_APPEAL_MIN: usize = 2;

/// Manipulation: fear marker count must reach this.
pub const APPEAL_TO_FEAR_MIN: usize = 2;

/// Manipulation score added per detected technique.
pub const TECHNIQUE_WEIGHT: f64 = 0.2;

// ── Reporting ──────────────────────────────────────────────────────────────

/// Score at or above which findings call content credible.
pub const FINDINGS_CREDIBLE_MIN: u8 = 70;

/// Score at or above which findings report mixed indicators.
pub const FINDINGS_MIXED_MIN: u8 = 50;

/// Scores below this trigger cross-verification recommendations.
pub const VERIFY_RECOMMENDATION_BELOW: u8 = 60;

/// Techniques named in the findings statement.
pub const MAX_LISTED_TECHNIQUES: usize = 3;

// ── Gateway ────────────────────────────────────────────────────────────────

pub const DEFAULT_API_MIN_TEXT_LEN: usize = 10;
pub const DEFAULT_API_MAX_TEXT_LEN: usize = 50_000;
pub const DEFAULT_CHAT_MIN_TEXT_LEN: usize = 20;

/// Findings shown in the conversational digest.
pub const CHAT_FINDINGS_LIMIT: usize = 3;

/// Recommendations shown in the conversational digest.
pub const CHAT_RECOMMENDATIONS_LIMIT: usize = 2;

// ── Observability ──────────────────────────────────────────────────────────

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "TRUTHLENS_LOG";

/// Filter used when `TRUTHLENS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "truthlens=info";
