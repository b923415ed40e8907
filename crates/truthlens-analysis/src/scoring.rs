//! Folds detector signals into the 0-100 credibility score.

use truthlens_core::constants::{
    BASE_CREDIBILITY, BIAS_PENALTY_WEIGHT, HIGH_SOURCE_THRESHOLD, LOW_SOURCE_THRESHOLD,
    MANIPULATION_PENALTY_WEIGHT, MODERATE_SOURCE_BONUS, NEUTRAL_SOURCE_THRESHOLD,
    RELIABLE_SOURCE_BONUS, UNRELIABLE_SOURCE_PENALTY,
};

/// Credibility score from bias, manipulation, and (if known) source weight.
///
/// Starts at 70, subtracts `floor(bias * 20)` and `floor(manipulation * 25)`,
/// then adjusts for the source: above 0.8 adds 15, above 0.5 adds 5, below 0.3
/// subtracts 20. Sources in `[0.3, 0.5]` and unresolved sources leave the score
/// alone.
pub fn aggregate(bias_score: f64, manipulation_score: f64, source_credibility: Option<f64>) -> u8 {
    let mut score = BASE_CREDIBILITY;
    score -= penalty(bias_score, BIAS_PENALTY_WEIGHT);
    score -= penalty(manipulation_score, MANIPULATION_PENALTY_WEIGHT);

    if let Some(weight) = source_credibility {
        score += source_adjustment(weight);
    }

    score.clamp(0, 100) as u8
}

/// Adjustment a known source applies to the score.
pub fn source_adjustment(weight: f64) -> i32 {
    if weight > HIGH_SOURCE_THRESHOLD {
        RELIABLE_SOURCE_BONUS
    } else if weight > NEUTRAL_SOURCE_THRESHOLD {
        MODERATE_SOURCE_BONUS
    } else if weight < LOW_SOURCE_THRESHOLD {
        -UNRELIABLE_SOURCE_PENALTY
    } else {
        0
    }
}

fn penalty(signal: f64, weight: f64) -> i32 {
    (signal.clamp(0.0, 1.0) * weight).floor() as i32
}
