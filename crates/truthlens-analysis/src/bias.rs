//! Emotional-language and sensationalism scoring.

use truthlens_core::constants::{BIAS_EMOTIONAL_MIN_EXCLUSIVE, BIAS_TYPE_WEIGHT};
use truthlens_core::models::{BiasSignal, BiasType};

use crate::lexicon::Lexicon;

/// Score bias in normalized text.
///
/// More than three distinct emotional markers adds `Emotional`; any clickbait
/// match adds `Sensationalist`. Each adds 0.3, capped at 1.0.
pub fn detect(text: &str, lexicon: &Lexicon) -> BiasSignal {
    let lowered = text.to_lowercase();
    let mut types = Vec::with_capacity(2);
    let mut score = 0.0;

    if lexicon.emotional_count(&lowered) > BIAS_EMOTIONAL_MIN_EXCLUSIVE {
        types.push(BiasType::Emotional);
        score += BIAS_TYPE_WEIGHT;
    }

    if lexicon.matches_clickbait(&lowered) {
        types.push(BiasType::Sensationalist);
        score += BIAS_TYPE_WEIGHT;
    }

    BiasSignal {
        score: f64::min(score, 1.0),
        types,
    }
}
