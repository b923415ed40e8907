//! Rhetorical-technique pattern matching.
//!
//! The emotional-marker threshold here (>= 2) is tuned separately from the
//! bias detector's (> 3); the two checks are not meant to agree.

use truthlens_core::constants::{APPEAL_TO_FEAR_MIN, EMOTIONAL_APPEAL_MIN, TECHNIQUE_WEIGHT};
use truthlens_core::models::{ManipulationSignal, ManipulativeTechnique};

use crate::lexicon::Lexicon;

/// Detect manipulative techniques in normalized text.
///
/// Order is fixed: clickbait, emotional appeal, appeal to fear. The score is
/// 0.2 per technique, capped at 1.0.
pub fn detect(text: &str, lexicon: &Lexicon) -> ManipulationSignal {
    let lowered = text.to_lowercase();
    let mut techniques = Vec::with_capacity(3);

    if lexicon.matches_clickbait(&lowered) {
        techniques.push(ManipulativeTechnique::Clickbait);
    }

    if lexicon.emotional_count(&lowered) >= EMOTIONAL_APPEAL_MIN {
        techniques.push(ManipulativeTechnique::EmotionalAppeal);
    }

    if lexicon.fear_count(&lowered) >= APPEAL_TO_FEAR_MIN {
        techniques.push(ManipulativeTechnique::AppealToFear);
    }

    let score = f64::min(techniques.len() as f64 * TECHNIQUE_WEIGHT, 1.0);
    ManipulationSignal { techniques, score }
}
