//! Lexical polarity scoring.

use rustc_hash::FxHashSet;
use truthlens_core::constants::SENTIMENT_POLARITY_THRESHOLD;
use truthlens_core::models::{Sentiment, SentimentSignal};

use crate::lexicon::Lexicon;

/// Classify the polarity of normalized text.
///
/// Tokens are whitespace-split and deduplicated, so a repeated word counts
/// once. `score = (pos - neg) / max(pos + neg, 1)`. Only scores strictly
/// beyond ±0.2 get a polar label; a tie between present polarities is mixed.
pub fn classify(text: &str, lexicon: &Lexicon) -> SentimentSignal {
    let lowered = text.to_lowercase();
    let tokens: FxHashSet<&str> = lowered.split_whitespace().collect();

    let pos = tokens.iter().filter(|t| lexicon.is_positive(t)).count();
    let neg = tokens.iter().filter(|t| lexicon.is_negative(t)).count();

    let total = match pos + neg {
        0 => 1,
        n => n,
    };
    let score = (pos as f64 - neg as f64) / total as f64;

    let label = if score > SENTIMENT_POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if score < -SENTIMENT_POLARITY_THRESHOLD {
        Sentiment::Negative
    } else if pos > 0 && neg > 0 {
        Sentiment::Mixed
    } else {
        Sentiment::Neutral
    };

    SentimentSignal { label, score }
}
