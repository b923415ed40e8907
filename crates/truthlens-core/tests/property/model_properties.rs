//! Property tests for the score → category mappings.

use proptest::prelude::*;
use truthlens_core::models::{BiasLevel, Verdict};

proptest! {
    #[test]
    fn verdict_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Verdict::from_score(lo) <= Verdict::from_score(hi));
    }

    #[test]
    fn bias_level_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(BiasLevel::from_score(lo) <= BiasLevel::from_score(hi));
    }

    #[test]
    fn verdict_tag_round_trips(score in 0u8..=100) {
        let verdict = Verdict::from_score(score);
        let json = serde_json::to_string(&verdict).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, verdict);
        prop_assert_eq!(json.trim_matches('"'), verdict.as_str());
    }
}
