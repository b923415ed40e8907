//! Property tests over arbitrary text and URLs.

use std::sync::OnceLock;

use proptest::prelude::*;
use truthlens_analysis::AnalysisEngine;
use truthlens_core::config::TruthLensConfig;
use truthlens_core::models::{BiasLevel, Sentiment, Verdict};

fn engine() -> &'static AnalysisEngine {
    static ENGINE: OnceLock<AnalysisEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let engine = AnalysisEngine::new(TruthLensConfig::default());
        engine.initialize().unwrap();
        engine
    })
}

fn text_strategy() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "good", "great", "bad", "terrible", "shocking", "amazing", "secret", "hidden",
        "danger", "threat", "risk", "warning", "the", "report", "!!!", "?!",
        "you won't believe", "doctors hate", "news", "Excellent", "CRISIS",
    ]);
    prop::collection::vec(words, 0..30).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn scores_stay_in_range(text in text_strategy(), noise in ".{0,40}") {
        let result = engine().analyze_text(&format!("{text} {noise}"), None).unwrap();
        prop_assert!(result.credibility_score() <= 100);
        prop_assert!((0.0..=1.0).contains(&result.bias_score()));
        prop_assert!((0.0..=1.0).contains(&result.manipulation_score()));
        prop_assert!((-1.0..=1.0).contains(&result.sentiment_score()));
    }

    #[test]
    fn derived_categories_agree_with_scores(text in text_strategy()) {
        let result = engine().analyze_text(&text, None).unwrap();
        prop_assert_eq!(result.verdict(), Verdict::from_score(result.credibility_score()));
        prop_assert_eq!(result.bias_level(), BiasLevel::from_score(result.bias_score()));
    }

    #[test]
    fn recommendations_never_empty(text in text_strategy()) {
        let result = engine().analyze_text(&text, None).unwrap();
        prop_assert!(!result.recommendations().is_empty());
        prop_assert!(!result.key_findings().is_empty());
    }

    #[test]
    fn sentiment_label_matches_sign(text in text_strategy()) {
        let result = engine().analyze_text(&text, None).unwrap();
        match result.sentiment() {
            Sentiment::Positive => {
                prop_assert!(result.sentiment_score() > 0.2);
            }
            Sentiment::Negative => {
                prop_assert!(result.sentiment_score() < -0.2);
            }
            Sentiment::Neutral | Sentiment::Mixed => {
                prop_assert!(result.sentiment_score().abs() <= 0.2);
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(host in "[a-z]{1,12}\\.(com|org|example)", path in "[a-z0-9/]{0,12}") {
        let url = format!("https://www.{host}/{path}");
        let a = engine().analyze_text("Officials met today.", Some(&url)).unwrap();
        let b = engine().analyze_text("Officials met today.", Some(&url)).unwrap();
        prop_assert_eq!(a.source_credibility(), b.source_credibility());
        prop_assert_eq!(a.source_name(), Some(host.as_str()));
    }

    #[test]
    fn arbitrary_url_never_fails(url in ".{0,60}") {
        let result = engine().analyze_text("Officials met today.", Some(&url));
        prop_assert!(result.is_ok());
    }
}
