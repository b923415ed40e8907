use truthlens_core::models::{
    AnalysisRequest, AnalysisResult, BiasLevel, BiasSignal, BiasType, EngineState, EngineStatus,
    ManipulationSignal, ManipulativeTechnique, ResultParts, Sentiment, SentimentSignal,
    SourceAssessment, Verdict,
};

fn parts(score: u8, bias: f64) -> ResultParts {
    ResultParts {
        credibility_score: score,
        sentiment: SentimentSignal {
            label: Sentiment::Neutral,
            score: 0.0,
        },
        bias: BiasSignal {
            score: bias,
            types: Vec::new(),
        },
        manipulation: ManipulationSignal {
            techniques: Vec::new(),
            score: 0.0,
        },
        source: SourceAssessment::unresolved(),
        key_findings: vec!["Content appears to be credible".into()],
        recommendations: vec!["Information appears reliable".into()],
        language: "en".into(),
        processing_time_ms: 1,
    }
}

#[test]
fn verdict_thresholds() {
    assert_eq!(Verdict::from_score(85), Verdict::Credible);
    assert_eq!(Verdict::from_score(80), Verdict::Credible);
    assert_eq!(Verdict::from_score(79), Verdict::LikelyTrue);
    assert_eq!(Verdict::from_score(60), Verdict::LikelyTrue);
    assert_eq!(Verdict::from_score(55), Verdict::Uncertain);
    assert_eq!(Verdict::from_score(40), Verdict::Uncertain);
    assert_eq!(Verdict::from_score(39), Verdict::LikelyFalse);
    assert_eq!(Verdict::from_score(20), Verdict::LikelyFalse);
    assert_eq!(Verdict::from_score(15), Verdict::False);
    assert_eq!(Verdict::from_score(0), Verdict::False);
}

#[test]
fn bias_level_thresholds() {
    assert_eq!(BiasLevel::from_score(0.0), BiasLevel::None);
    assert_eq!(BiasLevel::from_score(0.19), BiasLevel::None);
    assert_eq!(BiasLevel::from_score(0.2), BiasLevel::Low);
    assert_eq!(BiasLevel::from_score(0.3), BiasLevel::Low);
    assert_eq!(BiasLevel::from_score(0.4), BiasLevel::Medium);
    assert_eq!(BiasLevel::from_score(0.6), BiasLevel::Medium);
    assert_eq!(BiasLevel::from_score(0.7), BiasLevel::High);
    assert_eq!(BiasLevel::from_score(1.0), BiasLevel::High);
    assert!(BiasLevel::Medium.is_notable());
    assert!(!BiasLevel::Low.is_notable());
}

#[test]
fn enums_serialize_as_snake_case_tags() {
    assert_eq!(serde_json::to_string(&Verdict::LikelyFalse).unwrap(), "\"likely_false\"");
    assert_eq!(serde_json::to_string(&Verdict::False).unwrap(), "\"false\"");
    assert_eq!(
        serde_json::to_string(&ManipulativeTechnique::AppealToFear).unwrap(),
        "\"appeal_to_fear\""
    );
    assert_eq!(
        serde_json::to_string(&BiasType::Sensationalist).unwrap(),
        "\"sensationalist\""
    );
    assert_eq!(serde_json::to_string(&Sentiment::Mixed).unwrap(), "\"mixed\"");
    assert_eq!(
        serde_json::to_string(&EngineState::Uninitialized).unwrap(),
        "\"uninitialized\""
    );
}

#[test]
fn as_str_matches_serde_tag() {
    for technique in [
        ManipulativeTechnique::Clickbait,
        ManipulativeTechnique::EmotionalAppeal,
        ManipulativeTechnique::FalseDichotomy,
        ManipulativeTechnique::AppealToFear,
        ManipulativeTechnique::CherryPicking,
        ManipulativeTechnique::MisleadingStatistics,
        ManipulativeTechnique::AdHominem,
        ManipulativeTechnique::Strawman,
        ManipulativeTechnique::Bandwagon,
        ManipulativeTechnique::AppealToAuthority,
    ] {
        let tag = serde_json::to_value(technique).unwrap();
        assert_eq!(tag, technique.as_str());
    }
}

#[test]
fn technique_display_name_uses_spaces() {
    assert_eq!(ManipulativeTechnique::AppealToFear.display_name(), "appeal to fear");
    assert_eq!(ManipulativeTechnique::Clickbait.display_name(), "clickbait");
}

#[test]
fn result_derives_verdict_and_bias_level() {
    let result = AnalysisResult::new(parts(48, 0.6));
    assert_eq!(result.verdict(), Verdict::Uncertain);
    assert_eq!(result.bias_level(), BiasLevel::Medium);
    assert_eq!(result.source_credibility(), None);
    assert_eq!(result.source_name(), None);
    assert_eq!(result.language(), "en");
}

#[test]
fn result_clamps_out_of_range_inputs() {
    let mut p = parts(250, 3.0);
    p.sentiment.score = -4.0;
    p.manipulation.score = 1.4;
    let result = AnalysisResult::new(p);
    assert_eq!(result.credibility_score(), 100);
    assert_eq!(result.verdict(), Verdict::Credible);
    assert_eq!(result.bias_score(), 1.0);
    assert_eq!(result.bias_level(), BiasLevel::High);
    assert_eq!(result.sentiment_score(), -1.0);
    assert_eq!(result.manipulation_score(), 1.0);
}

#[test]
fn result_serializes_with_flat_field_names() {
    let mut p = parts(85, 0.0);
    p.source = SourceAssessment::resolved(0.95, "reuters.com");
    let value = serde_json::to_value(AnalysisResult::new(p)).unwrap();
    assert_eq!(value["credibility_score"], 85);
    assert_eq!(value["verdict"], "credible");
    assert_eq!(value["bias_level"], "none");
    assert_eq!(value["source_credibility"], 0.95);
    assert_eq!(value["source_name"], "reuters.com");
    assert!(value["manipulative_techniques"].as_array().unwrap().is_empty());
    assert!(value.get("processing_time_ms").is_some());
}

#[test]
fn request_defaults_when_deserialized() {
    let request: AnalysisRequest = serde_json::from_str(r#"{"text":"hello world"}"#).unwrap();
    assert_eq!(request.language, "en");
    assert!(request.detail);
    assert_eq!(request.url, None);

    let built = AnalysisRequest::new("hello world")
        .with_url("https://apnews.com")
        .with_language("es")
        .with_detail(false);
    assert_eq!(built.url.as_deref(), Some("https://apnews.com"));
    assert_eq!(built.language, "es");
    assert!(!built.detail);
}

#[test]
fn engine_status_readiness() {
    let status = EngineStatus {
        version: "0.1.0".into(),
        state: EngineState::Ready,
    };
    assert!(status.is_ready());
}

#[test]
fn result_serializes_exactly_the_documented_fields() {
    let value = serde_json::to_value(AnalysisResult::new(parts(48, 0.6))).unwrap();
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "bias_level",
            "bias_score",
            "bias_types",
            "credibility_score",
            "key_findings",
            "language",
            "manipulation_score",
            "manipulative_techniques",
            "processing_time_ms",
            "recommendations",
            "sentiment",
            "sentiment_score",
            "source_credibility",
            "source_name",
            "verdict",
        ]
    );
    // Verdict and level are derived, so they agree with the scores.
    assert_eq!(value["verdict"], "uncertain");
    assert_eq!(value["bias_level"], "medium");
}
