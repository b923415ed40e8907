use truthlens_analysis::{AnalysisEngine, RequestGate, ResultDigest, ServiceError};
use truthlens_core::config::{GatewayConfig, TruthLensConfig};
use truthlens_core::errors::{TruthLensErrorCode, ValidationError};
use truthlens_core::models::{AnalysisRequest, Verdict};

fn ready_engine() -> AnalysisEngine {
    let engine = AnalysisEngine::new(TruthLensConfig::default());
    engine.initialize().unwrap();
    engine
}

#[test]
fn api_profile_bounds() {
    let gate = RequestGate::api(&GatewayConfig::default());
    assert_eq!(gate.min_len(), 10);
    assert_eq!(gate.max_len(), Some(50_000));

    assert_eq!(
        gate.check(&AnalysisRequest::new("")),
        Err(ValidationError::MissingText)
    );
    assert_eq!(
        gate.check(&AnalysisRequest::new("too short")),
        Err(ValidationError::TextTooShort { min: 10, actual: 9 })
    );
    assert!(gate.check(&AnalysisRequest::new("long enough")).is_ok());
    assert!(gate.check(&AnalysisRequest::new("x".repeat(50_000))).is_ok());
    assert_eq!(
        gate.check(&AnalysisRequest::new("x".repeat(50_001))),
        Err(ValidationError::TextTooLong {
            max: 50_000,
            actual: 50_001
        })
    );
}

#[test]
fn length_is_counted_in_characters() {
    let gate = RequestGate::new(5, Some(5));
    // Five characters, ten bytes.
    assert!(gate.check(&AnalysisRequest::new("ééééé")).is_ok());
}

#[test]
fn chat_profile_has_no_maximum() {
    let gate = RequestGate::chat(&GatewayConfig::default());
    assert_eq!(gate.min_len(), 20);
    assert_eq!(gate.max_len(), None);
    assert!(gate.check(&AnalysisRequest::new("y".repeat(200_000))).is_ok());
    assert!(matches!(
        gate.check(&AnalysisRequest::new("nineteen characters")),
        Err(ValidationError::TextTooShort { min: 20, actual: 19 })
    ));
}

#[test]
fn configured_limits_are_used() {
    let config = GatewayConfig {
        api_min_text_len: Some(3),
        api_max_text_len: Some(8),
        chat_min_text_len: Some(1),
    };
    assert_eq!(RequestGate::api(&config), RequestGate::new(3, Some(8)));
    assert_eq!(RequestGate::chat(&config), RequestGate::new(1, None));
}

#[test]
fn gate_rejects_before_engine_runs() {
    // An uninitialized engine would fail with NotReady; validation wins first.
    let engine = AnalysisEngine::new(TruthLensConfig::default());
    let gate = RequestGate::api(&GatewayConfig::default());
    let err = gate.analyze(&engine, &AnalysisRequest::new("short")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status_code(), 422);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn not_ready_maps_to_service_unavailable() {
    let engine = AnalysisEngine::new(TruthLensConfig::default());
    let gate = RequestGate::api(&GatewayConfig::default());
    let err = gate
        .analyze(&engine, &AnalysisRequest::new("A perfectly reasonable text"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Engine(_)));
    assert_eq!(err.status_code(), 503);
    assert!(err.is_retryable());
}

#[test]
fn gate_passes_valid_request_through() {
    let engine = ready_engine();
    let gate = RequestGate::api(&GatewayConfig::default());
    let result = gate
        .analyze(
            &engine,
            &AnalysisRequest::new("Great news! Excellent progress has been made."),
        )
        .unwrap();
    assert_eq!(result.verdict(), Verdict::LikelyTrue);
}

#[test]
fn chat_digest_truncates() {
    let engine = ready_engine();
    let result = engine
        .analyze_text(
            "SHOCKING!!! You won't believe this miracle cure was BANNED and EXPOSED!!! \
             The terrible danger and threat are real.",
            None,
        )
        .unwrap();
    assert!(result.key_findings().len() > 3);
    assert!(result.recommendations().len() > 2);

    let digest = ResultDigest::chat(&result);
    assert_eq!(digest.credibility_score, result.credibility_score());
    assert_eq!(digest.verdict, result.verdict());
    assert_eq!(digest.key_findings, result.key_findings()[..3]);
    assert_eq!(digest.recommendations, result.recommendations()[..2]);

    let json = serde_json::to_value(&digest).unwrap();
    assert_eq!(json["key_findings"].as_array().unwrap().len(), 3);
}

#[test]
fn digest_limits_larger_than_lists_keep_everything() {
    let engine = ready_engine();
    let result = engine.analyze_text("Officials met today.", None).unwrap();
    let digest = ResultDigest::from_result(&result, 10, 10);
    assert_eq!(digest.key_findings, result.key_findings());
    assert_eq!(digest.recommendations, result.recommendations());
}
