use truthlens_core::constants::{FINDINGS_CREDIBLE_MIN, FINDINGS_MIXED_MIN, MAX_LISTED_TECHNIQUES};
use truthlens_core::models::{BiasLevel, ManipulativeTechnique, Sentiment};

/// Ordered findings: one overall statement, then bias, technique, and tone
/// notes where they apply.
pub fn key_findings(
    credibility_score: u8,
    bias_level: BiasLevel,
    techniques: &[ManipulativeTechnique],
    sentiment: Sentiment,
) -> Vec<String> {
    let mut findings = Vec::with_capacity(4);

    let overall = if credibility_score >= FINDINGS_CREDIBLE_MIN {
        "Content appears to be credible"
    } else if credibility_score >= FINDINGS_MIXED_MIN {
        "Content has mixed credibility indicators"
    } else {
        "Content shows signs of misinformation"
    };
    findings.push(overall.to_string());

    if bias_level.is_notable() {
        findings.push(format!("Detected {} level of bias", bias_level.as_str()));
    }

    if !techniques.is_empty() {
        let named: Vec<String> = techniques
            .iter()
            .take(MAX_LISTED_TECHNIQUES)
            .map(ManipulativeTechnique::display_name)
            .collect();
        findings.push(format!(
            "Manipulative techniques detected: {}",
            named.join(", ")
        ));
    }

    if sentiment == Sentiment::Negative {
        findings.push("Content has predominantly negative tone".to_string());
    }

    findings
}
