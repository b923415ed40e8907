use truthlens_core::constants::VERIFY_RECOMMENDATION_BELOW;
use truthlens_core::models::{BiasLevel, ManipulativeTechnique};

/// Advice for the reader. Never empty: clean content gets the two default
/// entries.
pub fn recommendations(
    credibility_score: u8,
    bias_level: BiasLevel,
    techniques: &[ManipulativeTechnique],
) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    if credibility_score < VERIFY_RECOMMENDATION_BELOW {
        out.push("Verify information from multiple reliable sources");
        out.push("Check official sources for confirmation");
    }

    if bias_level.is_notable() {
        out.push("Be aware of potential bias in the content");
        out.push("Seek alternative perspectives on this topic");
    }

    if !techniques.is_empty() {
        out.push("Be cautious of emotional manipulation in the text");
    }

    if out.is_empty() {
        out.push("Information appears reliable");
        out.push("Continue to verify important claims");
    }

    out.into_iter().map(String::from).collect()
}
