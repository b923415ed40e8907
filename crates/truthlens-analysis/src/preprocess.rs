//! Text normalization applied before every detector.

/// Collapse each whitespace run (newlines included) into one space and trim
/// both ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
