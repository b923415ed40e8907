//! Word sets and clickbait patterns driving the lexical detectors.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "success",
    "achievement",
    "progress",
    "improve",
    "benefit",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "fail", "crisis", "disaster", "problem", "danger", "threat", "fear",
    "death",
];

const EMOTIONAL_WORDS: &[&str] = &[
    "shocking",
    "unbelievable",
    "incredible",
    "amazing",
    "terrifying",
    "horrifying",
    "devastating",
    "explosive",
    "breaking",
    "urgent",
    "scandal",
    "exposed",
    "revealed",
    "secret",
    "hidden",
    "banned",
    "miracle",
    "stunning",
    "outrageous",
    "disgusting",
    "horrific",
];

const FEAR_WORDS: &[&str] = &["danger", "threat", "risk", "warning", "alert", "emergency"];

const CLICKBAIT_PATTERNS: &[&str] = &[
    r"you won't believe",
    r"what happens next",
    r"\d+ reasons why",
    r"this is why",
    r"here's what",
    r"the truth about",
    r"\?\!+$",
    r"!!!+",
    r"doctors hate",
    r"one weird trick",
];

/// Lexical configuration. Any list left out of the TOML keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Positive sentiment markers, matched as whole tokens.
    pub positive_words: Vec<String>,
    /// Negative sentiment markers, matched as whole tokens.
    pub negative_words: Vec<String>,
    /// Emotional/sensational markers, matched as substrings.
    pub emotional_words: Vec<String>,
    /// Fear markers, matched as substrings.
    pub fear_words: Vec<String>,
    /// Case-insensitive clickbait regexes.
    pub clickbait_patterns: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive_words: owned(POSITIVE_WORDS),
            negative_words: owned(NEGATIVE_WORDS),
            emotional_words: owned(EMOTIONAL_WORDS),
            fear_words: owned(FEAR_WORDS),
            clickbait_patterns: owned(CLICKBAIT_PATTERNS),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
