//! Compiled word sets and clickbait patterns shared by the detectors.
//!
//! Built once from `LexiconConfig` when the engine initializes and read-only
//! afterwards, so a `&Lexicon` can be handed to any number of threads.

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;
use truthlens_core::config::LexiconConfig;
use truthlens_core::errors::LexiconError;

/// Substring matcher over a set of marker words.
#[derive(Debug)]
pub struct MarkerSet {
    matcher: AhoCorasick,
    len: usize,
}

impl MarkerSet {
    fn compile(set: &'static str, words: &[String]) -> Result<Self, LexiconError> {
        let words = normalized_words(words);
        if words.is_empty() {
            return Err(LexiconError::EmptyWordSet { set });
        }
        let matcher = AhoCorasick::new(&words).map_err(|e| LexiconError::InvalidPattern {
            pattern: set.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            matcher,
            len: words.len(),
        })
    }

    /// Number of distinct markers occurring anywhere in `haystack`.
    /// The search is overlapping so a marker nested inside another still counts.
    pub fn count_distinct(&self, haystack: &str) -> usize {
        let mut seen = vec![false; self.len];
        for m in self.matcher.find_overlapping_iter(haystack) {
            seen[m.pattern().as_usize()] = true;
        }
        seen.into_iter().filter(|hit| *hit).count()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// All lexical resources the detectors consult.
#[derive(Debug)]
pub struct Lexicon {
    positive: FxHashSet<String>,
    negative: FxHashSet<String>,
    emotional: MarkerSet,
    fear: MarkerSet,
    clickbait: Vec<Regex>,
}

impl Lexicon {
    /// Compile a lexicon. Fails on an empty set, a word listed with both
    /// polarities, or a clickbait pattern that is not a valid regex.
    pub fn compile(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let positive: FxHashSet<String> = normalized_words(&config.positive_words)
            .into_iter()
            .collect();
        let negative: FxHashSet<String> = normalized_words(&config.negative_words)
            .into_iter()
            .collect();
        if positive.is_empty() {
            return Err(LexiconError::EmptyWordSet {
                set: "positive_words",
            });
        }
        if negative.is_empty() {
            return Err(LexiconError::EmptyWordSet {
                set: "negative_words",
            });
        }
        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        overlap.sort();
        if let Some(word) = overlap.first() {
            return Err(LexiconError::OverlappingPolarity {
                word: (*word).clone(),
            });
        }

        let emotional = MarkerSet::compile("emotional_words", &config.emotional_words)?;
        let fear = MarkerSet::compile("fear_words", &config.fear_words)?;

        if config.clickbait_patterns.is_empty() {
            return Err(LexiconError::EmptyWordSet {
                set: "clickbait_patterns",
            });
        }
        let clickbait = config
            .clickbait_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| LexiconError::InvalidPattern {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            positive,
            negative,
            emotional,
            fear,
            clickbait,
        })
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Distinct emotional markers contained in lower-cased `text`.
    pub fn emotional_count(&self, text: &str) -> usize {
        self.emotional.count_distinct(text)
    }

    /// Distinct fear markers contained in lower-cased `text`.
    pub fn fear_count(&self, text: &str) -> usize {
        self.fear.count_distinct(text)
    }

    /// True if any clickbait pattern matches.
    pub fn matches_clickbait(&self, text: &str) -> bool {
        self.clickbait.iter().any(|re| re.is_match(text))
    }

    pub fn clickbait_pattern_count(&self) -> usize {
        self.clickbait.len()
    }
}

/// Lower-case, trim, drop blanks and duplicates, keep first-seen order.
fn normalized_words(words: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
