//! Source reputation tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const RELIABLE_SOURCES: &[(&str, f64)] = &[
    ("reuters.com", 0.95),
    ("apnews.com", 0.95),
    ("bbc.com", 0.90),
    ("bbc.co.uk", 0.90),
    ("nytimes.com", 0.85),
    ("theguardian.com", 0.85),
    ("washingtonpost.com", 0.85),
    ("nature.com", 0.95),
    ("science.org", 0.95),
    ("who.int", 0.95),
    ("cdc.gov", 0.95),
    ("un.org", 0.90),
];

const UNRELIABLE_SOURCES: &[(&str, f64)] = &[
    ("infowars.com", 0.1),
    ("naturalnews.com", 0.15),
    ("beforeitsnews.com", 0.1),
];

/// Domain → reputation weight tables. Domains are normalized: lower-case,
/// no leading `www.`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub reliable: BTreeMap<String, f64>,
    pub unreliable: BTreeMap<String, f64>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            reliable: table(RELIABLE_SOURCES),
            unreliable: table(UNRELIABLE_SOURCES),
        }
    }
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(domain, weight)| ((*domain).to_string(), *weight))
        .collect()
}
