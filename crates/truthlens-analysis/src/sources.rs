//! Domain-to-reputation lookup.

use rustc_hash::FxHashMap;
use tracing::debug;
use truthlens_core::config::SourcesConfig;
use truthlens_core::constants::UNKNOWN_SOURCE_WEIGHT;
use truthlens_core::models::{SourceAssessment, SourceListing};
use truthlens_core::traits::SourceCatalog;
use url::Url;

/// Reliable and unreliable source tables, keyed by normalized domain.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    reliable: FxHashMap<String, f64>,
    unreliable: FxHashMap<String, f64>,
}

impl SourceRegistry {
    pub fn from_config(config: &SourcesConfig) -> Self {
        Self {
            reliable: config
                .reliable
                .iter()
                .map(|(d, w)| (d.clone(), *w))
                .collect(),
            unreliable: config
                .unreliable
                .iter()
                .map(|(d, w)| (d.clone(), *w))
                .collect(),
        }
    }

    /// Resolve a URL to `(weight, domain)`.
    ///
    /// Unknown domains get the neutral weight 0.5 and keep their name. A URL
    /// that does not parse, or has no host, resolves to nothing.
    ///
    /// Internationalized hosts come back in ASCII (punycode) form, so
    /// `https://www.bücher.de/` resolves to `xn--bcher-kva.de`. Registry keys
    /// for such domains must use that form too.
    pub fn resolve(&self, url: &str) -> SourceAssessment {
        let Some(domain) = normalize_domain(url) else {
            debug!(url, "source url did not resolve to a host");
            return SourceAssessment::unresolved();
        };
        let weight = self.weight_of(&domain).unwrap_or(UNKNOWN_SOURCE_WEIGHT);
        SourceAssessment::resolved(weight, domain)
    }

    pub fn listing(&self) -> SourceListing {
        SourceListing {
            reliable_sources: self.reliable_domains().into_iter().map(String::from).collect(),
            unreliable_sources: self
                .unreliable_domains()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.reliable.len() + self.unreliable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SourceCatalog for SourceRegistry {
    fn weight_of(&self, domain: &str) -> Option<f64> {
        self.reliable
            .get(domain)
            .or_else(|| self.unreliable.get(domain))
            .copied()
    }

    fn reliable_domains(&self) -> Vec<&str> {
        sorted_keys(&self.reliable)
    }

    fn unreliable_domains(&self) -> Vec<&str> {
        sorted_keys(&self.unreliable)
    }
}

/// Host of `url`, lower-cased, with one leading `www.` removed.
///
/// The host is the parser's serialized form: IDNA hosts are punycode.
pub fn normalize_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let domain = host.strip_prefix("www.").unwrap_or(&host);
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_string())
}

fn sorted_keys(table: &FxHashMap<String, f64>) -> Vec<&str> {
    let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_leading_www() {
        assert_eq!(
            normalize_domain("https://www.www.example.org/a").as_deref(),
            Some("www.example.org")
        );
        assert_eq!(
            normalize_domain("https://news.www.example.org").as_deref(),
            Some("news.www.example.org")
        );
    }

    #[test]
    fn host_is_lower_cased() {
        assert_eq!(
            normalize_domain("HTTPS://WWW.Reuters.COM/world").as_deref(),
            Some("reuters.com")
        );
    }

    #[test]
    fn url_without_host_is_unresolved() {
        assert_eq!(normalize_domain("reuters.com"), None);
        assert_eq!(normalize_domain("mailto:editor@reuters.com"), None);
        assert_eq!(normalize_domain(""), None);
    }

    #[test]
    fn internationalized_host_is_punycode() {
        assert_eq!(
            normalize_domain("https://www.bücher.de/").as_deref(),
            Some("xn--bcher-kva.de")
        );
        assert_eq!(
            normalize_domain("https://WWW.BÜCHER.de/buch").as_deref(),
            Some("xn--bcher-kva.de")
        );
    }
}
