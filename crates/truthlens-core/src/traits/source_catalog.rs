/// Read-only domain reputation lookup.
pub trait SourceCatalog: Send + Sync {
    /// Weight registered for a normalized domain, reliable table first.
    fn weight_of(&self, domain: &str) -> Option<f64>;

    /// Reliable domains, sorted.
    fn reliable_domains(&self) -> Vec<&str>;

    /// Unreliable domains, sorted.
    fn unreliable_domains(&self) -> Vec<&str>;
}
