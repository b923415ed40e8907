//! Span definitions per operation: initialization, analysis, batch analysis.

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($text_len:expr, $has_url:expr) => {
        tracing::debug_span!("truthlens.analysis", text_len = $text_len, has_url = $has_url)
    };
}

/// Create an initialization span.
#[macro_export]
macro_rules! initialize_span {
    ($parallel:expr) => {
        tracing::info_span!("truthlens.initialize", parallel_detectors = $parallel)
    };
}

/// Create a batch analysis span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("truthlens.batch", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "truthlens.analysis";
    pub const INITIALIZE: &str = "truthlens.initialize";
    pub const BATCH: &str = "truthlens.batch";
}
