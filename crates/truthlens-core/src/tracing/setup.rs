//! Process-wide subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `TRUTHLENS_LOG`, for example
/// `TRUTHLENS_LOG=truthlens_analysis=debug,truthlens_core=warn`.
///
/// An unset or unparsable variable means `truthlens=info`. Repeat calls do
/// nothing.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_FILTER);
}

/// Like [`init_tracing`], with a caller-chosen fallback directive.
/// [`TruthLensConfig::init_tracing`](crate::TruthLensConfig::init_tracing)
/// passes the configured `observability.log_filter` here.
pub fn init_tracing_with_default(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}
