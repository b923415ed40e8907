//! AnalysisEngine: explicit instance, lock-free after initialization.
//!
//! The engine owns its configuration. `initialize()` compiles the lexicon and
//! builds the source registry once; the compiled state then lives in a
//! `OnceLock` and is only ever read, so a single engine can be shared across
//! threads behind an `Arc` without further locking.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};
use truthlens_core::constants::VERSION;
use truthlens_core::errors::EngineError;
use truthlens_core::models::{
    AnalysisRequest, AnalysisResult, BiasSignal, EngineState, EngineStatus,
    ManipulationSignal, ResultParts, SentimentSignal, SourceAssessment, SourceListing,
};
use truthlens_core::traits::CredibilityAnalyzer;
use truthlens_core::{analysis_span, batch_span, initialize_span, TruthLensConfig};

use crate::lexicon::Lexicon;
use crate::sources::SourceRegistry;
use crate::{bias, manipulation, preprocess, report, scoring, sentiment};

/// Compiled, immutable state produced by `initialize()`.
#[derive(Debug)]
struct EngineCore {
    lexicon: Lexicon,
    sources: SourceRegistry,
    parallel_detectors: bool,
}

/// Output of the three content detectors and the source resolver.
struct Signals {
    sentiment: SentimentSignal,
    bias: BiasSignal,
    manipulation: ManipulationSignal,
    source: SourceAssessment,
}

/// The heuristic credibility engine.
#[derive(Debug)]
pub struct AnalysisEngine {
    config: TruthLensConfig,
    core: OnceLock<Arc<EngineCore>>,
}

impl AnalysisEngine {
    /// Create an uninitialized engine. Nothing is compiled until
    /// [`initialize`](Self::initialize).
    pub fn new(config: TruthLensConfig) -> Self {
        Self {
            config,
            core: OnceLock::new(),
        }
    }

    /// Validate the configuration, compile the lexicon, and build the source
    /// registry. Calling it again after success is a no-op. On failure the
    /// engine stays uninitialized.
    pub fn initialize(&self) -> Result<(), EngineError> {
        if self.core.get().is_some() {
            return Ok(());
        }

        let parallel_detectors = self.config.analysis.effective_parallel_detectors();
        let span = initialize_span!(parallel_detectors);
        let _guard = span.enter();

        TruthLensConfig::validate(&self.config)?;
        let lexicon = Lexicon::compile(&self.config.lexicon)?;
        let sources = SourceRegistry::from_config(&self.config.sources);
        let source_count = sources.len();
        let pattern_count = lexicon.clickbait_pattern_count();

        // A concurrent initializer may have won; its state is equivalent.
        let _ = self.core.set(Arc::new(EngineCore {
            lexicon,
            sources,
            parallel_detectors,
        }));

        info!(
            version = VERSION,
            sources = source_count,
            clickbait_patterns = pattern_count,
            "analysis engine ready"
        );
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.core.get().is_some()
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            version: VERSION.to_string(),
            state: if self.is_ready() {
                EngineState::Ready
            } else {
                EngineState::Uninitialized
            },
        }
    }

    pub fn config(&self) -> &TruthLensConfig {
        &self.config
    }

    /// Analyze one request.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EngineError> {
        let core = self.ready("analyze")?;
        Ok(analyze_with(core, request))
    }

    /// Analyze raw text with an optional source URL and default options.
    pub fn analyze_text(&self, text: &str, url: Option<&str>) -> Result<AnalysisResult, EngineError> {
        let mut request = AnalysisRequest::new(text);
        request.url = url.map(str::to_string);
        self.analyze(&request)
    }

    /// Analyze many requests on the rayon pool. Results keep input order.
    pub fn analyze_batch(
        &self,
        requests: &[AnalysisRequest],
    ) -> Result<Vec<AnalysisResult>, EngineError> {
        let core = self.ready("analyze_batch")?;
        let span = batch_span!(requests.len());
        let _guard = span.enter();
        Ok(requests
            .par_iter()
            .map(|request| analyze_with(core, request))
            .collect())
    }

    /// Reliable and unreliable domains, each sorted.
    pub fn sources(&self) -> Result<SourceListing, EngineError> {
        Ok(self.ready("sources")?.sources.listing())
    }

    fn ready(&self, operation: &'static str) -> Result<&EngineCore, EngineError> {
        self.core
            .get()
            .map(|core| &**core)
            .ok_or(EngineError::NotReady { operation })
    }
}

impl CredibilityAnalyzer for AnalysisEngine {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EngineError> {
        AnalysisEngine::analyze(self, request)
    }
}

fn analyze_with(core: &EngineCore, request: &AnalysisRequest) -> AnalysisResult {
    let started = Instant::now();
    let text = preprocess::normalize(&request.text);
    let span = analysis_span!(text.chars().count(), request.url.is_some());
    let _guard = span.enter();

    let signals = if core.parallel_detectors {
        detect_parallel(core, &text, request.url.as_deref())
    } else {
        detect_sequential(core, &text, request.url.as_deref())
    };

    let credibility_score = scoring::aggregate(
        signals.bias.score,
        signals.manipulation.score,
        signals.source.credibility,
    );
    let bias_level = signals.bias.level();
    let key_findings = report::key_findings(
        credibility_score,
        bias_level,
        &signals.manipulation.techniques,
        signals.sentiment.label,
    );
    let recommendations =
        report::recommendations(credibility_score, bias_level, &signals.manipulation.techniques);

    let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let result = AnalysisResult::new(ResultParts {
        credibility_score,
        sentiment: signals.sentiment,
        bias: signals.bias,
        manipulation: signals.manipulation,
        source: signals.source,
        key_findings,
        recommendations,
        language: request.language.clone(),
        processing_time_ms,
    });

    debug!(
        score = result.credibility_score(),
        verdict = %result.verdict(),
        bias_level = result.bias_level().as_str(),
        techniques = result.manipulative_techniques().len(),
        source = result.source_name().unwrap_or("-"),
        elapsed_ms = processing_time_ms,
        "analysis complete"
    );
    result
}

fn resolve_source(core: &EngineCore, url: Option<&str>) -> SourceAssessment {
    match url {
        Some(url) => core.sources.resolve(url),
        None => SourceAssessment::unresolved(),
    }
}

fn detect_sequential(core: &EngineCore, text: &str, url: Option<&str>) -> Signals {
    Signals {
        sentiment: sentiment::classify(text, &core.lexicon),
        bias: bias::detect(text, &core.lexicon),
        manipulation: manipulation::detect(text, &core.lexicon),
        source: resolve_source(core, url),
    }
}

fn detect_parallel(core: &EngineCore, text: &str, url: Option<&str>) -> Signals {
    let ((sentiment, bias), (manipulation, source)) = rayon::join(
        || {
            rayon::join(
                || sentiment::classify(text, &core.lexicon),
                || bias::detect(text, &core.lexicon),
            )
        },
        || {
            rayon::join(
                || manipulation::detect(text, &core.lexicon),
                || resolve_source(core, url),
            )
        },
    );
    Signals {
        sentiment,
        bias,
        manipulation,
        source,
    }
}
