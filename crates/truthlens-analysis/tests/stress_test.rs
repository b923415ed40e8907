//! Many threads sharing one engine must see identical results.

use std::sync::Arc;
use std::thread;

use truthlens_analysis::AnalysisEngine;
use truthlens_core::config::TruthLensConfig;

const TEXTS: &[(&str, Option<&str>)] = &[
    ("Great news! Excellent progress has been made.", None),
    (
        "SHOCKING!!! You won't believe what doctors don't want you to know!",
        Some("https://www.infowars.com/a"),
    ),
    ("Officials met today.", Some("https://www.who.int/news")),
    ("Warning: a hidden danger and a secret threat.", Some("::bad::")),
];

#[test]
fn concurrent_analysis_is_deterministic() {
    let engine = Arc::new(AnalysisEngine::new(TruthLensConfig::default()));
    engine.initialize().unwrap();

    let baseline: Vec<(u8, Vec<String>)> = TEXTS
        .iter()
        .map(|(text, url)| {
            let r = engine.analyze_text(text, *url).unwrap();
            (r.credibility_score(), r.key_findings().to_vec())
        })
        .collect();
    let baseline = Arc::new(baseline);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            let baseline = Arc::clone(&baseline);
            thread::spawn(move || {
                for round in 0..50 {
                    let i = (worker + round) % TEXTS.len();
                    let (text, url) = TEXTS[i];
                    let r = engine.analyze_text(text, url).unwrap();
                    assert_eq!(r.credibility_score(), baseline[i].0);
                    assert_eq!(r.key_findings(), baseline[i].1.as_slice());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn concurrent_initialize_is_safe() {
    let engine = Arc::new(AnalysisEngine::new(TruthLensConfig::default()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.initialize())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert!(engine.is_ready());
}
