//! Golden datasets shared by the TruthLens test suites.
//!
//! Paths are relative to this crate's directory, which is fixed at compile
//! time, so every workspace crate addresses fixtures the same way.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

const SCENARIO_DIR: &str = "golden/analysis";
const SCENARIO_PREFIX: &str = "scenario_";

fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Read `path` and parse it as JSON into `T`.
///
/// # Panics
/// On I/O or parse failure, naming the file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse {}: {e}", path.display()))
}

/// [`load_json`] on a path under the fixtures root.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    load_json(&fixture_path(relative_path))
}

pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// `*.json` files directly under `subdir`, sorted. A missing directory is empty.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixture_path(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioInput {
    pub text: String,
    pub url: Option<String>,
}

/// One `golden/analysis/scenario_*.json` file. `expected` mirrors the
/// serialized result, minus timing.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub description: String,
    pub input: ScenarioInput,
    pub expected: serde_json::Value,
}

/// Every golden analysis scenario, in file-name order.
pub fn load_golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures(SCENARIO_DIR)
        .into_iter()
        .filter(|path| is_scenario(path))
        .map(|path| load_json(&path))
        .collect()
}

fn is_scenario(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(SCENARIO_PREFIX))
}
