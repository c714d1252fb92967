//! Test fixtures for label-router: stub embedding providers and engines,
//! sample meeting passages, and loaders for the golden datasets under
//! `golden/`.

pub mod providers;
pub mod samples;
pub mod taggers;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use providers::{FailingProvider, KeywordProvider, SwitchableProvider};
pub use taggers::{FailingTagger, FixedTagger};

/// Root directory of the golden datasets.
fn golden_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file relative to `golden/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = golden_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    golden_root().join(relative_path)
}
