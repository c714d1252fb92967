pub mod classifier_config;
pub mod defaults;
pub mod embedding_config;
pub mod fusion_config;
pub mod observability_config;

pub use classifier_config::ClassifierConfig;
pub use embedding_config::EmbeddingConfig;
pub use fusion_config::FusionConfig;
pub use observability_config::ObservabilityConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LabelError, LabelResult};

/// Top-level configuration. Every section falls back to its defaults when
/// omitted from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelRouterConfig {
    pub embedding: EmbeddingConfig,
    pub classifier: ClassifierConfig,
    pub fusion: FusionConfig,
    pub observability: ObservabilityConfig,
}

impl LabelRouterConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(source: &str) -> LabelResult<Self> {
        toml::from_str(source).map_err(|e| LabelError::Config {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: &Path) -> LabelResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| LabelError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }
}
