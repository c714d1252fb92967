use serde::{Deserialize, Serialize};

use super::defaults;

/// Fusion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Build the similarity classifier at startup.
    pub enable_ml: bool,
    /// ML content type replaces a rule content type only above this confidence.
    pub content_type_override_threshold: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            enable_ml: defaults::DEFAULT_FUSION_ENABLE_ML,
            content_type_override_threshold: defaults::DEFAULT_CONTENT_TYPE_OVERRIDE_THRESHOLD,
        }
    }
}
