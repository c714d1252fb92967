use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity classifier thresholds.
///
/// Single-label categories accept the best match only at or above their
/// threshold. Multi-label categories keep every value at or above the
/// threshold, capped at `max_multi_labels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub content_type_threshold: f64,
    pub priority_threshold: f64,
    pub domain_threshold: f64,
    pub stakeholder_threshold: f64,
    pub max_multi_labels: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            content_type_threshold: defaults::DEFAULT_CONTENT_TYPE_THRESHOLD,
            priority_threshold: defaults::DEFAULT_PRIORITY_THRESHOLD,
            domain_threshold: defaults::DEFAULT_DOMAIN_THRESHOLD,
            stakeholder_threshold: defaults::DEFAULT_STAKEHOLDER_THRESHOLD,
            max_multi_labels: defaults::DEFAULT_MAX_MULTI_LABELS,
        }
    }
}
