use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "http" or "hashing".
    pub provider: String,
    /// Base URL of the HTTP embedding server.
    pub base_url: String,
    /// Primary (Japanese) sentence embedding model.
    pub model: String,
    /// Output dimensions of the primary model.
    pub dimensions: usize,
    /// Multilingual model used when the primary model is unavailable.
    pub fallback_model: String,
    /// Output dimensions of the fallback model.
    pub fallback_dimensions: usize,
    /// Append the hashing provider as a last resort.
    pub hashing_fallback: bool,
    /// Output dimensions of the hashing provider.
    pub hashing_dimensions: usize,
    /// Timeout for the startup health check.
    pub health_check_timeout_ms: u64,
    /// Optional per-request timeout. Unset means no timeout.
    pub request_timeout_ms: Option<u64>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            base_url: defaults::DEFAULT_EMBEDDING_BASE_URL.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            fallback_model: defaults::DEFAULT_FALLBACK_MODEL.to_string(),
            fallback_dimensions: defaults::DEFAULT_FALLBACK_DIMENSIONS,
            hashing_fallback: defaults::DEFAULT_HASHING_FALLBACK,
            hashing_dimensions: defaults::DEFAULT_HASHING_DIMENSIONS,
            health_check_timeout_ms: defaults::DEFAULT_HEALTH_CHECK_TIMEOUT_MS,
            request_timeout_ms: None,
        }
    }
}
