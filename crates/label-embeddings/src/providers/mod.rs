//! Provider registry.
//!
//! Priority order for the `http` provider setting:
//! 1. Primary Japanese sentence model on the embedding server
//! 2. Multilingual fallback model on the same server
//! 3. Hashing fallback (always available, lowest quality)

pub mod hashing_fallback;
pub mod http_provider;

pub use hashing_fallback::HashingFallback;
pub use http_provider::HttpEmbeddingProvider;

use std::sync::Arc;
use std::time::Duration;

use label_core::config::EmbeddingConfig;
use label_core::traits::IEmbeddingProvider;
use label_core::{LabelError, LabelResult};

use crate::degradation::ProviderChain;

fn http_candidate(config: &EmbeddingConfig, model: &str, dimensions: usize) -> HttpEmbeddingProvider {
    HttpEmbeddingProvider::new(config.base_url.clone(), model, dimensions)
        .with_health_check_timeout(Duration::from_millis(config.health_check_timeout_ms))
        .with_request_timeout(config.request_timeout_ms.map(Duration::from_millis))
}

/// Build the candidate chain for the configured provider. Nothing is
/// contacted until the chain is resolved.
pub fn create_chain(config: &EmbeddingConfig) -> LabelResult<ProviderChain> {
    let mut chain = ProviderChain::new();
    match config.provider.as_str() {
        "http" => {
            let primary = http_candidate(config, &config.model, config.dimensions);
            chain.push(
                config.model.clone(),
                Box::new(move || Ok(Arc::new(primary.connect()?) as Arc<dyn IEmbeddingProvider>)),
            );

            let fallback =
                http_candidate(config, &config.fallback_model, config.fallback_dimensions);
            chain.push(
                config.fallback_model.clone(),
                Box::new(move || Ok(Arc::new(fallback.connect()?) as Arc<dyn IEmbeddingProvider>)),
            );

            if config.hashing_fallback {
                chain.push_provider(Arc::new(HashingFallback::new(config.hashing_dimensions)));
            }
        }
        "hashing" => {
            chain.push_provider(Arc::new(HashingFallback::new(config.hashing_dimensions)));
        }
        other => {
            return Err(LabelError::Config {
                reason: format!("unknown embedding provider '{other}' (expected http or hashing)"),
            });
        }
    }
    Ok(chain)
}
