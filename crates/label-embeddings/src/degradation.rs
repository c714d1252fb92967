//! Startup fallback chain for embedding providers.
//!
//! Chain: primary model → multilingual fallback model → hashing fallback.
//! Candidates are built lazily in order; the first one that comes up
//! available is selected, and every candidate skipped on the way is logged
//! and recorded as a degradation event. Selection happens once, before any
//! request is served.

use std::sync::Arc;

use chrono::Utc;
use label_core::constants::EMBEDDINGS_COMPONENT;
use label_core::models::DegradationEvent;
use label_core::traits::IEmbeddingProvider;
use label_core::{EmbeddingError, LabelResult};
use tracing::{info, warn};

/// Builds one candidate provider. Errors mean the candidate is unusable.
pub type ProviderFactory =
    Box<dyn FnOnce() -> LabelResult<Arc<dyn IEmbeddingProvider>> + Send>;

struct Candidate {
    name: String,
    factory: ProviderFactory,
}

/// Ordered list of provider candidates.
#[derive(Default)]
pub struct ProviderChain {
    candidates: Vec<Candidate>,
}

/// The provider chosen at startup plus the degradations it took to get there.
pub struct ResolvedProvider {
    pub provider: Arc<dyn IEmbeddingProvider>,
    pub events: Vec<DegradationEvent>,
}

impl ResolvedProvider {
    pub fn name(&self) -> &str {
        self.provider.name()
    }

    /// Whether a lower-priority candidate had to be used.
    pub fn is_degraded(&self) -> bool {
        !self.events.is_empty()
    }
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lazily built candidate to the end of the chain.
    pub fn push(&mut self, name: impl Into<String>, factory: ProviderFactory) {
        self.candidates.push(Candidate {
            name: name.into(),
            factory,
        });
    }

    /// Add an already built provider to the end of the chain.
    pub fn push_provider(&mut self, provider: Arc<dyn IEmbeddingProvider>) {
        let name = provider.name().to_string();
        self.push(name, Box::new(move || Ok(provider)));
    }

    /// Number of candidates in the chain.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Select the first candidate that builds and reports itself available.
    pub fn resolve(self) -> LabelResult<ResolvedProvider> {
        let total = self.candidates.len();
        let mut skipped: Vec<(String, String)> = Vec::new();
        let mut last_error = None;

        for candidate in self.candidates {
            let failure = match (candidate.factory)() {
                Ok(provider) if provider.is_available() => {
                    let events = skipped
                        .into_iter()
                        .map(|(name, reason)| DegradationEvent {
                            component: EMBEDDINGS_COMPONENT.to_string(),
                            failure: format!("{name} unavailable: {reason}"),
                            fallback_used: provider.name().to_string(),
                            timestamp: Utc::now(),
                        })
                        .collect();
                    info!(
                        provider = provider.name(),
                        dimensions = provider.dimensions(),
                        "embedding provider selected"
                    );
                    return Ok(ResolvedProvider { provider, events });
                }
                Ok(_) => "reported unavailable".to_string(),
                Err(e) => {
                    let reason = e.to_string();
                    last_error = Some(e);
                    reason
                }
            };
            warn!(
                provider = %candidate.name,
                reason = %failure,
                "embedding provider unavailable, trying next in chain"
            );
            skipped.push((candidate.name, failure));
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("all {total} providers failed"),
            }
            .into()
        }))
    }
}
