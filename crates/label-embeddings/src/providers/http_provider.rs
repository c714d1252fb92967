//! Embedding server provider.
//!
//! Talks to an Ollama-compatible HTTP server (`/api/tags`, `/api/embed`).
//! The provider starts unavailable and must pass `health_check` first; the
//! check also confirms the configured model is served.
//!
//! Calls are blocking. Inside a tokio runtime the request is driven on a
//! scoped thread that owns its own runtime, so callers on async worker
//! threads are blocked but never panic.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use label_core::traits::IEmbeddingProvider;
use label_core::{EmbeddingError, LabelResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// HTTP embedding provider for one model on one server.
pub struct HttpEmbeddingProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    health_check_timeout: Duration,
    request_timeout: Option<Duration>,
    available: AtomicBool,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ServedModel>,
}

#[derive(Debug, Deserialize)]
struct ServedModel {
    name: String,
}

impl TagsResponse {
    /// Servers report names with an optional `:tag` suffix.
    fn serves(&self, model: &str) -> bool {
        self.models.iter().any(|m| {
            m.name == model
                || m.name
                    .strip_prefix(model)
                    .is_some_and(|rest| rest.starts_with(':'))
        })
    }
}

impl HttpEmbeddingProvider {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, dimensions: usize) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            dimensions,
            health_check_timeout: Duration::from_secs(5),
            request_timeout: None,
            available: AtomicBool::new(false),
        }
    }

    pub fn with_health_check_timeout(mut self, timeout: Duration) -> Self {
        self.health_check_timeout = timeout;
        self
    }

    /// Per-request timeout for `/api/embed`. No timeout when unset.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Run the health check, returning the provider only if it passed.
    pub fn connect(self) -> LabelResult<Self> {
        self.health_check()?;
        Ok(self)
    }

    fn runtime() -> LabelResult<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("runtime error: {e}"),
                }
                .into()
            })
    }

    /// Drive `fut` to completion from synchronous code.
    fn block_on<F, T>(fut: F) -> LabelResult<T>
    where
        F: Future<Output = LabelResult<T>> + Send,
        T: Send,
    {
        if tokio::runtime::Handle::try_current().is_err() {
            return Self::runtime()?.block_on(fut);
        }
        // Nested block_on panics; run on a thread outside the caller's runtime.
        thread::scope(|scope| {
            scope
                .spawn(|| Self::runtime()?.block_on(fut))
                .join()
                .unwrap_or_else(|_| {
                    Err(EmbeddingError::InferenceFailed {
                        reason: "embedding request thread panicked".to_string(),
                    }
                    .into())
                })
        })
    }

    async fn fetch_tags(&self) -> LabelResult<TagsResponse> {
        let url = format!("{}/api/tags", self.base_url);
        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .timeout(self.health_check_timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "embedding server unreachable");
                EmbeddingError::ProviderUnavailable {
                    provider: self.model.clone(),
                }
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "embedding server health check failed");
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.model.clone(),
            }
            .into());
        }

        let tags = response
            .json::<TagsResponse>()
            .await
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                model: self.model.clone(),
                reason: format!("unreadable model list: {e}"),
            })?;
        Ok(tags)
    }

    /// Check that the server is reachable and serves the configured model.
    pub fn health_check(&self) -> LabelResult<()> {
        let served = match Self::block_on(self.fetch_tags()) {
            Ok(tags) => tags.serves(&self.model),
            Err(e) => {
                self.available.store(false, Ordering::Relaxed);
                return Err(e);
            }
        };

        if !served {
            self.available.store(false, Ordering::Relaxed);
            return Err(EmbeddingError::ModelLoadFailed {
                model: self.model.clone(),
                reason: format!("not served by {}", self.base_url),
            }
            .into());
        }

        self.available.store(true, Ordering::Relaxed);
        debug!(model = %self.model, "embedding server health check passed");
        Ok(())
    }

    async fn fetch_embeddings(&self, texts: Vec<String>) -> LabelResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.base_url);
        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        let client = reqwest::Client::new();
        let mut builder = client.post(&url).json(&request);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("embedding server HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("embedding server returned {status}: {body}"),
            }
            .into());
        }

        let resp: EmbedResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("embedding server JSON parse error: {e}"),
                })?;
        Ok(resp.embeddings)
    }

    fn request_embeddings(&self, texts: Vec<String>) -> LabelResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let expected = texts.len();
        let embeddings = Self::block_on(self.fetch_embeddings(texts))?;

        if embeddings.len() != expected {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("expected {expected} embeddings, got {}", embeddings.len()),
            }
            .into());
        }
        if let Some(bad) = embeddings.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }
            .into());
        }
        Ok(embeddings)
    }
}

impl IEmbeddingProvider for HttpEmbeddingProvider {
    fn embed(&self, text: &str) -> LabelResult<Vec<f32>> {
        let results = self.request_embeddings(vec![text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty embedding response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> LabelResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts.to_vec())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
