use crate::errors::LabelResult;

/// Embedding generation provider: text in, fixed-length vector out.
///
/// Implementations must be safe for concurrent invocation; the classifier
/// calls `embed` from whichever thread is serving the request.
///
/// Calls are blocking. Callers on an async runtime should expect the
/// current worker thread to be held for the duration of the call, and
/// implementations must not assume they run outside a runtime.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> LabelResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> LabelResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
