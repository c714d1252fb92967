mod embedding_error;

pub use embedding_error::EmbeddingError;

/// Root error type for label-router.
///
/// Only construction-time problems and embedding failures surface here.
/// Request-time classifier failures are absorbed by the fusion engine and
/// reported as diagnostic tags instead.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("pattern '{name}' failed to compile: {reason}")]
    Pattern { name: String, reason: String },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("classifier error: {reason}")]
    Classifier { reason: String },

    #[error("unknown {vocabulary} label: {value}")]
    UnknownLabel { vocabulary: String, value: String },
}

pub type LabelResult<T> = Result<T, LabelError>;
