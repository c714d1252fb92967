//! Span definitions per operation: tagging, classification, embedding.

/// Span wrapping one fusion request.
#[macro_export]
macro_rules! tagging_span {
    ($content_id:expr, $enable_rules:expr, $enable_ml:expr) => {
        tracing::info_span!(
            "label.tagging",
            content_id = %$content_id,
            enable_rules = $enable_rules,
            enable_ml = $enable_ml
        )
    };
}

/// Span wrapping one batch call.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("label.batch", batch_size = $batch_size)
    };
}

/// Span wrapping embedding work (classifier construction, provider selection).
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("label.embedding", provider = %$provider, dimension = $dimension)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TAGGING: &str = "label.tagging";
    pub const BATCH: &str = "label.batch";
    pub const EMBEDDING: &str = "label.embedding";
}
