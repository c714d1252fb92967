mod embedding;
mod tagger;

pub use embedding::IEmbeddingProvider;
pub use tagger::ITagger;
