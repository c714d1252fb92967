//! # label-classifier
//!
//! Embedding-similarity classifier. Each label value is represented by the
//! mean embedding of its exemplar phrases; a passage takes the values whose
//! reference vectors it is cosine-similar enough to.

pub mod classifier;
pub mod references;
pub mod similarity;

pub use classifier::SimilarityClassifier;
pub use references::ReferenceSet;
pub use similarity::cosine_similarity;
