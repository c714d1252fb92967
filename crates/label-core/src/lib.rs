//! # label-core
//!
//! Foundation crate for label-router.
//! Defines the label vocabularies, tag models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LabelRouterConfig;
pub use errors::{EmbeddingError, LabelError, LabelResult};
pub use models::{
    Confidence, ContentType, Domain, EngineOutput, LabelSet, Priority, Stakeholder, Tag,
    TagRequest, TagResponse, TagSource, Vocabulary,
};
