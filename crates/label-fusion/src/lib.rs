//! # label-fusion
//!
//! Per-request orchestration: rule engine first, similarity classifier
//! second, both folded through the merge rules into one `LabelSet`.

pub mod engine;
pub mod merge;

pub use engine::{ClassifierSlot, FusionEngine};
pub use merge::{fold_outputs, merge, MergePolicy};
