//! # label-rules
//!
//! Deterministic pattern engine.
//! Compiles the per-category pattern tables once and labels passages by
//! lexical evidence: content type by match count, domains and stakeholders
//! by presence, priority by first hit in HIGH, MEDIUM, LOW order, plus
//! date/amount/percentage/location extraction.

pub mod engine;
pub mod patterns;

pub use engine::RuleTagger;
pub use patterns::{PatternSources, PatternTable};
