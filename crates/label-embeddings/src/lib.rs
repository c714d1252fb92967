//! # label-embeddings
//!
//! Concrete text-to-vector backends for the similarity classifier and the
//! startup chain that picks one of them.

pub mod degradation;
pub mod providers;

pub use degradation::{ProviderChain, ProviderFactory, ResolvedProvider};
pub use providers::{create_chain, HashingFallback, HttpEmbeddingProvider};

use label_core::config::EmbeddingConfig;
use label_core::LabelResult;

/// Build the configured chain and select its first available provider.
pub fn resolve_provider(config: &EmbeddingConfig) -> LabelResult<ResolvedProvider> {
    create_chain(config)?.resolve()
}
