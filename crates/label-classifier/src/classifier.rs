use std::cmp::Ordering;
use std::sync::Arc;

use label_core::config::ClassifierConfig;
use label_core::constants::{
    CONFIDENCE_KEY_CONTENT_TYPE, CONFIDENCE_KEY_DOMAIN, CONFIDENCE_KEY_OVERALL,
    CONFIDENCE_KEY_PRIORITY, CONFIDENCE_KEY_STAKEHOLDER,
};
use label_core::models::TagContext;
use label_core::traits::{IEmbeddingProvider, ITagger};
use label_core::{
    EmbeddingError, EngineOutput, LabelError, LabelResult, Tag, TagSource, Vocabulary,
};
use tracing::{debug, info};

use crate::references::ReferenceSet;
use crate::similarity::{cosine_similarity, mean_vector};

/// Mean exemplar embedding for one label value.
#[derive(Debug, Clone)]
struct ReferenceVector<T> {
    value: T,
    vector: Vec<f32>,
}

struct ReferenceVectors {
    content_types: Vec<ReferenceVector<label_core::ContentType>>,
    domains: Vec<ReferenceVector<label_core::Domain>>,
    priorities: Vec<ReferenceVector<label_core::Priority>>,
    stakeholders: Vec<ReferenceVector<label_core::Stakeholder>>,
}

/// Labels text by cosine similarity between its embedding and the mean
/// exemplar embedding of every label value.
///
/// Reference vectors are computed once at construction; each request costs
/// one embedding call.
pub struct SimilarityClassifier {
    provider: Arc<dyn IEmbeddingProvider>,
    references: ReferenceVectors,
    config: ClassifierConfig,
}

impl SimilarityClassifier {
    /// Build over the construction-meeting exemplars.
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: ClassifierConfig) -> LabelResult<Self> {
        Self::with_references(provider, &ReferenceSet::construction_defaults(), config)
    }

    /// Build over a custom exemplar set. Fails if any exemplar cannot be
    /// embedded or the embeddings do not match the provider's dimensions.
    pub fn with_references(
        provider: Arc<dyn IEmbeddingProvider>,
        references: &ReferenceSet,
        config: ClassifierConfig,
    ) -> LabelResult<Self> {
        let dimensions = provider.dimensions();
        let references = ReferenceVectors {
            content_types: encode_category(provider.as_ref(), dimensions, &references.content_types)?,
            domains: encode_category(provider.as_ref(), dimensions, &references.domains)?,
            priorities: encode_category(provider.as_ref(), dimensions, &references.priorities)?,
            stakeholders: encode_category(provider.as_ref(), dimensions, &references.stakeholders)?,
        };
        info!(
            provider = provider.name(),
            dimensions,
            references = references.content_types.len()
                + references.domains.len()
                + references.priorities.len()
                + references.stakeholders.len(),
            "SimilarityClassifier initialized"
        );
        Ok(Self {
            provider,
            references,
            config,
        })
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    /// Classify one passage. Embedding failures are returned as errors.
    pub fn classify(&self, text: &str) -> LabelResult<EngineOutput> {
        let query = self.provider.embed(text)?;
        if query.len() != self.dimensions() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions(),
                actual: query.len(),
            }
            .into());
        }

        let mut output = EngineOutput::empty(TagSource::Ml);
        let cfg = &self.config;

        if let Some((value, score)) =
            best_match(&self.references.content_types, &query, cfg.content_type_threshold)
        {
            output.content_type = Some(value);
            output
                .custom_tags
                .push(Tag::ml_confidence(CONFIDENCE_KEY_CONTENT_TYPE, score));
        }

        for (value, score) in matches_above(
            &self.references.domains,
            &query,
            cfg.domain_threshold,
            cfg.max_multi_labels,
        ) {
            output.domains.insert(value);
            output.custom_tags.push(Tag::ml_confidence(
                &format!("{CONFIDENCE_KEY_DOMAIN}_{}", value.label()),
                score,
            ));
        }

        if let Some((value, score)) =
            best_match(&self.references.priorities, &query, cfg.priority_threshold)
        {
            output.priority = Some(value);
            output
                .custom_tags
                .push(Tag::ml_confidence(CONFIDENCE_KEY_PRIORITY, score));
        }

        for (value, score) in matches_above(
            &self.references.stakeholders,
            &query,
            cfg.stakeholder_threshold,
            cfg.max_multi_labels,
        ) {
            output.stakeholders.insert(value);
            output.custom_tags.push(Tag::ml_confidence(
                &format!("{CONFIDENCE_KEY_STAKEHOLDER}_{}", value.label()),
                score,
            ));
        }

        let overall = if output.custom_tags.is_empty() {
            0.0
        } else {
            output
                .custom_tags
                .iter()
                .map(|t| t.confidence.value())
                .sum::<f64>()
                / output.custom_tags.len() as f64
        };
        output
            .custom_tags
            .push(Tag::ml_confidence(CONFIDENCE_KEY_OVERALL, overall));

        debug!(
            content_type = ?output.content_type,
            domains = output.domains.len(),
            priority = ?output.priority,
            stakeholders = output.stakeholders.len(),
            overall,
            "similarity classification complete"
        );
        Ok(output)
    }
}

impl ITagger for SimilarityClassifier {
    fn source(&self) -> TagSource {
        TagSource::Ml
    }

    fn tag_content(&self, text: &str, _context: Option<&TagContext>) -> LabelResult<EngineOutput> {
        self.classify(text)
    }

    fn name(&self) -> &str {
        "similarity-classifier"
    }
}

fn encode_category<T: Vocabulary>(
    provider: &dyn IEmbeddingProvider,
    dimensions: usize,
    entries: &[(T, Vec<String>)],
) -> LabelResult<Vec<ReferenceVector<T>>> {
    entries
        .iter()
        .map(|(value, exemplars)| {
            let vectors = provider.embed_batch(exemplars)?;
            if vectors.len() != exemplars.len() {
                return Err(LabelError::Classifier {
                    reason: format!(
                        "{}:{} expected {} exemplar embeddings, got {}",
                        T::NAME,
                        value.key(),
                        exemplars.len(),
                        vectors.len()
                    ),
                });
            }
            if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dimensions,
                    actual: bad.len(),
                }
                .into());
            }
            let vector = mean_vector(&vectors).ok_or_else(|| LabelError::Classifier {
                reason: format!("{}:{} has no exemplars", T::NAME, value.key()),
            })?;
            Ok(ReferenceVector {
                value: *value,
                vector,
            })
        })
        .collect()
}

/// Highest-similarity value, accepted only at or above `threshold`. Only a
/// strictly greater score replaces the current best, so ties keep the value
/// listed first; non-positive similarities never match.
fn best_match<T: Copy>(
    references: &[ReferenceVector<T>],
    query: &[f32],
    threshold: f64,
) -> Option<(T, f64)> {
    let mut best: Option<T> = None;
    let mut best_score = 0.0;
    for reference in references {
        let score = cosine_similarity(query, &reference.vector);
        if score > best_score {
            best_score = score;
            best = Some(reference.value);
        }
    }
    best.filter(|_| best_score >= threshold)
        .map(|value| (value, best_score))
}

/// Every value at or above `threshold`, highest first (stable), at most
/// `limit` of them.
fn matches_above<T: Copy>(
    references: &[ReferenceVector<T>],
    query: &[f32],
    threshold: f64,
    limit: usize,
) -> Vec<(T, f64)> {
    let mut scores: Vec<(T, f64)> = references
        .iter()
        .map(|r| (r.value, cosine_similarity(query, &r.vector)))
        .filter(|(_, score)| *score >= threshold)
        .collect();
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scores.truncate(limit);
    scores
}
