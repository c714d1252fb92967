use std::sync::Arc;
use std::time::Instant;

use label_classifier::SimilarityClassifier;
use label_core::config::{FusionConfig, LabelRouterConfig};
use label_core::models::{new_content_id, DegradationEvent};
use label_core::traits::ITagger;
use label_core::{LabelResult, LabelSet, Tag, TagRequest, TagResponse};
use label_embeddings::resolve_provider;
use label_observability::{batch_span, embedding_span, tagging_span, HealthReport};
use label_rules::RuleTagger;
use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::merge::{fold_outputs, MergePolicy};

/// State of the ML engine, decided once at construction.
pub enum ClassifierSlot {
    /// ML switched off by configuration; ML requests are silently rule-only.
    Disabled,
    /// ML was wanted but could not be built; ML requests get the failure tag.
    Unavailable { reason: String },
    Ready(Box<dyn ITagger>),
}

/// Runs the rule engine and the classifier for each request and folds
/// their outputs into one `LabelSet`.
///
/// Holds only read-only state after construction, so one engine can serve
/// any number of threads.
pub struct FusionEngine {
    rules: RuleTagger,
    classifier: ClassifierSlot,
    policy: MergePolicy,
    embedding_provider: Option<String>,
    degradations: Vec<DegradationEvent>,
}

impl FusionEngine {
    pub fn new(rules: RuleTagger, classifier: ClassifierSlot, config: &FusionConfig) -> Self {
        let embedding_provider = match &classifier {
            ClassifierSlot::Ready(tagger) => Some(tagger.name().to_string()),
            _ => None,
        };
        Self {
            rules,
            classifier,
            policy: MergePolicy::from(config),
            embedding_provider,
            degradations: Vec::new(),
        }
    }

    /// Rule-only engine.
    pub fn rules_only(rules: RuleTagger, config: &FusionConfig) -> Self {
        Self::new(rules, ClassifierSlot::Disabled, config)
    }

    /// Build everything from configuration: pattern table, provider chain,
    /// and classifier. A classifier that cannot be built leaves the engine
    /// running rule-only; only pattern compilation errors are returned.
    pub fn from_config(config: &LabelRouterConfig) -> LabelResult<Self> {
        let rules = RuleTagger::new()?;
        if !config.fusion.enable_ml {
            info!("ML tagging disabled by configuration");
            return Ok(Self::rules_only(rules, &config.fusion));
        }

        let resolved = match resolve_provider(&config.embedding) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(error = %e, "no embedding provider available, continuing rule-only");
                return Ok(Self::new(
                    rules,
                    ClassifierSlot::Unavailable {
                        reason: e.to_string(),
                    },
                    &config.fusion,
                ));
            }
        };

        let provider_name = resolved.name().to_string();
        let span = embedding_span!(provider_name, resolved.provider.dimensions());
        let built = span.in_scope(|| {
            SimilarityClassifier::new(Arc::clone(&resolved.provider), config.classifier.clone())
        });

        let mut engine = match built {
            Ok(classifier) => {
                Self::new(rules, ClassifierSlot::Ready(Box::new(classifier)), &config.fusion)
            }
            Err(e) => {
                warn!(
                    provider = %provider_name,
                    error = %e,
                    "failed to initialize classifier, continuing rule-only"
                );
                Self::new(
                    rules,
                    ClassifierSlot::Unavailable {
                        reason: e.to_string(),
                    },
                    &config.fusion,
                )
            }
        };
        if engine.has_classifier() {
            engine.embedding_provider = Some(provider_name);
        }
        engine.degradations = resolved.events;
        Ok(engine)
    }

    /// Tag one passage. Never fails: a classifier error becomes a
    /// diagnostic tag and the rule labels are still returned.
    pub fn tag(&self, request: &TagRequest) -> TagResponse {
        let start = Instant::now();
        let content_id = new_content_id();
        let span = tagging_span!(content_id, request.enable_rules, request.enable_ml);
        let _guard = span.enter();

        let mut outputs = Vec::with_capacity(2);
        let mut diagnostics = Vec::new();

        if request.enable_rules {
            outputs.push(self.rules.tag_content(&request.content));
        }

        if request.enable_ml {
            match &self.classifier {
                ClassifierSlot::Disabled => {}
                ClassifierSlot::Unavailable { reason } => {
                    debug!(reason = %reason, "ML requested but classifier unavailable");
                    diagnostics.push(Tag::ml_failure());
                }
                ClassifierSlot::Ready(classifier) => {
                    match classifier.tag_content(&request.content, request.context.as_ref()) {
                        Ok(output) => outputs.push(output),
                        Err(e) => {
                            error!(error = %e, "ML tagging failed");
                            diagnostics.push(Tag::ml_failure());
                        }
                    }
                }
            }
        }

        let mut fused = fold_outputs(outputs, &self.policy);
        fused.custom_tags.extend(diagnostics);
        let label_set = LabelSet::from_output(content_id.clone(), fused);

        debug!(
            content_type = ?label_set.content_type,
            domains = label_set.domains.len(),
            priority = ?label_set.priority,
            stakeholders = label_set.stakeholders.len(),
            custom_tags = label_set.custom_tags.len(),
            "tagging complete"
        );

        TagResponse {
            content_id,
            label_set,
            processing_time: start.elapsed().as_secs_f64(),
        }
    }

    /// Tag many passages with the same flags. Passages are processed in
    /// parallel; responses come back in input order.
    pub fn batch_tag(
        &self,
        contents: &[String],
        enable_ml: bool,
        enable_rules: bool,
    ) -> Vec<TagResponse> {
        let span = batch_span!(contents.len());
        let _guard = span.enter();
        contents
            .par_iter()
            .map(|content| {
                let request = TagRequest::new(content.as_str())
                    .with_ml(enable_ml)
                    .with_rules(enable_rules);
                self.tag(&request)
            })
            .collect()
    }

    pub fn has_classifier(&self) -> bool {
        matches!(self.classifier, ClassifierSlot::Ready(_))
    }

    /// Name of the embedding provider behind the classifier, if any. An
    /// injected classifier reports its own engine name.
    pub fn active_provider(&self) -> Option<&str> {
        self.embedding_provider.as_deref()
    }

    /// Provider degradations recorded while building the engine.
    pub fn degradation_events(&self) -> &[DegradationEvent] {
        &self.degradations
    }

    pub fn health(&self) -> HealthReport {
        HealthReport::new(self.active_provider(), &self.degradations)
    }
}
