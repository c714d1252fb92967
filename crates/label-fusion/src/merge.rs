//! Pure merge rules for folding engine outputs into one label set.
//!
//! | field        | rule                                                    |
//! |--------------|---------------------------------------------------------|
//! | content_type | keep current; an ml output overrides only above policy  |
//! | domains      | union                                                   |
//! | priority     | highest wins                                            |
//! | stakeholders | union                                                   |
//! | custom_tags  | append in order, never deduplicated                     |

use label_core::config::defaults::DEFAULT_CONTENT_TYPE_OVERRIDE_THRESHOLD;
use label_core::config::FusionConfig;
use label_core::constants::CONFIDENCE_KEY_CONTENT_TYPE;
use label_core::{EngineOutput, TagSource};

/// Conflict-resolution parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergePolicy {
    /// An ml content type replaces an existing one only when its recorded
    /// confidence is strictly greater than this.
    pub content_type_override_threshold: f64,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            content_type_override_threshold: DEFAULT_CONTENT_TYPE_OVERRIDE_THRESHOLD,
        }
    }
}

impl From<&FusionConfig> for MergePolicy {
    fn from(config: &FusionConfig) -> Self {
        Self {
            content_type_override_threshold: config.content_type_override_threshold,
        }
    }
}

/// Fold `incoming` into `acc`.
pub fn merge(mut acc: EngineOutput, incoming: EngineOutput, policy: &MergePolicy) -> EngineOutput {
    if let Some(content_type) = incoming.content_type {
        let overrides = incoming.source == TagSource::Ml
            && incoming
                .recorded_confidence(CONFIDENCE_KEY_CONTENT_TYPE)
                .unwrap_or(0.0)
                > policy.content_type_override_threshold;
        if acc.content_type.is_none() || overrides {
            acc.content_type = Some(content_type);
        }
    }

    acc.domains.extend(incoming.domains);
    acc.priority = acc.priority.max(incoming.priority);
    acc.stakeholders.extend(incoming.stakeholders);
    acc.custom_tags.extend(incoming.custom_tags);
    acc
}

/// Fold outputs in order, starting from an empty system output.
pub fn fold_outputs<I>(outputs: I, policy: &MergePolicy) -> EngineOutput
where
    I: IntoIterator<Item = EngineOutput>,
{
    outputs
        .into_iter()
        .fold(EngineOutput::empty(TagSource::System), |acc, out| {
            merge(acc, out, policy)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_core::{ContentType, Domain, Priority, Stakeholder, Tag};

    fn rule_output(content_type: Option<ContentType>, priority: Option<Priority>) -> EngineOutput {
        let mut out = EngineOutput::empty(TagSource::Rule);
        out.content_type = content_type;
        out.priority = priority;
        out
    }

    fn ml_output(content_type: ContentType, confidence: f64) -> EngineOutput {
        let mut out = EngineOutput::empty(TagSource::Ml);
        out.content_type = Some(content_type);
        out.custom_tags
            .push(Tag::ml_confidence(CONFIDENCE_KEY_CONTENT_TYPE, confidence));
        out
    }

    fn fused(outputs: Vec<EngineOutput>) -> EngineOutput {
        fold_outputs(outputs, &MergePolicy::default())
    }

    #[test]
    fn first_content_type_is_kept() {
        let out = fused(vec![rule_output(Some(ContentType::Issue), None)]);
        assert_eq!(out.content_type, Some(ContentType::Issue));
        assert_eq!(out.source, TagSource::System);
    }

    #[test]
    fn ml_at_threshold_does_not_override() {
        let out = fused(vec![
            rule_output(Some(ContentType::Decision), None),
            ml_output(ContentType::Issue, 0.7),
        ]);
        assert_eq!(out.content_type, Some(ContentType::Decision));
    }

    #[test]
    fn ml_just_above_threshold_overrides() {
        let out = fused(vec![
            rule_output(Some(ContentType::Decision), None),
            ml_output(ContentType::Issue, 0.70001),
        ]);
        assert_eq!(out.content_type, Some(ContentType::Issue));
    }

    #[test]
    fn override_reads_numeric_confidence_not_rounded_string() {
        // 0.704 renders as "content_type:0.70" but is still above 0.7.
        let ml = ml_output(ContentType::Issue, 0.704);
        assert_eq!(ml.custom_tags[0].value, "content_type:0.70");
        let out = fused(vec![rule_output(Some(ContentType::Decision), None), ml]);
        assert_eq!(out.content_type, Some(ContentType::Issue));
    }

    #[test]
    fn ml_fills_missing_content_type_at_any_confidence() {
        let out = fused(vec![rule_output(None, None), ml_output(ContentType::Discussion, 0.61)]);
        assert_eq!(out.content_type, Some(ContentType::Discussion));
    }

    #[test]
    fn rule_output_never_overrides() {
        let out = fused(vec![
            ml_output(ContentType::Issue, 0.65),
            rule_output(Some(ContentType::Decision), None),
        ]);
        assert_eq!(out.content_type, Some(ContentType::Issue));
    }

    #[test]
    fn ml_without_confidence_record_does_not_override() {
        let mut ml = EngineOutput::empty(TagSource::Ml);
        ml.content_type = Some(ContentType::Issue);
        let out = fused(vec![rule_output(Some(ContentType::Decision), None), ml]);
        assert_eq!(out.content_type, Some(ContentType::Decision));
    }

    #[test]
    fn highest_priority_wins_in_either_order() {
        let low_then_high = fused(vec![
            rule_output(None, Some(Priority::Low)),
            rule_output(None, Some(Priority::High)),
        ]);
        let high_then_low = fused(vec![
            rule_output(None, Some(Priority::High)),
            rule_output(None, Some(Priority::Low)),
        ]);
        assert_eq!(low_then_high.priority, Some(Priority::High));
        assert_eq!(high_then_low.priority, Some(Priority::High));
    }

    #[test]
    fn sets_union_and_tags_append() {
        let mut a = EngineOutput::empty(TagSource::Rule);
        a.domains.insert(Domain::Safety);
        a.stakeholders.insert(Stakeholder::Client);
        a.custom_tags.push(Tag::rule("location", "現場"));

        let mut b = EngineOutput::empty(TagSource::Ml);
        b.domains.insert(Domain::Safety);
        b.domains.insert(Domain::Quality);
        b.stakeholders.insert(Stakeholder::Client);
        b.custom_tags.push(Tag::rule("location", "現場"));

        let out = fused(vec![a, b]);
        assert_eq!(out.domains.len(), 2);
        assert_eq!(out.stakeholders.len(), 1);
        assert_eq!(out.custom_tags.len(), 2);
    }

    #[test]
    fn empty_fold_is_empty() {
        assert!(fused(Vec::new()).is_empty());
    }

    #[test]
    fn policy_follows_config() {
        let config = FusionConfig {
            content_type_override_threshold: 0.9,
            ..Default::default()
        };
        let policy = MergePolicy::from(&config);
        let out = fold_outputs(
            vec![
                rule_output(Some(ContentType::Decision), None),
                ml_output(ContentType::Issue, 0.85),
            ],
            &policy,
        );
        assert_eq!(out.content_type, Some(ContentType::Decision));
    }
}
