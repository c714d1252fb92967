use std::collections::BTreeSet;

use label_core::{ContentType, Domain, EngineOutput, Priority, Stakeholder, Tag, TagSource};
use label_fusion::{fold_outputs, MergePolicy};
use proptest::prelude::*;

fn source() -> impl Strategy<Value = TagSource> {
    prop::sample::select(vec![TagSource::Rule, TagSource::Ml])
}

fn engine_output() -> impl Strategy<Value = EngineOutput> {
    (
        source(),
        prop::option::of(prop::sample::select(ContentType::ALL.to_vec())),
        prop::collection::btree_set(prop::sample::select(Domain::ALL.to_vec()), 0..4),
        prop::option::of(prop::sample::select(Priority::ALL.to_vec())),
        prop::collection::btree_set(prop::sample::select(Stakeholder::ALL.to_vec()), 0..3),
        0.0f64..=1.0,
        0usize..3,
    )
        .prop_map(
            |(source, content_type, domains, priority, stakeholders, confidence, extra)| {
                let mut custom_tags = Vec::new();
                if source == TagSource::Ml && content_type.is_some() {
                    custom_tags.push(Tag::ml_confidence("content_type", confidence));
                }
                for i in 0..extra {
                    custom_tags.push(Tag::rule("amount", format!("{i}00万円")));
                }
                EngineOutput {
                    source,
                    content_type,
                    domains,
                    priority,
                    stakeholders,
                    custom_tags,
                }
            },
        )
}

proptest! {
    #[test]
    fn fused_priority_is_the_maximum(outputs in prop::collection::vec(engine_output(), 0..5)) {
        let expected = outputs.iter().filter_map(|o| o.priority).max();
        let fused = fold_outputs(outputs, &MergePolicy::default());
        prop_assert_eq!(fused.priority, expected);
    }

    #[test]
    fn sets_are_unions_and_tags_are_kept(outputs in prop::collection::vec(engine_output(), 0..5)) {
        let domains: BTreeSet<Domain> = outputs.iter().flat_map(|o| o.domains.iter().copied()).collect();
        let stakeholders: BTreeSet<Stakeholder> =
            outputs.iter().flat_map(|o| o.stakeholders.iter().copied()).collect();
        let tag_count: usize = outputs.iter().map(|o| o.custom_tags.len()).sum();

        let fused = fold_outputs(outputs, &MergePolicy::default());
        prop_assert_eq!(fused.domains, domains);
        prop_assert_eq!(fused.stakeholders, stakeholders);
        prop_assert_eq!(fused.custom_tags.len(), tag_count);
        prop_assert!(fused
            .custom_tags
            .iter()
            .all(|t| (0.0..=1.0).contains(&t.confidence.value())));
    }

    #[test]
    fn content_type_comes_from_some_input(outputs in prop::collection::vec(engine_output(), 0..5)) {
        let candidates: Vec<ContentType> = outputs.iter().filter_map(|o| o.content_type).collect();
        let fused = fold_outputs(outputs, &MergePolicy::default());
        match fused.content_type {
            Some(ct) => prop_assert!(candidates.contains(&ct)),
            None => prop_assert!(candidates.is_empty()),
        }
    }

    #[test]
    fn rule_outputs_never_override_a_set_content_type(
        first in prop::sample::select(ContentType::ALL.to_vec()),
        second in prop::sample::select(ContentType::ALL.to_vec()),
    ) {
        let mut a = EngineOutput::empty(TagSource::Rule);
        a.content_type = Some(first);
        let mut b = EngineOutput::empty(TagSource::Rule);
        b.content_type = Some(second);
        let fused = fold_outputs(vec![a, b], &MergePolicy::default());
        prop_assert_eq!(fused.content_type, Some(first));
    }
}
