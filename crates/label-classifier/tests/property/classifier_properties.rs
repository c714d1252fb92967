use std::sync::Arc;

use label_classifier::{cosine_similarity, SimilarityClassifier};
use label_core::config::ClassifierConfig;
use label_embeddings::HashingFallback;
use proptest::prelude::*;

proptest! {
    #[test]
    fn cosine_is_bounded(
        a in prop::collection::vec(-100.0f32..100.0, 1..16),
        b in prop::collection::vec(-100.0f32..100.0, 1..16),
    ) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&sim));
    }

    #[test]
    fn cosine_is_symmetric(
        a in prop::collection::vec(-10.0f32..10.0, 8),
        b in prop::collection::vec(-10.0f32..10.0, 8),
    ) {
        prop_assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn confidences_in_unit_interval_and_limits_hold(
        text in "[安全品質工程決定課題至急発注者設計のとがを、]{0,30}",
        max in 1usize..4,
    ) {
        let config = ClassifierConfig { max_multi_labels: max, ..Default::default() };
        let classifier =
            SimilarityClassifier::new(Arc::new(HashingFallback::new(128)), config).unwrap();
        let out = classifier.classify(&text).unwrap();

        prop_assert!(out.domains.len() <= max);
        prop_assert!(out.stakeholders.len() <= max);
        for tag in &out.custom_tags {
            let c = tag.confidence.value();
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }
}
