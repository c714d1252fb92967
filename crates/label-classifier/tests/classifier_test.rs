//! Classifier over the hashing fallback provider and the default exemplars.

use std::sync::Arc;

use label_classifier::{ReferenceSet, SimilarityClassifier};
use label_core::config::ClassifierConfig;
use label_core::constants::{CATEGORY_ML_CONFIDENCE, CONFIDENCE_KEY_OVERALL};
use label_core::traits::ITagger;
use label_core::{ContentType, TagSource};
use label_embeddings::HashingFallback;
use test_fixtures::samples;

fn hashing_classifier() -> SimilarityClassifier {
    SimilarityClassifier::new(
        Arc::new(HashingFallback::new(256)),
        ClassifierConfig::default(),
    )
    .unwrap()
}

#[test]
fn default_exemplars_build_with_hashing_provider() {
    let classifier = hashing_classifier();
    assert_eq!(classifier.provider_name(), "hashing-fallback");
    assert_eq!(classifier.dimensions(), 256);
}

#[test]
fn every_sample_yields_well_formed_output() {
    let classifier = hashing_classifier();
    for text in samples::ALL {
        let out = classifier.classify(text).unwrap();
        assert_eq!(out.source, TagSource::Ml);
        assert!(out.domains.len() <= 3);
        assert!(out.stakeholders.len() <= 3);

        let last = out.custom_tags.last().expect("overall tag");
        assert!(last.is_confidence_for(CONFIDENCE_KEY_OVERALL));
        for tag in &out.custom_tags {
            assert_eq!(tag.category, CATEGORY_ML_CONFIDENCE);
            assert_eq!(tag.source, TagSource::Ml);
            let c = tag.confidence.value();
            assert!((0.0..=1.0).contains(&c), "{}: {c}", tag.value);
        }
    }
}

#[test]
fn passage_identical_to_exemplars_matches_with_full_confidence() {
    let mut refs = ReferenceSet::construction_defaults();
    let phrase = samples::DECISION_WITH_DATE.to_string();
    refs.content_types[0].1 = vec![phrase.clone(); 4];

    let classifier = SimilarityClassifier::with_references(
        Arc::new(HashingFallback::new(256)),
        &refs,
        ClassifierConfig::default(),
    )
    .unwrap();

    let out = classifier.tag_content(&phrase, None).unwrap();
    assert_eq!(out.content_type, Some(ContentType::Decision));
    let score = out.recorded_confidence("content_type").unwrap();
    assert!((score - 1.0).abs() < 1e-6);
    assert_eq!(out.custom_tags[0].value, "content_type:1.00");
}

#[test]
fn classifier_is_shareable_across_threads() {
    let classifier = Arc::new(hashing_classifier());
    let handles: Vec<_> = samples::ALL
        .iter()
        .map(|text| {
            let c = classifier.clone();
            std::thread::spawn(move || c.classify(text).unwrap())
        })
        .collect();
    for (h, text) in handles.into_iter().zip(samples::ALL) {
        assert_eq!(h.join().unwrap(), classifier.classify(text).unwrap());
    }
}
