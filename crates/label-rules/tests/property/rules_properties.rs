use label_core::models::new_content_id;
use label_core::LabelSet;
use label_rules::RuleTagger;
use proptest::prelude::*;

// Fragments from the pattern vocabulary, so generated passages hit rules
// often enough to be interesting.
const FRAGMENTS: &[&str] = &[
    "決定します",
    "課題が",
    "までに提出",
    "資料共有",
    "協議します",
    "安全",
    "品質",
    "工程",
    "予算",
    "至急",
    "今週中",
    "参考",
    "発注者",
    "設計事務所",
    "協力業者",
    "3月15日",
    "500万円",
    "15%",
    "2階",
    "、",
    "abc",
];

fn passage() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tagging_is_deterministic(text in passage()) {
        let tagger = RuleTagger::new().unwrap();
        prop_assert_eq!(tagger.tag_content(&text), tagger.tag_content(&text));
    }

    #[test]
    fn rule_tags_are_certain(text in passage()) {
        let tagger = RuleTagger::new().unwrap();
        for tag in tagger.tag_content(&text).custom_tags {
            prop_assert_eq!(tag.confidence.value(), 1.0);
            prop_assert!(text.contains(&tag.value));
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}") {
        let tagger = RuleTagger::new().unwrap();
        let out = tagger.tag_content(&text);
        for tag in &out.custom_tags {
            let c = tag.confidence.value();
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn serialized_multi_labels_have_no_duplicates(text in passage()) {
        let tagger = RuleTagger::new().unwrap();
        let labels = LabelSet::from_output(new_content_id(), tagger.tag_content(&text));
        let json = serde_json::to_value(&labels).unwrap();

        for field in ["domains", "stakeholders"] {
            let values: Vec<String> = json[field]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap().to_string())
                .collect();
            let mut unique = values.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(values.len(), unique.len(), "repeated {} in {:?}", field, values);
        }
    }
}
