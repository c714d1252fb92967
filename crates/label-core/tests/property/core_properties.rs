use label_core::{Confidence, ContentType, Domain, Priority, Stakeholder, Tag};
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(raw in any::<f64>()) {
        let c = Confidence::new(raw);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn confidence_keeps_in_range_values(raw in 0.0f64..=1.0) {
        prop_assert_eq!(Confidence::new(raw).value(), raw);
    }

    #[test]
    fn confidence_survives_json(raw in -2.0f64..2.0) {
        let c = Confidence::new(raw);
        let json = serde_json::to_string(&c).unwrap();
        let back: Confidence = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, c);
    }

    #[test]
    fn ml_confidence_value_has_two_decimals(score in -1.0f64..2.0) {
        let tag = Tag::ml_confidence("overall", score);
        let (_, number) = tag.value.split_once(':').unwrap();
        prop_assert_eq!(number.len(), 4);
        prop_assert!(tag.is_confidence_for("overall"));
    }

    #[test]
    fn vocabulary_labels_parse_back(
        ct in prop::sample::select(ContentType::ALL.to_vec()),
        d in prop::sample::select(Domain::ALL.to_vec()),
        p in prop::sample::select(Priority::ALL.to_vec()),
        s in prop::sample::select(Stakeholder::ALL.to_vec()),
    ) {
        prop_assert_eq!(ct.label().parse::<ContentType>().unwrap(), ct);
        prop_assert_eq!(d.key().parse::<Domain>().unwrap(), d);
        prop_assert_eq!(p.label().parse::<Priority>().unwrap(), p);
        prop_assert_eq!(s.key().parse::<Stakeholder>().unwrap(), s);
    }
}
