use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Confidence;
use crate::constants;

/// Where a tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TagSource {
    Rule,
    Ml,
    Manual,
    System,
}

impl TagSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TagSource::Rule => "rule",
            TagSource::Ml => "ml",
            TagSource::Manual => "manual",
            TagSource::System => "system",
        }
    }
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auxiliary annotation outside the four label vocabularies: extracted dates,
/// amounts, percentages and locations, classifier confidence records, and
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tag {
    pub category: String,
    pub value: String,
    #[ts(as = "f64")]
    pub confidence: Confidence,
    pub source: TagSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl Tag {
    pub fn new(
        category: impl Into<String>,
        value: impl Into<String>,
        confidence: impl Into<Confidence>,
        source: TagSource,
    ) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
            confidence: confidence.into(),
            source,
            metadata: None,
        }
    }

    /// A rule-extracted tag, always fully confident.
    pub fn rule(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(category, value, Confidence::CERTAIN, TagSource::Rule)
    }

    /// A classifier confidence record, e.g. `content_type:0.82`.
    pub fn ml_confidence(key: &str, score: f64) -> Self {
        let confidence = Confidence::new(score);
        Self::new(
            constants::CATEGORY_ML_CONFIDENCE,
            format!("{key}:{confidence}"),
            confidence,
            TagSource::Ml,
        )
    }

    /// The diagnostic recorded when the classifier fails during a request.
    pub fn ml_failure() -> Self {
        Self::new(
            constants::CATEGORY_ERROR,
            constants::ERROR_ML_TAGGING_FAILED,
            Confidence::NONE,
            TagSource::System,
        )
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }

    /// Whether this is a classifier confidence record for `key`
    /// (`content_type`, `priority`, `overall`, or a prefixed multi-label key).
    pub fn is_confidence_for(&self, key: &str) -> bool {
        self.category == constants::CATEGORY_ML_CONFIDENCE
            && self
                .value
                .strip_prefix(key)
                .is_some_and(|rest| rest.starts_with(':'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_tags_are_certain() {
        let tag = Tag::rule("date", "3月15日");
        assert_eq!(tag.confidence.value(), 1.0);
        assert_eq!(tag.source, TagSource::Rule);
        assert!(tag.metadata.is_none());
    }

    #[test]
    fn ml_confidence_formats_value() {
        let tag = Tag::ml_confidence("content_type", 0.8234);
        assert_eq!(tag.value, "content_type:0.82");
        assert!((tag.confidence.value() - 0.8234).abs() < 1e-12);
        assert!(tag.is_confidence_for("content_type"));
        assert!(!tag.is_confidence_for("content"));
    }

    #[test]
    fn failure_tag_shape() {
        let tag = Tag::ml_failure();
        assert_eq!(tag.category, "error");
        assert_eq!(tag.value, "ml_tagging_failed");
        assert_eq!(tag.confidence.value(), 0.0);
        assert_eq!(tag.source, TagSource::System);
    }

    #[test]
    fn source_serializes_lowercase() {
        let json = serde_json::to_value(Tag::rule("amount", "500")).unwrap();
        assert_eq!(json["source"], "rule");
        assert!(json.get("metadata").is_none());
    }
}
