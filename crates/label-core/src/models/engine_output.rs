use std::collections::BTreeSet;

use super::{ContentType, Domain, Priority, Stakeholder, Tag, TagSource};

/// Labels produced by one classification engine for one passage.
///
/// Not persisted; the fusion engine folds these into a `LabelSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    pub source: TagSource,
    pub content_type: Option<ContentType>,
    pub domains: BTreeSet<Domain>,
    pub priority: Option<Priority>,
    pub stakeholders: BTreeSet<Stakeholder>,
    pub custom_tags: Vec<Tag>,
}

impl EngineOutput {
    pub fn empty(source: TagSource) -> Self {
        Self {
            source,
            content_type: None,
            domains: BTreeSet::new(),
            priority: None,
            stakeholders: BTreeSet::new(),
            custom_tags: Vec::new(),
        }
    }

    /// Numeric confidence this output recorded for `key`, if any.
    pub fn recorded_confidence(&self, key: &str) -> Option<f64> {
        self.custom_tags
            .iter()
            .find(|t| t.is_confidence_for(key))
            .map(|t| t.confidence.value())
    }

    pub fn is_empty(&self) -> bool {
        self.content_type.is_none()
            && self.domains.is_empty()
            && self.priority.is_none()
            && self.stakeholders.is_empty()
            && self.custom_tags.is_empty()
    }
}
