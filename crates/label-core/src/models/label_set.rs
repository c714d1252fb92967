use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ContentType, Domain, EngineOutput, Priority, Stakeholder, Tag};

/// The complete label set for one passage.
///
/// Built by the fusion engine and handed off as-is to persistence and
/// transport collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelSet {
    pub content_id: String,
    pub content_type: Option<ContentType>,
    pub domains: BTreeSet<Domain>,
    pub priority: Option<Priority>,
    pub stakeholders: BTreeSet<Stakeholder>,
    pub custom_tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    /// Set by persistence collaborators on edit; never by the fusion engine.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LabelSet {
    /// Finalize a fused engine output under `content_id`, stamped now.
    pub fn from_output(content_id: String, output: EngineOutput) -> Self {
        Self {
            content_id,
            content_type: output.content_type,
            domains: output.domains,
            priority: output.priority,
            stakeholders: output.stakeholders,
            custom_tags: output.custom_tags,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Custom tags in the given category, in insertion order.
    pub fn tags_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.custom_tags.iter().filter(move |t| t.category == category)
    }

    /// True when no label of any kind was assigned.
    pub fn is_empty(&self) -> bool {
        self.content_type.is_none()
            && self.domains.is_empty()
            && self.priority.is_none()
            && self.stakeholders.is_empty()
            && self.custom_tags.is_empty()
    }
}

/// Fresh unique identifier for a tagged passage.
pub fn new_content_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
