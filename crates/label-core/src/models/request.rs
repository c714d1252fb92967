use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::LabelSet;

/// Free-form caller context forwarded to the engines.
pub type TagContext = HashMap<String, serde_json::Value>;

fn enabled() -> bool {
    true
}

/// A request to tag one passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TagRequest {
    pub content: String,
    #[serde(default)]
    pub context: Option<TagContext>,
    #[serde(default = "enabled")]
    pub enable_ml: bool,
    #[serde(default = "enabled")]
    pub enable_rules: bool,
}

impl TagRequest {
    /// Request with both engines enabled and no context.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            context: None,
            enable_ml: true,
            enable_rules: true,
        }
    }

    pub fn with_ml(mut self, enable: bool) -> Self {
        self.enable_ml = enable;
        self
    }

    pub fn with_rules(mut self, enable: bool) -> Self {
        self.enable_rules = enable;
        self
    }

    pub fn with_context(mut self, context: TagContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// The result of tagging one passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TagResponse {
    pub content_id: String,
    pub label_set: LabelSet,
    /// Wall-clock processing time in seconds.
    pub processing_time: f64,
}
