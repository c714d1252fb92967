//! Stub engines that return canned outputs.

use label_core::models::TagContext;
use label_core::traits::ITagger;
use label_core::{
    ContentType, EmbeddingError, EngineOutput, LabelResult, Priority, Tag, TagSource,
};

/// Returns a clone of the same output for every passage.
pub struct FixedTagger {
    output: EngineOutput,
}

impl FixedTagger {
    pub fn new(output: EngineOutput) -> Self {
        Self { output }
    }

    /// An ML output claiming `content_type` with the given recorded confidence.
    pub fn ml_content_type(content_type: ContentType, confidence: f64) -> Self {
        let mut output = EngineOutput::empty(TagSource::Ml);
        output.content_type = Some(content_type);
        output
            .custom_tags
            .push(Tag::ml_confidence("content_type", confidence));
        Self::new(output)
    }

    /// An ML output carrying only a priority.
    pub fn ml_priority(priority: Priority) -> Self {
        let mut output = EngineOutput::empty(TagSource::Ml);
        output.priority = Some(priority);
        output.custom_tags.push(Tag::ml_confidence("priority", 0.9));
        Self::new(output)
    }
}

impl ITagger for FixedTagger {
    fn source(&self) -> TagSource {
        self.output.source
    }

    fn tag_content(&self, _text: &str, _context: Option<&TagContext>) -> LabelResult<EngineOutput> {
        Ok(self.output.clone())
    }

    fn name(&self) -> &str {
        "fixed-stub"
    }
}

/// Fails every call with an embedding error.
pub struct FailingTagger;

impl ITagger for FailingTagger {
    fn source(&self) -> TagSource {
        TagSource::Ml
    }

    fn tag_content(&self, _text: &str, _context: Option<&TagContext>) -> LabelResult<EngineOutput> {
        Err(EmbeddingError::InferenceFailed {
            reason: "simulated classifier failure".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing-tagger"
    }
}
