use crate::errors::LabelResult;
use crate::models::{EngineOutput, TagContext, TagSource};

/// A classification engine that labels one passage.
pub trait ITagger: Send + Sync {
    /// Source recorded on the produced `EngineOutput`.
    fn source(&self) -> TagSource;

    /// Label `text`. Rule engines never fail; classifier engines return the
    /// embedding error and leave recovery to the caller.
    fn tag_content(&self, text: &str, context: Option<&TagContext>) -> LabelResult<EngineOutput>;

    /// Human-readable engine name.
    fn name(&self) -> &str;
}
