mod confidence;
mod degradation_event;
mod engine_output;
mod label_set;
mod labels;
mod request;
mod tag;

pub use confidence::Confidence;
pub use degradation_event::DegradationEvent;
pub use engine_output::EngineOutput;
pub use label_set::{new_content_id, LabelSet};
pub use labels::{ContentType, Domain, Priority, Stakeholder, Vocabulary};
pub use request::{TagContext, TagRequest, TagResponse};
pub use tag::{Tag, TagSource};
