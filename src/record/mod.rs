//! Normalized conversation record data model

mod analysis;
mod conversation;
mod event;
mod participant;
mod source;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisEntry, AnalysisKind, AnalysisSchema};
pub use conversation::{ConversationMetadata, ConversationRecord, RecordType, SchemaVersion};
pub use event::{Channel, Direction, EventBody, EventMeta, EventRole, MessageEvent};
pub use participant::{Participant, ParticipantId, Role};
pub use source::{References, SourceRecord};
