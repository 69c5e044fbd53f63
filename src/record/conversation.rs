//! ConversationRecord: the root of a normalized conversation

use super::analysis::AnalysisEntry;
use super::event::MessageEvent;
use super::participant::{Participant, ParticipantId};
use super::source::SourceRecord;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema version carried by a record.
///
/// Ordered: a record only ever advances from `V0_0_1` to `V0_0_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum SchemaVersion {
    /// Structural data only
    #[serde(rename = "0.0.1")]
    V0_0_1,
    /// Structural data plus analysis
    #[serde(rename = "0.0.2")]
    V0_0_2,
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V0_0_1 => write!(f, "0.0.1"),
            Self::V0_0_2 => write!(f, "0.0.2"),
        }
    }
}

/// Kind of conversation a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    EmailThread,
    EmailForwarded,
    MeetingTranscript,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMetadata {
    pub subject: String,
    pub thread_topic: String,
    pub message_count: usize,
}

/// A normalized, versioned conversation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub version: SchemaVersion,
    pub uuid: Uuid,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub conversation_metadata: ConversationMetadata,
    pub participants: Vec<Participant>,
    pub events: Vec<MessageEvent>,
    pub analysis: Vec<AnalysisEntry>,
    /// Always empty; attachments are not extracted
    pub attachments: Vec<serde_json::Value>,
    pub sources: Vec<SourceRecord>,
}

impl ConversationRecord {
    /// Look up a participant by id
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// True once the enrichment phase has run
    pub fn is_enriched(&self) -> bool {
        self.version == SchemaVersion::V0_0_2
    }

    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
