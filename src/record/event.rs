//! Message events

use super::participant::ParticipantId;
use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Medium the message travelled over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Meeting,
}

/// Direction relative to the record owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Internal,
}

/// Role of an event inside a forwarded conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventRole {
    /// The forwarder's own note
    Instruction,
    /// The forwarded original message
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub content_type: String,
    pub text: String,
}

/// Optional per-event metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<EventRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

/// A single message in the conversation ("m1", "m2")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessageEvent {
    pub id: String,
    /// Always "message"
    #[serde(rename = "type")]
    pub kind: String,
    pub channel: Channel,
    pub direction: Direction,
    pub timestamp: DateTime<FixedOffset>,
    pub from: ParticipantId,
    #[serde(default)]
    pub to: Vec<ParticipantId>,
    pub subject: String,
    pub body: EventBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<EventMeta>,
}
