//! Conversation participants

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a participant within one record ("p1", "p2", ...)
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Build the id for the given 1-based sequence number
    pub fn from_sequence(n: usize) -> Self {
        Self(format!("p{}", n))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The field a participant was first seen in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    From,
    To,
    Cc,
    /// Name-only attendee (e.g. from a meeting transcript)
    Participant,
}

/// A participant in the conversation. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}
