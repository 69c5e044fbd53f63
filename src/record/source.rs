//! Provenance and threading metadata

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A `References` header value: either the raw whitespace-joined header
/// text or an already split sequence of message ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum References {
    Text(String),
    List(Vec<String>),
}

impl References {
    /// Normalize to an ordered sequence of message ids.
    ///
    /// Text is split on whitespace; a list passes through unchanged.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::Text(text) => text.split_whitespace().map(str::to_string).collect(),
            Self::List(list) => list,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(list) => list.is_empty(),
        }
    }
}

/// One provenance entry of a conversation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    /// Declared source tag (e.g. "email_thread")
    #[serde(rename = "type")]
    pub kind: String,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
}
