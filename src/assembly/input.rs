//! Explicit input structures for both build phases
//!
//! Inputs arrive as loosely structured field maps (usually JSON). They are
//! deserialized into `StructuralInput` / `EnrichmentInput`, and structural
//! input is resolved once into a `ValidatedInput` with every default applied.

use super::error::{AssemblyResult, ValidationError, ValidationIssue};
use crate::record::{Channel, RecordType, References};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of accepted source tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceKind {
    #[default]
    EmailThread,
    ForwardedEmail,
    MeetingTranscript,
    Chat,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        Self::EmailThread,
        Self::ForwardedEmail,
        Self::MeetingTranscript,
        Self::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailThread => "email_thread",
            Self::ForwardedEmail => "forwarded_email",
            Self::MeetingTranscript => "meeting_transcript",
            Self::Chat => "chat",
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Self::EmailThread => RecordType::EmailThread,
            Self::ForwardedEmail => RecordType::EmailForwarded,
            Self::MeetingTranscript => RecordType::MeetingTranscript,
            Self::Chat => RecordType::Chat,
        }
    }

    pub fn channel(&self) -> Channel {
        if self.as_str().contains("meeting") {
            Channel::Meeting
        } else {
            Channel::Email
        }
    }

    /// Whether events from this source carry a duration
    pub fn is_timed(&self) -> bool {
        matches!(self, Self::MeetingTranscript)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown source type: {}", s))
    }
}

/// A message timestamp: already structured, or free text to be parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDate {
    At(DateTime<FixedOffset>),
    Text(String),
}

impl From<DateTime<FixedOffset>> for EntryDate {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Self::At(at)
    }
}

impl From<&str> for EntryDate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Raw structural-phase input. Every key is optional at this stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralInput {
    pub subject: Option<String>,
    /// Fallback for `subject` (meeting sources use titles)
    pub title: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub cc: Option<String>,
    pub content: Option<String>,
    /// Source tag; defaults to `email_thread`
    pub source: Option<String>,
    #[serde(alias = "entry_date")]
    pub entry_date: Option<EntryDate>,
    #[serde(alias = "message_id")]
    pub message_id: Option<String>,
    #[serde(default, alias = "is_forwarded")]
    pub is_forwarded: bool,
    #[serde(alias = "user_note")]
    pub user_note: Option<String>,
    #[serde(alias = "original_content")]
    pub original_content: Option<String>,
    #[serde(alias = "reply_to")]
    pub reply_to: Option<String>,
    #[serde(alias = "in_reply_to")]
    pub in_reply_to: Option<String>,
    pub references: Option<References>,
    /// Plain attendee names
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(alias = "duration_minutes")]
    pub duration_minutes: Option<u32>,
}

impl StructuralInput {
    pub fn new(subject: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            from: Some(from.into()),
            ..Default::default()
        }
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_entry_date(mut self, entry_date: impl Into<EntryDate>) -> Self {
        self.entry_date = Some(entry_date.into());
        self
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Mark as forwarded, with the forwarder's note and the original body
    pub fn forwarded(mut self, user_note: impl Into<String>, original: impl Into<String>) -> Self {
        self.is_forwarded = true;
        self.user_note = Some(user_note.into());
        self.original_content = Some(original.into());
        self
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    pub fn with_in_reply_to(mut self, in_reply_to: impl Into<String>) -> Self {
        self.in_reply_to = Some(in_reply_to.into());
        self
    }

    pub fn with_references(mut self, references: References) -> Self {
        self.references = Some(references);
        self
    }

    pub fn with_participants(mut self, names: Vec<String>) -> Self {
        self.participants = names;
        self
    }

    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Subject, falling back to title
    pub fn resolved_subject(&self) -> Option<&str> {
        non_empty(&self.subject).or_else(|| non_empty(&self.title))
    }

    /// Check required fields and the source tag, resolving defaults.
    ///
    /// Every problem is collected; nothing is reported piecemeal.
    pub fn validate(&self) -> AssemblyResult<ValidatedInput> {
        let mut issues = Vec::new();

        let subject = self.resolved_subject();
        if subject.is_none() {
            issues.push(ValidationIssue::Missing("subject"));
        }
        let from = non_empty(&self.from);
        if from.is_none() {
            issues.push(ValidationIssue::Missing("from"));
        }

        let forward = if self.is_forwarded {
            let note = non_empty(&self.user_note);
            let original = non_empty(&self.original_content);
            if note.is_none() {
                issues.push(ValidationIssue::Missing("userNote"));
            }
            if original.is_none() {
                issues.push(ValidationIssue::Missing("originalContent"));
            }
            note.zip(original).map(|(note, original)| ForwardedParts {
                note: note.to_string(),
                original: original.to_string(),
            })
        } else {
            if non_empty(&self.content).is_none() {
                issues.push(ValidationIssue::Missing("content"));
            }
            None
        };

        let source = match non_empty(&self.source) {
            None => Some(SourceKind::default()),
            Some(tag) => match tag.parse::<SourceKind>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    issues.push(ValidationIssue::UnknownSource(tag.to_string()));
                    None
                }
            },
        };

        let (subject, from, source) = match (subject, from, source) {
            (Some(subject), Some(from), Some(source)) if issues.is_empty() => {
                (subject, from, source)
            }
            _ => return Err(ValidationError::new(issues)),
        };

        Ok(ValidatedInput {
            subject: subject.to_string(),
            from: from.to_string(),
            to: non_empty(&self.to).map(str::to_string),
            cc: non_empty(&self.cc).map(str::to_string),
            content: self.content.clone().unwrap_or_default(),
            source,
            entry_date: self.entry_date.clone(),
            message_id: self.message_id.clone().unwrap_or_default(),
            forward,
            reply_to: non_empty(&self.reply_to).map(str::to_string),
            in_reply_to: non_empty(&self.in_reply_to).map(str::to_string),
            references: self.references.clone().filter(|r| !r.is_empty()),
            participants: self.participants.clone(),
            duration_minutes: self.duration_minutes,
        })
    }
}

/// The two bodies of a forwarded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedParts {
    /// What the forwarder wrote
    pub note: String,
    /// The message being forwarded
    pub original: String,
}

/// Structural input with every default resolved.
///
/// Only produced by `StructuralInput::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub subject: String,
    pub from: String,
    pub to: Option<String>,
    pub cc: Option<String>,
    /// May be empty for forwarded input
    pub content: String,
    pub source: SourceKind,
    pub entry_date: Option<EntryDate>,
    pub message_id: String,
    pub forward: Option<ForwardedParts>,
    pub reply_to: Option<String>,
    pub in_reply_to: Option<String>,
    pub references: Option<References>,
    pub participants: Vec<String>,
    pub duration_minutes: Option<u32>,
}

impl ValidatedInput {
    pub fn is_forwarded(&self) -> bool {
        self.forward.is_some()
    }
}

/// Enrichment-phase input: analysis results from an external model.
///
/// Values may be text or structured JSON (lists, maps).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentInput {
    pub summary: Option<Value>,
    pub category: Option<Value>,
    #[serde(alias = "action_items")]
    pub action_items: Option<Value>,
    #[serde(alias = "key_topics")]
    pub key_topics: Option<Value>,
    #[serde(alias = "key_decisions")]
    pub key_decisions: Option<Value>,
    /// Vendor or model name
    pub source: Option<String>,
}

impl EnrichmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: impl Into<Value>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<Value>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_action_items(mut self, items: impl Into<Value>) -> Self {
        self.action_items = Some(items.into());
        self
    }

    pub fn with_key_topics(mut self, topics: impl Into<Value>) -> Self {
        self.key_topics = Some(topics.into());
        self
    }

    pub fn with_key_decisions(mut self, decisions: impl Into<Value>) -> Self {
        self.key_decisions = Some(decisions.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.source = Some(vendor.into());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
