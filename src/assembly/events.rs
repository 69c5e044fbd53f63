//! EventBuilder: message events for one conversation
//!
//! Exactly one shape is produced per build:
//! - forwarded: `m1` (the forwarder's note, internal) and `m2` (the original
//!   message, inbound, addressed to the forwarder)
//! - single message: `m1`, or nothing when there is no content

use super::config::AssemblerConfig;
use super::input::{EntryDate, ForwardedParts, SourceKind, ValidatedInput};
use crate::address::strip_forward_marker;
use crate::record::{
    Channel, Direction, EventBody, EventMeta, EventRole, MessageEvent, Participant, ParticipantId,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Resolve the timestamp shared by every event of one build.
///
/// Structured timestamps are used as-is. Text is parsed as ISO-8601 (a
/// trailing `Z` means UTC; naive values are taken as UTC). Anything else
/// falls back to `now`.
pub fn resolve_timestamp(entry: Option<&EntryDate>, now: DateTime<Utc>) -> DateTime<FixedOffset> {
    match entry {
        Some(EntryDate::At(at)) => *at,
        Some(EntryDate::Text(text)) => parse_iso8601(text).unwrap_or_else(|| {
            tracing::warn!(entry_date = %text, "unparsable entry date, using current time");
            now.fixed_offset()
        }),
        None => now.fixed_offset(),
    }
}

/// Parse the ISO-8601 forms upstream extractors are known to emit
pub fn parse_iso8601(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at);
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(at) = DateTime::parse_from_str(text, format) {
            return Some(at);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Builds the events of one conversation with a single resolved timestamp
pub struct EventBuilder<'a> {
    config: &'a AssemblerConfig,
    source: SourceKind,
    timestamp: DateTime<FixedOffset>,
}

impl<'a> EventBuilder<'a> {
    pub fn new(
        config: &'a AssemblerConfig,
        source: SourceKind,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            config,
            source,
            timestamp,
        }
    }

    pub fn channel(&self) -> Channel {
        self.source.channel()
    }

    /// Build the events for `input`, given participants in registry order.
    pub fn build(&self, input: &ValidatedInput, participants: &[Participant]) -> Vec<MessageEvent> {
        let Some(sender) = participants.first() else {
            tracing::warn!("no participants, emitting no events");
            return Vec::new();
        };

        match &input.forward {
            Some(parts) => self.forwarded(&input.subject, parts, participants),
            None => self
                .single(input, &sender.id, participants)
                .into_iter()
                .collect(),
        }
    }

    fn forwarded(
        &self,
        subject: &str,
        parts: &ForwardedParts,
        participants: &[Participant],
    ) -> Vec<MessageEvent> {
        let forwarder = participants[0].id.clone();
        let original_sender = participants
            .get(1)
            .map(|p| p.id.clone())
            .unwrap_or_else(|| forwarder.clone());

        let note = self.event(
            "m1",
            Direction::Internal,
            forwarder.clone(),
            Vec::new(),
            subject.to_string(),
            &parts.note,
            Some(EventMeta {
                role: Some(EventRole::Instruction),
                ..Default::default()
            }),
        );

        let original = self.event(
            "m2",
            Direction::Inbound,
            original_sender,
            vec![forwarder],
            strip_forward_marker(subject).to_string(),
            &parts.original,
            Some(EventMeta {
                role: Some(EventRole::Content),
                forwarded: Some(true),
                ..Default::default()
            }),
        );

        vec![note, original]
    }

    fn single(
        &self,
        input: &ValidatedInput,
        sender: &ParticipantId,
        participants: &[Participant],
    ) -> Option<MessageEvent> {
        if input.content.is_empty() {
            return None;
        }

        let recipients = participants
            .iter()
            .filter(|p| &p.id != sender)
            .take(self.config.recipient_cap)
            .map(|p| p.id.clone())
            .collect();

        let meta = input
            .duration_minutes
            .filter(|_| self.source.is_timed())
            .map(|minutes| EventMeta {
                duration_seconds: Some(u64::from(minutes) * 60),
                ..Default::default()
            });

        Some(self.event(
            "m1",
            Direction::Inbound,
            sender.clone(),
            recipients,
            input.subject.clone(),
            &input.content,
            meta,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn event(
        &self,
        id: &str,
        direction: Direction,
        from: ParticipantId,
        to: Vec<ParticipantId>,
        subject: String,
        text: &str,
        meta: Option<EventMeta>,
    ) -> MessageEvent {
        MessageEvent {
            id: id.to_string(),
            kind: "message".to_string(),
            channel: self.channel(),
            direction,
            timestamp: self.timestamp,
            from,
            to,
            subject,
            body: EventBody {
                content_type: self.config.body_content_type.clone(),
                text: text.to_string(),
            },
            meta,
        }
    }
}
