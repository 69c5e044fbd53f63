//! Shared input fixtures for pipeline tests

#![allow(dead_code)]

use serde_json::{json, Value};
use vcon_forge::{EnrichmentInput, StructuralInput};

/// A plain email thread with to and cc recipients
pub fn email_thread_json() -> Value {
    json!({
        "subject": "Launch checklist",
        "from": "\"Rivera, Ana\" <ana@corp.example>",
        "to": "Bo Chen <bo@corp.example>, not-an-address, cy@corp.example",
        "cc": "Dee <dee@partner.example>, BO@corp.example",
        "content": "Please confirm the items below.",
        "entryDate": "2025-03-04T09:00:00Z",
        "messageId": "<launch-1@corp.example>",
        "inReplyTo": "<launch-0@corp.example>",
        "references": "<launch-0@corp.example> <kickoff@corp.example>"
    })
}

/// A forwarded email in the snake_case shape older extractors emit
pub fn forwarded_json() -> Value {
    json!({
        "subject": "Fwd: Hello",
        "from": "Me <me@home.example>",
        "to": "Original Sender <orig@elsewhere.example>",
        "source": "forwarded_email",
        "is_forwarded": true,
        "user_note": "Can you handle this?",
        "original_content": "Hello, please see the attached invoice.",
        "entry_date": "2025-03-04 09:00:00",
        "references": ["<a@x.com>", "<b@x.com>"]
    })
}

/// A meeting transcript with attendee names only
pub fn meeting_json() -> Value {
    json!({
        "title": "Weekly sync",
        "from": "host@corp.example",
        "source": "meeting_transcript",
        "participants": ["Ana", "Bo", "Ana", "  "],
        "durationMinutes": 30,
        "content": "Ana: status is green.\nBo: shipping Friday."
    })
}

pub fn structural(value: Value) -> StructuralInput {
    serde_json::from_value(value).unwrap()
}

pub fn analysis_json() -> Value {
    json!({
        "summary": "Ana asks the team to confirm the launch checklist.",
        "category": "planning",
        "action_items": ["confirm checklist", "book venue"],
        "keyTopics": ["launch"],
        "keyDecisions": [],
        "source": "gpt-4"
    })
}

pub fn analysis() -> EnrichmentInput {
    serde_json::from_value(analysis_json()).unwrap()
}
