//! Serialization tests with contract-compliant fixtures

use serde_json::{json, Value};

/// Contract fixture: a forwarded email record after enrichment
fn contract_record_fixture() -> Value {
    json!({
        "version": "0.0.2",
        "uuid": "0b7a1f44-5a3c-4d5e-9a6f-2f1c3e9b7d10",
        "type": "email_forwarded",
        "createdAt": "2025-03-04T09:15:00Z",
        "updatedAt": "2025-03-04T09:20:00Z",
        "conversationMetadata": {
            "subject": "Fwd: Q3 budget",
            "threadTopic": "Fwd: Q3 budget",
            "messageCount": 2
        },
        "participants": [
            { "id": "p1", "name": "Ana Ruiz", "email": "ana@corp.example", "role": "from" },
            { "id": "p2", "name": "cfo@corp.example", "email": "cfo@corp.example", "role": "to" }
        ],
        "events": [
            {
                "id": "m1",
                "type": "message",
                "channel": "email",
                "direction": "internal",
                "timestamp": "2025-03-04T09:00:00+02:00",
                "from": "p1",
                "to": [],
                "subject": "Fwd: Q3 budget",
                "body": { "contentType": "text/plain", "text": "Please review." },
                "meta": { "role": "instruction" }
            },
            {
                "id": "m2",
                "type": "message",
                "channel": "email",
                "direction": "inbound",
                "timestamp": "2025-03-04T09:00:00+02:00",
                "from": "p2",
                "to": ["p1"],
                "subject": "Q3 budget",
                "body": { "contentType": "text/plain", "text": "Numbers attached." },
                "meta": { "role": "content", "forwarded": true }
            }
        ],
        "analysis": [
            {
                "type": "action-items",
                "dialog": 0,
                "vendor": "gpt-4",
                "product": "vcon-forge",
                "schema": "application/json",
                "body": "[\n  \"review\"\n]",
                "encoding": "utf-8"
            }
        ],
        "attachments": [],
        "sources": [
            {
                "type": "forwarded_email",
                "messageId": "<abc@corp.example>",
                "references": ["<a@x.com>", "<b@x.com>"]
            }
        ]
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::record::{
        AnalysisKind, AnalysisSchema, Channel, ConversationRecord, Direction, EventRole,
        ParticipantId, RecordType, References, Role, SchemaVersion,
    };

    #[test]
    fn record_deserializes_from_contract_fixture() {
        let record: ConversationRecord = serde_json::from_value(contract_record_fixture()).unwrap();

        assert_eq!(record.version, SchemaVersion::V0_0_2);
        assert_eq!(record.kind, RecordType::EmailForwarded);
        assert_eq!(record.conversation_metadata.message_count, 2);
        assert_eq!(record.participants[0].role, Role::From);
        assert_eq!(record.events[0].direction, Direction::Internal);
        assert_eq!(record.events[1].channel, Channel::Email);
        assert_eq!(
            record.events[1].meta.as_ref().unwrap().role,
            Some(EventRole::Content)
        );
        assert_eq!(record.analysis[0].kind, AnalysisKind::ActionItems);
        assert_eq!(record.analysis[0].schema, AnalysisSchema::ApplicationJson);
        assert!(record.is_enriched());
    }

    #[test]
    fn record_round_trips_to_identical_json() {
        let fixture = contract_record_fixture();
        let record: ConversationRecord = serde_json::from_value(fixture.clone()).unwrap();
        let back = serde_json::to_value(&record).unwrap();

        assert_eq!(back["events"], fixture["events"]);
        assert_eq!(back["participants"], fixture["participants"]);
        assert_eq!(back["sources"], fixture["sources"]);
        assert_eq!(back["analysis"], fixture["analysis"]);
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let record: ConversationRecord = serde_json::from_value(contract_record_fixture()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        let source = json["sources"][0].as_object().unwrap();
        assert!(!source.contains_key("replyTo"));
        assert!(!source.contains_key("inReplyTo"));

        let meta = json["events"][0]["meta"].as_object().unwrap();
        assert!(!meta.contains_key("forwarded"));
        assert!(!meta.contains_key("durationSeconds"));
    }

    #[test]
    fn participant_without_email_omits_key() {
        let participant = crate::record::Participant {
            id: ParticipantId::from_sequence(3),
            name: "Dana".to_string(),
            email: None,
            role: Role::Participant,
        };
        let json = serde_json::to_value(&participant).unwrap();
        assert_eq!(json, json!({ "id": "p3", "name": "Dana", "role": "participant" }));
    }

    #[test]
    fn schema_versions_are_ordered() {
        assert!(SchemaVersion::V0_0_1 < SchemaVersion::V0_0_2);
        assert_eq!(SchemaVersion::V0_0_2.to_string(), "0.0.2");
    }

    #[test]
    fn references_text_splits_on_whitespace() {
        let refs: References = serde_json::from_value(json!("<a@x.com>  <b@x.com>\n<c@x.com>")).unwrap();
        assert_eq!(refs.into_list(), vec!["<a@x.com>", "<b@x.com>", "<c@x.com>"]);
    }

    #[test]
    fn references_list_passes_through() {
        let refs: References = serde_json::from_value(json!(["<b@x.com>", "<a@x.com>"])).unwrap();
        assert_eq!(refs.into_list(), vec!["<b@x.com>", "<a@x.com>"]);
    }

    #[test]
    fn participant_lookup_by_id() {
        let record: ConversationRecord = serde_json::from_value(contract_record_fixture()).unwrap();
        let p2 = record.participant(&ParticipantId::from("p2")).unwrap();
        assert_eq!(p2.email.as_deref(), Some("cfo@corp.example"));
        assert!(record.participant(&ParticipantId::from("p9")).is_none());
    }
}

#[cfg(test)]
mod schema_tests {
    use crate::record::ConversationRecord;

    #[test]
    fn json_schema_describes_camel_case_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(ConversationRecord)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for key in [
            "version",
            "uuid",
            "type",
            "createdAt",
            "updatedAt",
            "conversationMetadata",
            "participants",
            "events",
            "analysis",
            "attachments",
            "sources",
        ] {
            assert!(properties.contains_key(key), "missing {}", key);
        }
    }
}
