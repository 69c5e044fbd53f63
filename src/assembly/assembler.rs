//! RecordAssembler: the two-phase build
//!
//! The phases are pure functions. `build_base` is the only producer of a
//! fresh record; `enrich` derives a new record from an existing one and
//! leaves its input untouched. `RecordAssembler` layers the stateful
//! protocol (`Unbuilt -> Base -> Enriched`) over them for callers that want
//! a single in-progress record.
//!
//! An assembler holds one record at a time and is not meant to be shared
//! between concurrent builds; use one per conversation.

use super::config::AssemblerConfig;
use super::enrichment::AnalysisEnricher;
use super::error::{AssemblyResult, ValidationError};
use super::events::{resolve_timestamp, EventBuilder};
use super::input::{EnrichmentInput, StructuralInput, ValidatedInput};
use super::participants::ParticipantRegistry;
use super::sources::build_source_record;
use crate::record::{ConversationMetadata, ConversationRecord, SchemaVersion};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Structural phase: assemble a fresh 0.0.1 record from validated input.
pub fn build_base(input: &ValidatedInput, config: &AssemblerConfig) -> ConversationRecord {
    build_base_at(input, config, Utc::now())
}

/// `build_base` with an explicit clock reading.
///
/// `now` stamps `createdAt`/`updatedAt` and is the event timestamp fallback.
pub fn build_base_at(
    input: &ValidatedInput,
    config: &AssemblerConfig,
    now: DateTime<Utc>,
) -> ConversationRecord {
    let registry = ParticipantRegistry::from_input(input);
    let timestamp = resolve_timestamp(input.entry_date.as_ref(), now);
    let events = EventBuilder::new(config, input.source, timestamp).build(input, registry.participants());

    let record = ConversationRecord {
        version: SchemaVersion::V0_0_1,
        uuid: Uuid::new_v4(),
        kind: input.source.record_type(),
        created_at: now,
        updated_at: now,
        conversation_metadata: ConversationMetadata {
            subject: input.subject.clone(),
            thread_topic: input.subject.clone(),
            message_count: events.len(),
        },
        participants: registry.into_participants(),
        events,
        analysis: Vec::new(),
        attachments: Vec::new(),
        sources: vec![build_source_record(input)],
    };

    tracing::debug!(
        uuid = %record.uuid,
        source = %input.source,
        participants = record.participants.len(),
        events = record.events.len(),
        "built base record"
    );
    record
}

/// Enrichment phase: derive a 0.0.2 record with analysis appended.
///
/// Fails with `NotBuilt` when there is no prior record. `uuid` and
/// `createdAt` carry over; `updatedAt` is refreshed.
pub fn enrich(
    prior: Option<&ConversationRecord>,
    input: &EnrichmentInput,
    config: &AssemblerConfig,
) -> AssemblyResult<ConversationRecord> {
    enrich_at(prior, input, config, Utc::now())
}

/// `enrich` with an explicit clock reading
pub fn enrich_at(
    prior: Option<&ConversationRecord>,
    input: &EnrichmentInput,
    config: &AssemblerConfig,
    now: DateTime<Utc>,
) -> AssemblyResult<ConversationRecord> {
    let prior = prior.ok_or_else(ValidationError::not_built)?;

    let mut record = prior.clone();
    record.version = record.version.max(SchemaVersion::V0_0_2);
    record.updated_at = now;
    let added = AnalysisEnricher::new(config).append_to(&mut record.analysis, input);

    tracing::debug!(
        uuid = %record.uuid,
        added,
        total = record.analysis.len(),
        "enriched record"
    );
    Ok(record)
}

/// Build state of an assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unbuilt,
    Base,
    Enriched,
}

#[derive(Debug, Clone)]
enum State {
    Unbuilt,
    Base(ConversationRecord),
    Enriched(ConversationRecord),
}

/// Stateful two-phase assembler holding one in-progress record.
///
/// `build` always starts over: a new uuid, new timestamps and empty
/// collections, discarding any prior enrichment. `enrich` appends to the
/// current record and may be repeated.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    config: AssemblerConfig,
    state: State,
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::with_config(AssemblerConfig::default())
    }

    pub fn with_config(config: AssemblerConfig) -> Self {
        Self {
            config,
            state: State::Unbuilt,
        }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Unbuilt => Phase::Unbuilt,
            State::Base(_) => Phase::Base,
            State::Enriched(_) => Phase::Enriched,
        }
    }

    /// The current record, if any phase has run
    pub fn record(&self) -> Option<&ConversationRecord> {
        match &self.state {
            State::Unbuilt => None,
            State::Base(record) | State::Enriched(record) => Some(record),
        }
    }

    /// Run the structural phase.
    ///
    /// Input is validated before any state changes; on failure the
    /// assembler keeps whatever it held.
    pub fn build(&mut self, input: &StructuralInput) -> AssemblyResult<&ConversationRecord> {
        let validated = input.validate()?;
        if self.phase() == Phase::Enriched {
            tracing::debug!("rebuilding discards prior enrichment");
        }
        self.state = State::Base(build_base(&validated, &self.config));
        self.record().ok_or_else(ValidationError::not_built)
    }

    /// Run the enrichment phase on the current record.
    pub fn enrich(&mut self, input: &EnrichmentInput) -> AssemblyResult<&ConversationRecord> {
        let enriched = self::enrich(self.record(), input, &self.config)?;
        self.state = State::Enriched(enriched);
        self.record().ok_or_else(ValidationError::not_built)
    }

    /// Take the current record, leaving the assembler unbuilt
    pub fn take(&mut self) -> Option<ConversationRecord> {
        match std::mem::replace(&mut self.state, State::Unbuilt) {
            State::Unbuilt => None,
            State::Base(record) | State::Enriched(record) => Some(record),
        }
    }
}
