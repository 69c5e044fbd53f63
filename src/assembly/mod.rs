//! Record assembly pipeline
//!
//! raw field map -> `StructuralInput` -> `ValidatedInput` -> participants,
//! events and source metadata -> base record -> (optional) analysis entries.

mod assembler;
mod config;
mod enrichment;
mod error;
mod events;
mod input;
mod participants;
mod sources;

pub use assembler::{build_base, build_base_at, enrich, enrich_at, Phase, RecordAssembler};
pub use config::{AssemblerConfig, ConfigError, DEFAULT_RECIPIENT_CAP, DEFAULT_VENDOR};
pub use enrichment::AnalysisEnricher;
pub use error::{AssemblyResult, ValidationError, ValidationIssue};
pub use events::{parse_iso8601, resolve_timestamp, EventBuilder};
pub use input::{
    EnrichmentInput, EntryDate, ForwardedParts, SourceKind, StructuralInput, ValidatedInput,
};
pub use participants::{IdentityKey, ParticipantRegistry};
pub use sources::build_source_record;
