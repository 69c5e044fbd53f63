//! vcon-forge: normalized conversation records
//!
//! Converts loosely structured conversation data (emails, forwarded emails,
//! meeting transcripts, chats) into a versioned conversation record, in two
//! phases:
//!
//! - **structural** (`0.0.1`): participants, message events and source
//!   metadata, derived deterministically from the input fields
//! - **enrichment** (`0.0.2`): analysis entries (summaries, action items,
//!   topics) produced by an external model
//!
//! # Example
//!
//! ```
//! use vcon_forge::{EnrichmentInput, RecordAssembler, StructuralInput};
//!
//! let mut assembler = RecordAssembler::new();
//! let input = StructuralInput::new("Hello", "Jane Doe <jane@x.com>")
//!     .with_to("bob@y.com")
//!     .with_content("Hi Bob");
//! assembler.build(&input).unwrap();
//!
//! let record = assembler
//!     .enrich(&EnrichmentInput::new().with_summary("Jane says hi"))
//!     .unwrap();
//! assert_eq!(record.participants.len(), 2);
//! assert_eq!(record.analysis.len(), 1);
//! ```

pub mod address;
pub mod assembly;
pub mod naming;
pub mod record;

pub use address::{parse_address_list, parse_single_address, ParsedAddress};
pub use assembly::{
    build_base, enrich, AssemblerConfig, ConfigError, EnrichmentInput, EntryDate, Phase,
    RecordAssembler, SourceKind, StructuralInput, ValidatedInput, ValidationError,
    ValidationIssue,
};
pub use naming::record_filename;
pub use record::{
    AnalysisEntry, ConversationRecord, MessageEvent, Participant, ParticipantId, References,
    SchemaVersion, SourceRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
