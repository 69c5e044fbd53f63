//! SourceMetadataBuilder: provenance and threading headers

use super::input::ValidatedInput;
use crate::record::SourceRecord;

/// Build the single source entry for a conversation.
///
/// Optional headers are included only when present and non-empty.
pub fn build_source_record(input: &ValidatedInput) -> SourceRecord {
    SourceRecord {
        kind: input.source.as_str().to_string(),
        message_id: input.message_id.clone(),
        reply_to: input.reply_to.clone(),
        in_reply_to: input.in_reply_to.clone(),
        references: input.references.clone().map(|r| r.into_list()),
    }
}
