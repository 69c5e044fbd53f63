//! Standardized filenames for stored records

use crate::assembly::{parse_iso8601, EntryDate, StructuralInput};
use chrono::Utc;

const MAX_SLUG_LEN: usize = 50;

/// `<YYYY-MM-DD>-<subject-slug>.json`
///
/// The date comes from the entry date, or today (UTC) when it is absent or
/// unparsable.
pub fn record_filename(input: &StructuralInput) -> String {
    let date = match &input.entry_date {
        Some(EntryDate::At(at)) => Some(at.date_naive()),
        Some(EntryDate::Text(text)) => parse_iso8601(text).map(|at| at.date_naive()),
        None => None,
    }
    .unwrap_or_else(|| Utc::now().date_naive());

    let subject = input.resolved_subject().unwrap_or("email");
    format!("{}-{}.json", date.format("%Y-%m-%d"), slugify(subject))
}

/// Lowercase, keep `[a-z0-9 ]`, join words with `-`, cap the length
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();
    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}
