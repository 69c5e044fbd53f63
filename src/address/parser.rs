//! Address productions over the token stream

use super::tokenizer::{tokenize, Token, TokenKind};

/// Result of parsing one raw address token.
///
/// `email` is `None` when no valid address was found; that is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAddress {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl ParsedAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.email.is_some()
    }
}

/// Parse a single address such as `Jane Doe <jane@x.com>` or `jane@x.com`.
///
/// The bracketed form is tried first; if its content is not a valid address
/// the whole segment is scanned for a bare address instead. The display
/// name comes only from the bracketed form.
pub fn parse_single_address(raw: &str) -> ParsedAddress {
    let raw = raw.trim();
    let tokens = tokenize(raw);
    let angle = tokens.iter().find(|t| t.kind == TokenKind::Angle);

    let display_name = angle.and_then(|a| display_name_before(raw, a));

    let email = angle
        .map(|a| a.inner().trim())
        .filter(|candidate| is_valid_email(candidate))
        .or_else(|| find_bare_address(raw))
        .map(str::to_string);

    ParsedAddress {
        email,
        display_name,
    }
}

/// Parse a comma-separated address list, preserving input order.
///
/// Segments that yield no address are dropped.
pub fn parse_address_list(raw: &str) -> Vec<ParsedAddress> {
    split_segments(raw)
        .into_iter()
        .filter_map(|segment| {
            let parsed = parse_single_address(segment);
            if !parsed.is_valid() {
                tracing::warn!(segment = %segment, "dropping unparsable address");
                return None;
            }
            Some(parsed)
        })
        .collect()
}

/// Basic structural check: one `@`, non-empty local part and a dotted domain.
pub fn is_valid_email(candidate: &str) -> bool {
    let mut parts = candidate.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

/// Split on top-level commas; empty segments are skipped.
fn split_segments(raw: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for token in tokenize(raw) {
        if token.kind == TokenKind::Comma {
            segments.push(&raw[start..token.start]);
            start = token.end();
        }
    }
    segments.push(&raw[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Text preceding the bracket, trimmed of whitespace and surrounding quotes,
/// with backslash escapes resolved.
fn display_name_before(raw: &str, angle: &Token<'_>) -> Option<String> {
    let name = raw[..angle.start]
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(unescape(name))
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            other => out.push(other),
        }
    }
    out
}

fn is_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

fn is_domain_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-')
}

/// Find the leftmost `local@domain.tld` in `text`, where the top-level
/// label is at least two letters.
fn find_bare_address(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    for (at, _) in text.match_indices('@') {
        let mut start = at;
        while start > 0 && is_local_byte(bytes[start - 1]) {
            start -= 1;
        }
        if start == at {
            continue;
        }

        let mut span_end = at + 1;
        while span_end < bytes.len() && is_domain_byte(bytes[span_end]) {
            span_end += 1;
        }

        // Longest domain wins: try dots from the right.
        let domain_start = at + 1;
        for dot in (domain_start + 1..span_end).rev() {
            if bytes[dot] != b'.' {
                continue;
            }
            let tld_len = bytes[dot + 1..span_end]
                .iter()
                .take_while(|b| b.is_ascii_alphabetic())
                .count();
            if tld_len >= 2 {
                return Some(&text[start..dot + 1 + tld_len]);
            }
        }
    }
    None
}
