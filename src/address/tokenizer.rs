//! Tokenizer for address fields

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of ordinary characters
    Text,
    /// `"..."`; unterminated quotes run to end of input
    Quoted,
    /// `<...>`; a `<` not closed before the next `,`, `<` or `"` is plain text
    Angle,
    /// A separating comma (never inside quotes)
    Comma,
}

/// A token borrowed from the input, with its byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Full source slice including delimiters
    pub raw: &'a str,
    /// Byte offset of `raw` in the input
    pub start: usize,
}

impl<'a> Token<'a> {
    /// The token text without its delimiters
    pub fn inner(&self) -> &'a str {
        match self.kind {
            TokenKind::Quoted => {
                let body = &self.raw[1..];
                body.strip_suffix('"').unwrap_or(body)
            }
            TokenKind::Angle => &self.raw[1..self.raw.len() - 1],
            TokenKind::Text | TokenKind::Comma => self.raw,
        }
    }

    /// Byte offset just past the token
    pub fn end(&self) -> usize {
        self.start + self.raw.len()
    }
}

/// Split an address field into tokens.
///
/// Every byte of the input belongs to exactly one token, so concatenating
/// the `raw` slices reproduces the input.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                flush_text(input, &mut tokens, &mut text_start, i);
                let end = scan_quoted(bytes, i);
                tokens.push(Token {
                    kind: TokenKind::Quoted,
                    raw: &input[i..end],
                    start: i,
                });
                i = end;
            }
            b'<' => match closing_bracket(bytes, i) {
                Some(close) => {
                    flush_text(input, &mut tokens, &mut text_start, i);
                    let end = close + 1;
                    tokens.push(Token {
                        kind: TokenKind::Angle,
                        raw: &input[i..end],
                        start: i,
                    });
                    i = end;
                }
                None => {
                    text_start.get_or_insert(i);
                    i += 1;
                }
            },
            b',' => {
                flush_text(input, &mut tokens, &mut text_start, i);
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    raw: &input[i..i + 1],
                    start: i,
                });
                i += 1;
            }
            _ => {
                text_start.get_or_insert(i);
                i += 1;
            }
        }
    }
    flush_text(input, &mut tokens, &mut text_start, bytes.len());

    tokens
}

fn flush_text<'a>(
    input: &'a str,
    tokens: &mut Vec<Token<'a>>,
    text_start: &mut Option<usize>,
    end: usize,
) {
    if let Some(start) = text_start.take() {
        tokens.push(Token {
            kind: TokenKind::Text,
            raw: &input[start..end],
            start,
        });
    }
}

/// Offset of the `>` closing the bracket at `open`.
///
/// `None` when a `,`, `<` or `"` comes first.
fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    bytes[open + 1..]
        .iter()
        .position(|&b| matches!(b, b'>' | b',' | b'<' | b'"'))
        .map(|offset| open + 1 + offset)
        .filter(|&close| bytes[close] == b'>')
}

/// Return the byte offset just past the quoted string opening at `open`.
fn scan_quoted(bytes: &[u8], open: usize) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn bracketed_address_tokens() {
        let tokens = tokenize("Jane Doe <jane@x.com>");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].raw, "Jane Doe ");
        assert_eq!(tokens[1].kind, TokenKind::Angle);
        assert_eq!(tokens[1].inner(), "jane@x.com");
        assert_eq!(tokens[1].start, 9);
    }

    #[test]
    fn comma_inside_quotes_is_not_a_separator() {
        assert_eq!(
            kinds("\"Doe, Jane\" <jane@x.com>, bob@y.com"),
            vec![
                TokenKind::Quoted,
                TokenKind::Text,
                TokenKind::Angle,
                TokenKind::Comma,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn bracket_does_not_span_a_comma() {
        assert_eq!(
            kinds("Jane <jane@x.com, Bob <bob@y.com>"),
            vec![
                TokenKind::Text,
                TokenKind::Comma,
                TokenKind::Text,
                TokenKind::Angle,
            ]
        );
    }

    #[test]
    fn bracket_does_not_span_another_bracket_or_quote() {
        assert_eq!(
            kinds("<a <b@x.com>"),
            vec![TokenKind::Text, TokenKind::Angle]
        );
        assert_eq!(
            kinds("<a \"b\" <c@x.com>"),
            vec![TokenKind::Text, TokenKind::Quoted, TokenKind::Text, TokenKind::Angle]
        );
    }

    #[test]
    fn escaped_quote_stays_inside_quoted_token() {
        let tokens = tokenize(r#""Jane \"JD\" Doe" <jd@x.com>"#);
        assert_eq!(tokens[0].kind, TokenKind::Quoted);
        assert_eq!(tokens[0].inner(), r#"Jane \"JD\" Doe"#);
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let tokens = tokenize("\"Doe, Jane <jane@x.com>");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Quoted);
        assert_eq!(tokens[0].inner(), "Doe, Jane <jane@x.com>");
    }

    #[test]
    fn unclosed_bracket_is_text() {
        assert_eq!(kinds("Jane <jane@x.com"), vec![TokenKind::Text]);
    }

    #[test]
    fn tokens_cover_entire_input() {
        let input = "a <b@c.de>, \"x, y\" <z@q.io>,,tail";
        let rebuilt: String = tokenize(input).iter().map(|t| t.raw).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
