//! Address-field parsing
//!
//! Header-like strings ("To", "Cc", "From" lines) are tokenized once and then
//! matched against a small set of productions:
//!
//! - address list: segments separated by commas outside quotes
//! - bracketed address: `Display Name <local@domain>`
//! - bare address: `local@domain.tld` anywhere in the segment
//!
//! The forwarding-marker production (`Fwd:` / `FW:` subject prefixes) lives
//! alongside since it is the same kind of fixed grammar.

mod forward;
mod parser;
mod tokenizer;

pub use forward::strip_forward_marker;
pub use parser::{is_valid_email, parse_address_list, parse_single_address, ParsedAddress};
pub use tokenizer::{tokenize, Token, TokenKind};
