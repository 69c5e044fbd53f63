//! Forwarding-marker production for subjects
//!
//! marker := ("fw" | "fwd") ":" whitespace*, case-insensitive, anchored at
//! the start of the subject. Only one marker is removed.

/// Strip a leading `Fwd:` / `Fw:` / `FW:` marker from a subject.
pub fn strip_forward_marker(subject: &str) -> &str {
    let bytes = subject.as_bytes();
    if bytes.len() < 3 || !bytes[..2].eq_ignore_ascii_case(b"fw") {
        return subject;
    }

    let mut i = 2;
    if bytes[i].eq_ignore_ascii_case(&b'd') {
        i += 1;
    }
    if bytes.get(i) != Some(&b':') {
        return subject;
    }

    subject[i + 1..].trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_common_markers() {
        assert_eq!(strip_forward_marker("Fwd: Hello"), "Hello");
        assert_eq!(strip_forward_marker("FW: Hello"), "Hello");
        assert_eq!(strip_forward_marker("Fw:Hello"), "Hello");
        assert_eq!(strip_forward_marker("fwd:   Hello"), "Hello");
        assert_eq!(strip_forward_marker("FWD: Hello"), "Hello");
    }

    #[test]
    fn only_one_marker_is_removed() {
        assert_eq!(strip_forward_marker("Fwd: Fwd: Hello"), "Fwd: Hello");
    }

    #[test]
    fn marker_must_be_at_start() {
        assert_eq!(strip_forward_marker("Re: Fwd: Hello"), "Re: Fwd: Hello");
        assert_eq!(strip_forward_marker(" Fwd: Hello"), " Fwd: Hello");
    }

    #[test]
    fn marker_requires_colon() {
        assert_eq!(strip_forward_marker("Fwd Hello"), "Fwd Hello");
        assert_eq!(strip_forward_marker("Fwx: Hello"), "Fwx: Hello");
        assert_eq!(strip_forward_marker("Fwdd: Hello"), "Fwdd: Hello");
    }

    #[test]
    fn short_and_unrelated_subjects_pass_through() {
        assert_eq!(strip_forward_marker(""), "");
        assert_eq!(strip_forward_marker("Fw"), "Fw");
        assert_eq!(strip_forward_marker("Hello"), "Hello");
        assert_eq!(strip_forward_marker("Fwd:"), "");
    }
}
