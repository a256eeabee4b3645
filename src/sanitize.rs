//! Input sanitization passes.
//!
//! Two distinct passes, applied at different points of the pipeline:
//!
//! - [`strip_symbols`] removes `$` and `.` from identity-style fields
//!   (names, ID numbers, account numbers) before they go on the wire. It is
//!   deliberately never applied to passwords, and never to the payment
//!   amount, whose decimal point must survive parsing.
//! - [`strip_html`] removes script/style elements with their content and
//!   any remaining markup tags. Payment fields pass through it both on the
//!   way out (before submission) and on the way in (records fetched from
//!   the backend, before they reach the caller).

use std::sync::OnceLock;

use regex::Regex;

fn symbols_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[$.]").unwrap())
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>").unwrap()
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Remove `$` and `.` characters.
pub fn strip_symbols(value: &str) -> String {
    symbols_re().replace_all(value, "").into_owned()
}

/// Remove script-bearing content, then any remaining markup tags.
pub fn strip_html(value: &str) -> String {
    let without_scripts = script_re().replace_all(value, "");
    tag_re().replace_all(&without_scripts, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dollar_and_dot() {
        assert_eq!(strip_symbols("1.000$"), "1000");
        assert_eq!(strip_symbols("John Doe"), "John Doe");
        assert_eq!(strip_symbols("$.$."), "");
    }

    #[test]
    fn strips_script_elements_with_content() {
        assert_eq!(
            strip_html("USD<script>alert('x')</script>"),
            "USD"
        );
        assert_eq!(
            strip_html("<SCRIPT src=\"evil.js\">payload</SCRIPT>ZAR"),
            "ZAR"
        );
        assert_eq!(strip_html("<style>body{}</style>EUR"), "EUR");
    }

    #[test]
    fn strips_plain_tags_but_keeps_text() {
        assert_eq!(strip_html("<b>SWIFT</b>"), "SWIFT");
        assert_eq!(strip_html("ABCDUS33XXX"), "ABCDUS33XXX");
        assert_eq!(strip_html("<img src=x onerror=alert(1)>123"), "123");
    }

    #[test]
    fn script_across_lines_is_removed() {
        assert_eq!(strip_html("12<script>\nalert(1)\n</script>345"), "12345");
    }
}
