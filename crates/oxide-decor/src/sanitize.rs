//! Value sanitizing before display.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"));

/// Filters a raw submitted value into a string that is safe to embed in
/// HTML text and in double-quoted attribute values.
pub trait Sanitizer: Send + Sync {
    /// Returns the sanitized form of `value`.
    fn sanitize(&self, value: &str) -> String;
}

/// The default string filter: strips markup tags, then escapes what is
/// left.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringFilter;

impl Sanitizer for StringFilter {
    fn sanitize(&self, value: &str) -> String {
        html_escape(&TAG_PATTERN.replace_all(value, ""))
    }
}

/// Escapes only, keeping tag text visible as escaped characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeFilter;

impl Sanitizer for EscapeFilter {
    fn sanitize(&self, value: &str) -> String {
        html_escape(value)
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
