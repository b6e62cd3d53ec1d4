//! Pure text-extraction helpers for the normalization cascade.

use once_cell::sync::Lazy;
use regex::Regex;

/// Greedy, so the span runs from the first `{` to the last `}` in the text.
static JSON_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// The outermost `{...}` span of the text, if any.
pub fn extract_json_span(text: &str) -> Option<&str> {
    JSON_SPAN_RE.find(text).map(|m| m.as_str())
}

/// Common malformed-JSON fix: model replies sometimes quote with `'`.
pub fn fix_single_quotes(span: &str) -> String {
    span.replace('\'', "\"")
}
