//! XML escaping for text nodes and attribute values.
//!
//! Device names, app names and summary text arrive from an external API
//! and land directly in markup. Everything user-controlled goes through
//! [`escape`] exactly once before it reaches a document.

/// Escape the five XML-significant characters `& < > " '`.
///
/// Single left-to-right pass, so the `&` of an entity produced for one
/// character is never itself re-escaped. No other transformation is
/// applied: whitespace and non-ASCII text pass through untouched, and
/// empty input yields the empty string.
///
/// The function is not idempotent: escaping an already escaped string
/// escapes the entity ampersands again. Callers pass raw text only.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
