//! Escaping helpers for rendered HTML attributes.
//!
//! The unescape side is deliberately the narrow inverse of the escaping the
//! renderer performs on attribute payloads, not a general HTML entity
//! decoder: only decimal numeric references, `&amp;`, and `&quot;` are
//! decoded, in that fixed order.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex for decimal numeric character references: `&#N;`
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static NUMERIC_REF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#(\d+);").unwrap());

/// Backslash-escape every `"` and `\` in a string.
///
/// Makes a value safe to embed inside a double-quoted HTML attribute that is
/// itself wrapped in a script payload.
///
/// # Examples
///
/// ```rust
/// use docforge_core::escape_html_attr_chars;
///
/// assert_eq!(escape_html_attr_chars(r#"He said "hi""#), r#"He said \"hi\""#);
/// ```
#[must_use]
pub fn escape_html_attr_chars(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Decode the narrow entity set the renderer produces.
///
/// Decimal numeric references run first so a literal `&amp;` in the input is
/// not mis-decoded partway, then `&amp;` becomes `&`, then `&quot;` becomes
/// `"`. Numeric references that name an invalid code point are left verbatim.
///
/// # Examples
///
/// ```rust
/// use docforge_core::unescape_html_chars;
///
/// assert_eq!(unescape_html_chars("&amp;&quot;&#65;"), "&\"A");
/// ```
#[must_use]
pub fn unescape_html_chars(input: &str) -> String {
    let decoded = NUMERIC_REF_RE.replace_all(input, |caps: &Captures<'_>| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });
    decoded.replace("&amp;", "&").replace("&quot;", "\"")
}
