//! URL resolution and normalization helpers.
//!
//! Server URLs in API descriptions are frequently malformed from a strict
//! parser's point of view: relative (`/api/v2`), templated
//! (`https://{host}/v2`), or empty. The helpers here are therefore fail-open:
//! a parse failure degrades to a best-effort string rather than failing the
//! build, with the swallowed error reported at debug level.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Regex for a URL scheme prefix: `letter (letter | digit | + | . | -)* :`
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").unwrap());

/// Parse a string as an absolute URL.
///
/// This is the strict seam the fail-open helpers in this module are built on.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the input is not a valid absolute URL.
pub fn parse_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|err| Error::InvalidUrl(format!("{input}: {err}")))
}

/// Remove exactly one trailing `/` from a path, if present.
///
/// Idempotent: a path without a trailing slash is returned unchanged.
#[must_use]
pub fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Whether a string is an absolute URL.
///
/// True when the string starts with a scheme (`https:`, `mailto:`, ...) or is
/// protocol-relative (`//cdn.example.com/x`).
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("//") || SCHEME_RE.is_match(url)
}

/// Resolve `target` against `base`, tolerating malformed bases.
///
/// Precedence, evaluated in order:
///
/// 1. Protocol-relative `target` (`//host/x`): combined with the scheme of
///    `base`, defaulting to `https` when `base` does not parse.
/// 2. Absolute `target`: returned unchanged.
/// 3. Relative `target` (no leading `/`): joined as
///    `strip_trailing_slash(base) + "/" + target`. No `..`/`.` normalization
///    is performed.
/// 4. Absolute-path `target` (leading `/`): `base` is parsed and its path
///    replaced; when `base` does not parse, `target` is returned alone.
///
/// The result always has its trailing slash stripped. Never fails: malformed
/// bases degrade per the rules above.
///
/// # Examples
///
/// ```rust
/// use docforge_core::resolve_url;
///
/// assert_eq!(resolve_url("http://test.com:1234", "path"), "http://test.com:1234/path");
/// assert_eq!(resolve_url("http://test.com", "//cdn.com/x"), "http://cdn.com/x");
/// assert_eq!(resolve_url("http://test.com/old", "/new"), "http://test.com/new");
/// ```
#[must_use]
pub fn resolve_url(base: &str, target: &str) -> String {
    let resolved = if target.starts_with("//") {
        let scheme = match parse_url(base) {
            Ok(url) => url.scheme().to_string(),
            Err(err) => {
                debug!(error = %err, %base, "base URL unparseable; defaulting scheme to https");
                "https".to_string()
            },
        };
        format!("{scheme}:{target}")
    } else if is_absolute_url(target) {
        target.to_string()
    } else if !target.starts_with('/') {
        format!("{}/{}", strip_trailing_slash(base), target)
    } else {
        match parse_url(base) {
            Ok(mut url) => {
                url.set_path(target);
                url.to_string()
            },
            Err(err) => {
                debug!(error = %err, %base, "base URL unparseable; using target path alone");
                target.to_string()
            },
        }
    };

    strip_trailing_slash(&resolved).to_string()
}

/// Extract the path component of a server URL.
///
/// Fails open: an unparseable input (an empty string, a relative path, a
/// templated URL) is returned unchanged.
#[must_use]
pub fn base_path(server_url: &str) -> String {
    match parse_url(server_url) {
        Ok(url) => url.path().to_string(),
        Err(err) => {
            debug!(error = %err, url = %server_url, "server URL unparseable; keeping as base path");
            server_url.to_string()
        },
    }
}

/// Strip the query string from a server URL.
///
/// Fails open: an unparseable input is returned unchanged.
#[must_use]
pub fn remove_query_string(server_url: &str) -> String {
    match parse_url(server_url) {
        Ok(mut url) => {
            url.set_query(None);
            url.to_string()
        },
        Err(err) => {
            debug!(error = %err, url = %server_url, "server URL unparseable; keeping query string");
            server_url.to_string()
        },
    }
}
