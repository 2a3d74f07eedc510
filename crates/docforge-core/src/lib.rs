//! # docforge-core
//!
//! Shared helper library for docforge - a documentation generator that turns
//! API descriptions into rendered reference pages.
//!
//! This crate collects the small, stateless building blocks the generator
//! pipeline leans on everywhere: collection transforms over structural JSON
//! data, URL resolution that tolerates templated or malformed server URLs,
//! slug and title derivation for headings, attribute escaping for rendered
//! HTML, deep merging of generator configuration, and in-place section edits
//! of markdown documents.
//!
//! ## Design
//!
//! Every public function is synchronous and pure; the single documented
//! exception is [`merge_objects`], which mutates its `&mut` target. Helpers
//! that touch URL parsing are fail-open: a malformed input (for example a
//! server URL still carrying a `{port}` template variable) degrades to a
//! best-effort string instead of failing a whole documentation build. The
//! parse failures those helpers swallow are reported through `tracing` at
//! debug level.
//!
//! ## Quick start
//!
//! ```rust
//! use docforge_core::{resolve_url, safe_slugify};
//!
//! let href = resolve_url("https://api.example.com/v2/", "pets");
//! assert_eq!(href, "https://api.example.com/v2/pets");
//!
//! let anchor = safe_slugify("Create & Update");
//! assert_eq!(anchor, "create-and-update");
//! ```

/// Error types and result aliases
pub mod error;
/// Escaping helpers for rendered HTML attributes
pub mod html;
/// In-place section edits of markdown documents
pub mod markdown;
/// Slug and title derivation for headings and anchors
pub mod slug;
/// Generic collection and tree transforms
pub mod transform;
/// URL resolution and normalization helpers
pub mod urls;
/// Predicates and deep merge over structural JSON values
pub mod value;

// Re-export commonly used helpers
pub use error::{Error, Result};
pub use html::{escape_html_attr_chars, unescape_html_chars};
pub use markdown::append_to_md_heading;
pub use slug::{safe_slugify, titleize};
pub use transform::{flatten_by_prop, map_values, map_with_last};
pub use urls::{
    base_path, is_absolute_url, parse_url, remove_query_string, resolve_url, strip_trailing_slash,
};
pub use value::{is_array, is_boolean, is_numeric, is_object, merge_objects};
