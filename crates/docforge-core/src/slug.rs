//! Slug and title derivation for headings and anchors.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Uppercase the first character of a string, leaving the rest untouched.
///
/// Empty input produces an empty string.
///
/// # Examples
///
/// ```rust
/// use docforge_core::titleize;
///
/// assert_eq!(titleize("responses"), "Responses");
/// assert_eq!(titleize(""), "");
/// ```
#[must_use]
pub fn titleize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Derive a URL-safe anchor slug from arbitrary heading text.
///
/// The primary path transliterates the input: NFKD normalization with
/// combining marks stripped, lowercasing, alphanumerics kept, `&` spelled out
/// as `and`, everything else folded to `-` with runs collapsed and the ends
/// trimmed. When transliteration leaves nothing (symbol-only input), a
/// deterministic manual fallback takes over: lowercase, whitespace to `-`,
/// `&` to `-and-`, remaining punctuation dropped.
///
/// # Examples
///
/// ```rust
/// use docforge_core::safe_slugify;
///
/// assert_eq!(safe_slugify("Hello & World!"), "hello-and-world");
/// assert_eq!(safe_slugify("Café ‑ Menü"), "cafe-menu");
/// ```
#[must_use]
pub fn safe_slugify(value: &str) -> String {
    let slug = transliterate(value);
    if slug.is_empty() {
        fallback_slug(value)
    } else {
        slug
    }
}

fn transliterate(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch == '&' {
            slug.push_str("-and-");
        } else if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            slug.push('-');
        }
    }
    collapse_hyphens(&slug)
}

fn fallback_slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.to_lowercase().chars() {
        if ch.is_whitespace() {
            slug.push('-');
        } else if ch == '&' {
            slug.push_str("-and-");
        } else if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            slug.push(ch);
        }
        // remaining punctuation is dropped
    }
    collapse_hyphens(&slug)
}

/// Collapse `-` runs and trim leading/trailing `-`.
fn collapse_hyphens(slug: &str) -> String {
    let mut collapsed = String::with_capacity(slug.len());
    let mut prev_was_hyphen = true;
    for ch in slug.chars() {
        if ch == '-' {
            if !prev_was_hyphen {
                collapsed.push('-');
                prev_was_hyphen = true;
            }
        } else {
            collapsed.push(ch);
            prev_was_hyphen = false;
        }
    }
    collapsed.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("hello world"), "Hello world");
        assert_eq!(titleize("ALREADY"), "ALREADY");
        assert_eq!(titleize("ñandu"), "Ñandu");
        assert_eq!(titleize("x"), "X");
        assert_eq!(titleize(""), "");
    }

    #[test]
    fn test_safe_slugify_basic() {
        assert_eq!(safe_slugify("Get Started"), "get-started");
        assert_eq!(safe_slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_safe_slugify_ampersand() {
        assert_eq!(safe_slugify("Hello & World!"), "hello-and-world");
        assert_eq!(safe_slugify("A&B"), "a-and-b");
    }

    #[test]
    fn test_safe_slugify_strips_diacritics() {
        assert_eq!(safe_slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(safe_slugify("Übersicht"), "ubersicht");
    }

    #[test]
    fn test_safe_slugify_collapses_and_trims_hyphens() {
        assert_eq!(safe_slugify("--a---b--"), "a-b");
        assert_eq!(safe_slugify("a !?! b"), "a-b");
    }

    #[test]
    fn test_safe_slugify_symbol_only_input() {
        // Nothing survives either path; the slug is empty rather than junk
        assert_eq!(safe_slugify("!!!"), "");
        assert_eq!(safe_slugify("---"), "");
    }

    proptest! {
        // Slugs are lowercase, never start or end with '-', and never
        // contain a '-' run.
        #[test]
        fn slug_shape(input in ".{0,60}") {
            let slug = safe_slugify(&input);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
            prop_assert!(slug.chars().all(|c| !c.is_ascii_uppercase()));
        }

        #[test]
        fn slugify_is_idempotent(input in "[a-zA-Z0-9 &!]{0,40}") {
            let once = safe_slugify(&input);
            prop_assert_eq!(safe_slugify(&once), once.clone());
        }
    }
}
