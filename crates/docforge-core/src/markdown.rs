//! In-place section edits of markdown documents.
//!
//! The generator patches user-supplied markdown (changelog fragments,
//! description overrides) by name of the section heading rather than by
//! offset. The scan here is a plain line walk, not a document-wide regex, so
//! heading text containing regex metacharacters needs no escaping and large
//! documents cost one pass.

/// Append `content` under the section titled `heading`, or create it.
///
/// A heading line is a line starting with a single `#` (depth 1 only),
/// followed by optional whitespace and the heading text, compared
/// case-insensitively with trailing whitespace tolerated. The section runs
/// from that line to the next line starting with `#` at *any* depth, or the
/// end of the document.
///
/// When the section exists, `content` is appended to its end, separated by a
/// blank line, and everything after the section is preserved. When it does
/// not, a new `# {heading}` block is appended with exactly enough newlines so
/// a blank line precedes it; only an empty document gets the block with no
/// spacing.
///
/// # Examples
///
/// ```rust
/// use docforge_core::append_to_md_heading;
///
/// let patched = append_to_md_heading("# Notes\n\nold", "Notes", "new");
/// assert_eq!(patched, "# Notes\n\nold\n\nnew\n");
///
/// assert_eq!(append_to_md_heading("", "Notes", "new"), "# Notes\n\nnew");
/// ```
#[must_use]
pub fn append_to_md_heading(markdown: &str, heading: &str, content: &str) -> String {
    if let Some(section_end) = find_section_end(markdown, heading) {
        let (section, rest) = markdown.split_at(section_end);
        return format!("{section}\n\n{content}\n{rest}");
    }

    if markdown.is_empty() {
        return format!("# {heading}\n\n{content}");
    }

    let trailing_newlines = markdown.len() - markdown.trim_end_matches('\n').len();
    let spacing = "\n".repeat(2usize.saturating_sub(trailing_newlines));
    format!("{markdown}{spacing}# {heading}\n\n{content}")
}

/// Find where the section titled `heading` ends.
///
/// Returns the byte offset just before the newline that introduces the next
/// `#` line (so the separator stays with the remainder), or the document
/// length when the section runs to the end. `None` when the heading does not
/// occur. A `#` line is only examined once the heading line has been
/// consumed, so the newline-backstep below cannot underflow.
fn find_section_end(markdown: &str, heading: &str) -> Option<usize> {
    let wanted = heading.trim().to_lowercase();
    let mut offset = 0;
    let mut in_section = false;

    for line in markdown.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if in_section {
            if line.starts_with('#') {
                return Some(line_start - 1);
            }
        } else if is_section_heading(line, &wanted) {
            in_section = true;
        }
    }

    in_section.then_some(markdown.len())
}

/// Whether a line is the depth-1 heading for `wanted_lower`.
fn is_section_heading(line: &str, wanted_lower: &str) -> bool {
    let Some(rest) = line.strip_prefix('#') else {
        return false;
    };
    if rest.starts_with('#') {
        return false;
    }
    rest.trim().to_lowercase() == wanted_lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_into_existing_section() {
        let patched = append_to_md_heading("# Title\n\nold", "Title", "new");
        assert_eq!(patched, "# Title\n\nold\n\nnew\n");
    }

    #[test]
    fn test_append_preserves_following_sections() {
        let md = "# Changelog\n\n- 1.0\n# License\n\nMIT";
        let patched = append_to_md_heading(md, "Changelog", "- 1.1");
        assert_eq!(
            patched,
            "# Changelog\n\n- 1.0\n\n- 1.1\n\n# License\n\nMIT"
        );
    }

    #[test]
    fn test_append_keeps_trailing_blank_lines_inside_section() {
        // A section already ending in a blank line keeps it; the separator
        // is added on top, exactly as the generator always has
        let md = "# Changelog\n\n- 1.0\n\n# License";
        let patched = append_to_md_heading(md, "Changelog", "- 1.1");
        assert_eq!(patched, "# Changelog\n\n- 1.0\n\n\n- 1.1\n\n# License");
    }

    #[test]
    fn test_section_ends_at_any_heading_depth() {
        let md = "# Title\nbody\n## Sub\nother";
        let patched = append_to_md_heading(md, "Title", "extra");
        assert_eq!(patched, "# Title\nbody\n\nextra\n\n## Sub\nother");
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let patched = append_to_md_heading("# TITLE\nbody", "title", "extra");
        assert_eq!(patched, "# TITLE\nbody\n\nextra\n");
    }

    #[test]
    fn test_heading_match_tolerates_trailing_whitespace() {
        let patched = append_to_md_heading("# Title   \nbody", "Title", "extra");
        assert_eq!(patched, "# Title   \nbody\n\nextra\n");
    }

    #[test]
    fn test_deeper_heading_is_not_the_section() {
        // "## Title" is not a depth-1 heading; a new section is created
        let patched = append_to_md_heading("## Title\nbody", "Title", "new");
        assert_eq!(patched, "## Title\nbody\n\n# Title\n\nnew");
    }

    #[test]
    fn test_missing_heading_appends_block() {
        let patched = append_to_md_heading("intro text", "Title", "new");
        assert_eq!(patched, "intro text\n\n# Title\n\nnew");
    }

    #[test]
    fn test_missing_heading_spacing_is_exact() {
        // Already ends with one newline: only one more is added
        assert_eq!(
            append_to_md_heading("intro\n", "Title", "new"),
            "intro\n\n# Title\n\nnew"
        );
        // Already ends with a blank line: nothing is added
        assert_eq!(
            append_to_md_heading("intro\n\n", "Title", "new"),
            "intro\n\n# Title\n\nnew"
        );
    }

    #[test]
    fn test_empty_and_whitespace_documents() {
        // Only the truly empty document skips the separating blank line
        assert_eq!(append_to_md_heading("", "Title", "new"), "# Title\n\nnew");
        assert_eq!(
            append_to_md_heading(" ", "Title", "new"),
            " \n\n# Title\n\nnew"
        );
        assert_eq!(
            append_to_md_heading("  \n", "Title", "new"),
            "  \n\n# Title\n\nnew"
        );
    }

    #[test]
    fn test_whitespace_document_keeps_heading_on_own_line() {
        // The fresh heading must land at the start of a line so a later
        // append finds the section it created
        let first = append_to_md_heading(" ", "Title", "a");
        assert_eq!(first, " \n\n# Title\n\na");

        let second = append_to_md_heading(&first, "Title", "b");
        assert_eq!(second, " \n\n# Title\n\na\n\nb\n");
    }

    #[test]
    fn test_heading_immediately_followed_by_another() {
        let patched = append_to_md_heading("# A\n# B\nbody", "A", "filled");
        assert_eq!(patched, "# A\n\nfilled\n\n# B\nbody");
    }

    #[test]
    fn test_heading_with_regex_metacharacters() {
        let patched = append_to_md_heading("# C++ (v2)\nbody", "C++ (v2)", "x");
        assert_eq!(patched, "# C++ (v2)\nbody\n\nx\n");
    }
}
