//! Utility functions and constants for markup processing.

/// Void (content-less) elements. They never receive children and their
/// closing tags are ignored.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Technical tags whose subtrees never contribute text.
pub const DEFAULT_IGNORED_TAGS: &[&str] =
    &["script", "style", "meta", "link", "noscript", "template"];

/// Tag that starts a table subtree
pub const TABLE_TAG: &str = "table";

/// Tag rendered as a horizontal rule
pub const HR_TAG: &str = "hr";

/// Wrappers a table may put around its rows
pub const ROW_GROUP_TAGS: &[&str] = &["thead", "tbody", "tfoot"];

/// Table row tag
pub const ROW_TAG: &str = "tr";

/// Header and data cell tags
pub const CELL_TAGS: &[&str] = &["th", "td"];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Collapse every run of whitespace to a single space and strip both ends.
pub fn normalize_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            pending_space = !result.is_empty();
        } else {
            if pending_space {
                result.push(' ');
                pending_space = false;
            }
            result.push(c);
        }
    }

    result
}

/// Escape pipe characters so cell text cannot break a table row
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
