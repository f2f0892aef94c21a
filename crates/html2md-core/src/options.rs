//! Configuration options for tree building and rendering

use indexmap::IndexSet;

use crate::utilities::DEFAULT_IGNORED_TAGS;

/// Options shared by the tree builder and the renderer.
///
/// Options are always passed explicitly, so two conversions with different
/// settings can run side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tags whose whole subtree is dropped while the tree is built
    pub ignored_tags: IndexSet<String>,

    /// Produce a diagnostic dump of the built tree
    pub dump_tree: bool,
}

impl Options {
    /// Add a tag to the ignore set
    pub fn ignore(mut self, tag: &str) -> Self {
        self.ignored_tags.insert(tag.to_ascii_lowercase());
        self
    }

    /// Remove a tag from the ignore set
    pub fn unignore(mut self, tag: &str) -> Self {
        self.ignored_tags.shift_remove(&tag.to_ascii_lowercase());
        self
    }

    /// Enable or disable the tree dump
    pub fn with_dump_tree(mut self, dump_tree: bool) -> Self {
        self.dump_tree = dump_tree;
        self
    }

    /// Check if a tag's subtree is ignored
    pub fn is_ignored(&self, tag: &str) -> bool {
        self.ignored_tags.contains(tag.to_ascii_lowercase().as_str())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ignored_tags: DEFAULT_IGNORED_TAGS.iter().map(|t| t.to_string()).collect(),
            dump_tree: false,
        }
    }
}
