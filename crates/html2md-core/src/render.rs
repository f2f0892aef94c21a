//! Markdown renderer
//!
//! Walks a [`Document`] depth-first and flattens it into blocks separated by
//! one blank line. Tables and horizontal rules get their own formatting;
//! every other text run becomes a block of whitespace-collapsed text.

use crate::node::{Document, NodeId, NodeKind};
use crate::options::Options;
use crate::table;
use crate::utilities::{normalize_whitespace, HR_TAG, TABLE_TAG};

/// Separator between two emitted blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Literal line emitted for a horizontal rule
pub const HORIZONTAL_RULE: &str = "---";

/// Render a document to Markdown-flavored text
pub fn render(document: &Document, options: &Options) -> String {
    render_blocks(document, options).join(BLOCK_SEPARATOR)
}

/// Render a document into its individual blocks, in output order
pub fn render_blocks(document: &Document, options: &Options) -> Vec<String> {
    let mut blocks = Vec::new();
    // pre-order walk; children go on in reverse so the first one pops first
    let mut pending: Vec<NodeId> = document.children(document.root()).to_vec();
    pending.reverse();

    while let Some(id) = pending.pop() {
        let Some(kind) = document.kind(id) else {
            continue;
        };

        match kind {
            NodeKind::Text(text) => push_block(&mut blocks, normalize_whitespace(text)),

            NodeKind::Element { tag, .. } if options.is_ignored(tag) => {}

            NodeKind::Element { tag, .. } if tag == TABLE_TAG => {
                push_block(&mut blocks, table::extract(document, id, options).to_markdown());
            }

            NodeKind::Element { tag, .. } if tag == HR_TAG => {
                blocks.push(HORIZONTAL_RULE.to_string());
            }

            NodeKind::Element { .. } | NodeKind::Root => {
                pending.extend(document.children(id).iter().rev());
            }
        }
    }

    blocks
}

fn push_block(blocks: &mut Vec<String>, block: String) {
    if !block.is_empty() {
        blocks.push(block);
    }
}
