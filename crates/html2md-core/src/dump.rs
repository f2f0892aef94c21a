//! Diagnostic outline of a built tree.

use crate::node::{Document, NodeId, NodeKind};
use crate::utilities::normalize_whitespace;

/// One line per node, indented two spaces per level below the root.
pub fn dump_tree(document: &Document) -> String {
    let mut out = String::new();
    out.push_str("#root");

    let mut pending: Vec<(NodeId, usize)> = document
        .children(document.root())
        .iter()
        .rev()
        .map(|&child| (child, 1))
        .collect();

    while let Some((id, depth)) = pending.pop() {
        let Some(kind) = document.kind(id) else {
            continue;
        };

        out.push('\n');
        out.push_str(&"  ".repeat(depth));

        match kind {
            NodeKind::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push_str(&format!(" {name}=\"{value}\""));
                }
                out.push('>');
            }
            NodeKind::Text(text) => out.push_str(&format!("{:?}", normalize_whitespace(text))),
            NodeKind::Root => out.push_str("#root"),
        }

        pending.extend(document.children(id).iter().rev().map(|&child| (child, depth + 1)));
    }

    out
}
