//! Table extraction
//!
//! Turns a `<table>` subtree into a pipe-delimited Markdown grid. Rows may
//! sit directly under the table or one level down inside a row group
//! (`thead`, `tbody`, `tfoot`); deeper nesting is not searched. Ragged rows
//! are padded on the right so every line has the same number of cells.

use crate::node::{Document, NodeId, NodeKind};
use crate::options::Options;
use crate::utilities::{escape_pipes, normalize_whitespace, CELL_TAGS, ROW_GROUP_TAGS, ROW_TAG};

/// Rows of cell text, as found in the markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableShape {
    pub rows: Vec<Vec<String>>,
}

impl TableShape {
    /// Widest row's cell count, 0 for a table without rows
    pub fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows padded with empty cells up to [`columns`](Self::columns)
    pub fn padded(&self) -> Vec<Vec<String>> {
        let columns = self.columns();
        self.rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(columns, String::new());
                row
            })
            .collect()
    }

    /// Render as a Markdown table. The first row is always the header.
    /// A table with no cells at all renders as an empty string.
    pub fn to_markdown(&self) -> String {
        let columns = self.columns();
        if columns == 0 {
            return String::new();
        }

        let rows = self.padded();
        let mut out = String::new();

        let mut rows = rows.iter();
        if let Some(header) = rows.next() {
            push_row(header, &mut out);
        }

        out.push_str("\n|");
        for _ in 0..columns {
            out.push_str("---|");
        }

        for row in rows {
            out.push('\n');
            push_row(row, &mut out);
        }

        out
    }
}

fn push_row(cells: &[String], out: &mut String) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |");
}

/// Collect the rows and cells below a table root
pub fn extract(document: &Document, table: NodeId, options: &Options) -> TableShape {
    let rows = table_rows(document, table)
        .into_iter()
        .map(|row| {
            document
                .children_tagged(row, CELL_TAGS)
                .map(|cell| cell_text(document, cell, options))
                .collect()
        })
        .collect();

    TableShape { rows }
}

fn table_rows(document: &Document, table: NodeId) -> Vec<NodeId> {
    let mut rows = Vec::new();
    for &child in document.children(table) {
        match document.tag(child) {
            Some(ROW_TAG) => rows.push(child),
            Some(tag) if ROW_GROUP_TAGS.contains(&tag) => {
                rows.extend(document.children_tagged(child, &[ROW_TAG]));
            }
            _ => {}
        }
    }
    rows
}

fn cell_text(document: &Document, cell: NodeId, options: &Options) -> String {
    let mut raw = String::new();
    let mut pending = vec![cell];
    while let Some(id) = pending.pop() {
        match document.kind(id) {
            Some(NodeKind::Text(text)) => raw.push_str(text),
            Some(NodeKind::Element { tag, .. }) if options.is_ignored(tag) => {}
            Some(_) => pending.extend(document.children(id).iter().rev()),
            None => {}
        }
    }
    escape_pipes(&normalize_whitespace(&raw))
}
