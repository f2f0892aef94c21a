//! html2md-core - markup tree building and Markdown text rendering
//!
//! This crate turns a stream of markup events into a tree and renders that
//! tree as Markdown-flavored plain text. It does not tokenize markup itself;
//! `html2md` feeds it events produced by html5ever's tokenizer.
//!
//! # Architecture
//!
//! ```text
//! open/close/text events ──▶ TreeBuilder ──▶ Document ──▶ render ──▶ String
//!                                                           │
//!                                                           └─▶ table::extract
//! ```
//!
//! # Example
//!
//! ```rust
//! use html2md_core::{build, render, MarkupEvent, Options};
//!
//! let options = Options::default();
//! let events = vec![
//!     MarkupEvent::open("h1"),
//!     MarkupEvent::text("Title"),
//!     MarkupEvent::close("h1"),
//!     MarkupEvent::open("p"),
//!     MarkupEvent::text("Content"),
//!     MarkupEvent::close("p"),
//! ];
//!
//! let document = build(events, &options);
//! assert_eq!(render(&document, &options), "Title\n\nContent");
//! ```

pub mod builder;
pub mod dump;
pub mod node;
mod options;
pub mod render;
pub mod table;
pub mod utilities;

pub use builder::{build, MarkupEvent, TreeBuilder};
pub use dump::dump_tree;
pub use node::{Attributes, Document, Node, NodeId, NodeKind};
pub use options::Options;
pub use render::{render, render_blocks};
pub use table::TableShape;

#[cfg(test)]
mod properties;
