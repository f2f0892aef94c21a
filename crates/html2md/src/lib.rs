//! # html2md
//!
//! Convert HTML into Markdown-flavored plain text.
//!
//! ## Design
//!
//! The conversion runs in two phases:
//!
//! - **Tree building**: html5ever's tokenizer produces open/close/text
//!   events and [`html2md_core::TreeBuilder`] assembles them into a tree,
//!   repairing unbalanced markup one level at a time.
//! - **Rendering**: the tree is flattened into blocks separated by blank
//!   lines. Tables become pipe-delimited grids and `<hr>` becomes `---`.
//!
//! Script, style and similar technical tags are dropped with their whole
//! subtree. Emphasis, links, images and lists are passed through as plain
//! text.
//!
//! ## Example
//!
//! ```rust
//! use html2md::Html2MdService;
//!
//! let service = Html2MdService::new();
//! let text = service.convert("<h1>Title</h1><p>Content</p>");
//! assert_eq!(text, "Title\n\nContent");
//! ```

use std::path::PathBuf;

pub mod html;
mod service;
pub mod source;

pub use html::{parse_html, tokenize};
pub use html2md_core::{dump_tree, Document, MarkupEvent, Options};
pub use service::Html2MdService;
pub use source::Source;

/// Error type for markup acquisition
#[derive(Debug, thiserror::Error)]
pub enum Html2MdError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[cfg(feature = "fetch")]
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cannot fetch {0}: built without the `fetch` feature")]
    FetchDisabled(String),
}

pub type Result<T> = std::result::Result<T, Html2MdError>;
