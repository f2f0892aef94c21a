//! Tree builder
//!
//! Consumes the open/close/text event stream of a markup tokenizer and
//! assembles a [`Document`]. The builder never fails: unbalanced markup is
//! repaired with a single-level pop policy and anything still open when the
//! stream ends is closed implicitly.

use log::{debug, trace};

use crate::node::{Attributes, Document, NodeId};
use crate::options::Options;
use crate::utilities::is_void;

/// One notification from a markup tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// Start tag
    Open {
        tag: String,
        attributes: Attributes,
        self_closing: bool,
    },
    /// End tag
    Close { tag: String },
    /// Character data
    Text(String),
}

impl MarkupEvent {
    /// Start tag without attributes
    pub fn open(tag: &str) -> Self {
        MarkupEvent::Open {
            tag: tag.to_string(),
            attributes: Attributes::new(),
            self_closing: false,
        }
    }

    /// End tag
    pub fn close(tag: &str) -> Self {
        MarkupEvent::Close {
            tag: tag.to_string(),
        }
    }

    /// Character data
    pub fn text(chars: &str) -> Self {
        MarkupEvent::Text(chars.to_string())
    }
}

/// An open element on the builder stack
#[derive(Debug, Clone)]
enum Frame {
    /// Element that receives children
    Element(NodeId),
    /// Inside an ignored subtree; nothing is attached
    Ignored(String),
}

/// Incremental tree builder.
pub struct TreeBuilder<'a> {
    document: Document,
    stack: Vec<Frame>,
    options: &'a Options,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder with an empty document
    pub fn new(options: &'a Options) -> Self {
        Self {
            document: Document::new(),
            stack: Vec::new(),
            options,
        }
    }

    /// Feed one event
    pub fn process(&mut self, event: MarkupEvent) {
        match event {
            MarkupEvent::Open {
                tag,
                attributes,
                self_closing,
            } => self.open(&tag, attributes, self_closing),
            MarkupEvent::Close { tag } => self.close(&tag),
            MarkupEvent::Text(chars) => self.text(&chars),
        }
    }

    /// Handle a start tag
    pub fn open(&mut self, tag: &str, attributes: Attributes, self_closing: bool) {
        let tag = tag.to_ascii_lowercase();
        let childless = self_closing || is_void(&tag);
        trace!("open <{tag}>");

        if self.in_ignored() || self.options.is_ignored(&tag) {
            if !childless {
                self.stack.push(Frame::Ignored(tag));
            }
            return;
        }

        let parent = self.current();
        let id = self.document.append_element(parent, &tag, attributes);
        if !childless {
            self.stack.push(Frame::Element(id));
        }
    }

    /// Handle an end tag.
    ///
    /// Exactly one frame is popped, whatever its tag. End tags of void
    /// elements and end tags arriving with nothing open are discarded.
    pub fn close(&mut self, tag: &str) {
        let tag = tag.to_ascii_lowercase();
        trace!("close </{tag}>");

        if is_void(&tag) {
            return;
        }

        match self.stack.pop() {
            None => debug!("discarding stray </{tag}> at document level"),
            Some(frame) => {
                let open = self.frame_tag(&frame);
                if open != tag {
                    debug!("</{tag}> closes <{open}> (mismatched end tag)");
                }
            }
        }
    }

    /// Handle character data
    pub fn text(&mut self, chars: &str) {
        if chars.is_empty() || self.in_ignored() {
            return;
        }
        let parent = self.current();
        self.document.append_text(parent, chars);
    }

    /// Close everything still open and return the tree
    pub fn finish(mut self) -> Document {
        if !self.stack.is_empty() {
            debug!("implicitly closing {} open element(s) at end of input", self.stack.len());
            while let Some(frame) = self.stack.pop() {
                trace!("implicit close <{}>", self.frame_tag(&frame));
            }
        }
        self.document
    }

    /// Number of currently open frames
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn in_ignored(&self) -> bool {
        matches!(self.stack.last(), Some(Frame::Ignored(_)))
    }

    fn current(&self) -> NodeId {
        match self.stack.last() {
            Some(Frame::Element(id)) => *id,
            _ => self.document.root(),
        }
    }

    fn frame_tag(&self, frame: &Frame) -> String {
        match frame {
            Frame::Element(id) => self.document.tag(*id).unwrap_or_default().to_string(),
            Frame::Ignored(tag) => tag.clone(),
        }
    }
}

/// Build a complete tree from an event stream
pub fn build<I>(events: I, options: &Options) -> Document
where
    I: IntoIterator<Item = MarkupEvent>,
{
    let mut builder = TreeBuilder::new(options);
    for event in events {
        builder.process(event);
    }
    builder.finish()
}
