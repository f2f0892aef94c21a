//! HTML tokenization support.
//!
//! This module drives html5ever's tokenizer (not its tree builder) and turns
//! the raw token stream into the open/close/text events consumed by
//! [`html2md_core::TreeBuilder`]. Nesting is left exactly as written in the
//! markup; repairing it is the builder's job.

use std::cell::RefCell;

use html2md_core::{build, Attributes, Document, MarkupEvent, Options};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::interface::TokenizerResult;
use log::{trace, warn};

/// Token sink collecting markup events in document order
#[derive(Default)]
struct EventSink {
    events: RefCell<Vec<MarkupEvent>>,
}

impl EventSink {
    fn push(&self, event: MarkupEvent) {
        self.events.borrow_mut().push(event);
    }

    fn process_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();

        match tag.kind {
            TagKind::StartTag => {
                let mut attributes = Attributes::new();
                for attr in tag.attrs {
                    attributes
                        .entry(attr.name.local.to_string())
                        .or_insert_with(|| attr.value.to_string());
                }

                // Elements whose content the tokenizer must not parse as markup
                let raw = if tag.self_closing {
                    None
                } else {
                    raw_kind(&name)
                };

                self.push(MarkupEvent::Open {
                    tag: name,
                    attributes,
                    self_closing: tag.self_closing,
                });

                match raw {
                    Some(kind) => TokenSinkResult::RawData(kind),
                    None => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                self.push(MarkupEvent::Close { tag: name });
                TokenSinkResult::Continue
            }
        }
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => return self.process_tag(tag),
            Token::CharacterTokens(text) => self.push(MarkupEvent::Text(text.to_string())),
            Token::ParseError(error) => trace!("tokenizer: {error}"),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn raw_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" | "noscript" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// Tokenize an HTML string into markup events.
///
/// Character references are decoded. Comments and doctypes are dropped.
pub fn tokenize(html: &str) -> Vec<MarkupEvent> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    // The sink never answers with `TokenSinkResult::Script`, so the whole
    // queue is consumed in one call.
    if let TokenizerResult::Script(()) = tokenizer.feed(&input) {
        warn!("tokenizer paused on a script before the end of input");
    }
    tokenizer.end();

    tokenizer.sink.events.take()
}

/// Parse an HTML string into a tree.
///
/// # Example
///
/// ```rust
/// use html2md::parse_html;
/// use html2md_core::Options;
///
/// let document = parse_html("<h1>Hello <em>World</em></h1>", &Options::default());
/// assert_eq!(document.text_content(document.root()), "Hello World");
/// ```
pub fn parse_html(html: &str, options: &Options) -> Document {
    build(tokenize(html), options)
}
