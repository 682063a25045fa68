//! Markup event reader.
//!
//! Folds tokenizer callbacks into document-ordered events:
//!
//! - attributes of a tag arrive first, each tagged with the owning tag name
//! - then the [`OpenTag`] (its span ends after `>`)
//! - a [`CloseTag`] for every end tag, and an empty one right after the
//!   [`OpenTag`] of a self-closing tag
//!
//! Script bodies produce no event of their own; a handler finds them between
//! the `script` open and close tags.

use std::borrow::Cow;

use lucarne_relief::{ErrorCode, MarkupError, Span};

use crate::tokenizer::{Callbacks, QuoteType, Tokenizer};

/// An element start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'s> {
    /// Tag name as written
    pub name: &'s str,
    /// From `<` to just past `>`
    pub span: Span,
    pub self_closing: bool,
}

/// One attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'s> {
    /// Name of the tag carrying the attribute, as written
    pub owner: &'s str,
    pub name: &'s str,
    /// Entity-decoded value (empty for bare attributes)
    pub value: Cow<'s, str>,
    /// Raw value span, quotes excluded
    pub value_span: Span,
}

/// An element end tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseTag<'s> {
    pub name: &'s str,
    /// From `<` to just past `>`; empty for self-closing tags
    pub span: Span,
}

/// Receiver of markup events. Every method defaults to doing nothing.
pub trait MarkupHandler {
    #[allow(unused_variables)]
    fn open_tag(&mut self, tag: &OpenTag<'_>) {}

    #[allow(unused_variables)]
    fn attribute(&mut self, attr: &Attribute<'_>) {}

    #[allow(unused_variables)]
    fn close_tag(&mut self, tag: &CloseTag<'_>) {}
}

/// Streams the events of one markup text into a [`MarkupHandler`].
pub struct MarkupReader<'s> {
    source: &'s str,
}

impl<'s> MarkupReader<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    /// Read the whole text, returning the errors the tokenizer recovered from.
    pub fn read<H: MarkupHandler>(&self, handler: &mut H) -> Vec<MarkupError> {
        let callbacks = ReaderCallbacks {
            source: self.source,
            handler,
            errors: Vec::new(),
            tag_start: 0,
            tag_name: "",
            attr_name: None,
            close_tag: None,
        };
        let mut tokenizer = Tokenizer::new(self.source, callbacks);
        tokenizer.tokenize();
        tokenizer.into_callbacks().errors
    }
}

/// Bridge between tokenizer callbacks and the handler.
struct ReaderCallbacks<'s, 'h, H: MarkupHandler> {
    source: &'s str,
    handler: &'h mut H,
    errors: Vec<MarkupError>,
    /// `<` of the start tag being read
    tag_start: usize,
    tag_name: &'s str,
    attr_name: Option<&'s str>,
    /// `(tag_start, name)` of the end tag being read
    close_tag: Option<(usize, &'s str)>,
}

impl<'s, H: MarkupHandler> ReaderCallbacks<'s, '_, H> {
    #[inline]
    fn get_source(&self, start: usize, end: usize) -> &'s str {
        &self.source[start..end]
    }

    fn emit_open_tag(&mut self, end: usize, self_closing: bool) {
        let span = Span::from(self.tag_start..end + 1);
        self.handler.open_tag(&OpenTag {
            name: self.tag_name,
            span,
            self_closing,
        });
        if self_closing {
            self.handler.close_tag(&CloseTag {
                name: self.tag_name,
                span: Span::empty(span.end),
            });
        }
    }
}

impl<'s, H: MarkupHandler> Callbacks for ReaderCallbacks<'s, '_, H> {
    fn on_open_tag_name(&mut self, start: usize, end: usize) {
        // The tokenizer reports the name right after the `<`
        self.tag_start = start.saturating_sub(1);
        self.tag_name = self.get_source(start, end);
    }

    fn on_open_tag_end(&mut self, end: usize) {
        self.emit_open_tag(end, false);
    }

    fn on_self_closing_tag(&mut self, end: usize) {
        self.emit_open_tag(end, true);
    }

    fn on_close_tag(&mut self, tag_start: usize, start: usize, end: usize) {
        self.close_tag = Some((tag_start, self.get_source(start, end)));
    }

    fn on_close_tag_end(&mut self, end: usize) {
        if let Some((tag_start, name)) = self.close_tag.take() {
            self.handler.close_tag(&CloseTag {
                name,
                span: Span::from(tag_start..end + 1),
            });
        }
    }

    fn on_attrib_name(&mut self, start: usize, end: usize) {
        self.attr_name = Some(self.get_source(start, end));
    }

    fn on_attrib_value(&mut self, _quote: QuoteType, start: usize, end: usize) {
        let Some(name) = self.attr_name.take() else {
            return;
        };
        let raw = self.get_source(start, end);
        self.handler.attribute(&Attribute {
            owner: self.tag_name,
            name,
            value: htmlize::unescape_attribute(raw),
            value_span: Span::from(start..end),
        });
    }

    fn on_end(&mut self) {
        // An end tag cut off by EOF still closes its element
        if let Some((tag_start, name)) = self.close_tag.take() {
            self.handler.close_tag(&CloseTag {
                name,
                span: Span::from(tag_start..self.source.len()),
            });
        }
    }

    fn on_error(&mut self, code: ErrorCode, index: usize) {
        let error = MarkupError::new(code, index as u32);
        tracing::debug!(%error, "recovered from malformed markup");
        self.errors.push(error);
    }
}
