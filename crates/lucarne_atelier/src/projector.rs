//! Markup-to-script projection.
//!
//! The projection has exactly the length of the raw text. Script bodies and
//! event-handler attribute values are copied verbatim at their original
//! offsets; every other byte becomes a space, except `\r`, `\n` and `\t`
//! which are kept so line math over the projection matches the raw text.

use lucarne_armature::{Attribute, CloseTag, MarkupHandler, MarkupReader, OpenTag};
use lucarne_carton::CompactString;
use lucarne_relief::{
    IdentifierEntry, IdentifierIndex, ScriptKind, ScriptRegion, SourceDocument, Span,
};

/// Where the projector is relative to preserved script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionState {
    /// Raw text up to the cursor has been flushed; nothing is preserved
    Outside,
    /// Inside the body of a `<script>` element, which starts at the cursor
    InScript,
    /// An event-handler value is pending; the text before it is flushed
    InEventAttribute { value: Span },
}

/// Cursor state machine driven by markup events.
pub struct Projector<'s> {
    raw: &'s str,
    name: CompactString,
    /// Start of the range not yet flushed
    from: u32,
    state: ProjectionState,
    output: String,
    index: IdentifierIndex,
    regions: Vec<ScriptRegion>,
}

impl<'s> Projector<'s> {
    pub fn new(raw: &'s str, name: impl Into<CompactString>) -> Self {
        Self {
            raw,
            name: name.into(),
            from: 0,
            state: ProjectionState::Outside,
            output: String::with_capacity(raw.len()),
            index: IdentifierIndex::new(),
            regions: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> ProjectionState {
        self.state
    }

    /// Run the reader over the raw text and build the document.
    pub fn project(mut self) -> SourceDocument {
        let raw = self.raw;
        let errors = MarkupReader::new(raw).read(&mut self);
        if !errors.is_empty() {
            tracing::debug!(file = %self.name, errors = errors.len(), "projected malformed markup");
        }
        self.finish()
    }

    /// Flush what is left and hand out the document.
    pub fn finish(mut self) -> SourceDocument {
        self.settle();
        let end = self.raw.len() as u32;
        match self.state {
            // An unterminated script body runs to the end of the input
            ProjectionState::InScript => {
                let body = Span::new(self.from, end);
                self.flush_verbatim(body, ScriptKind::Block);
            }
            _ => self.flush_blank(end),
        }
        debug_assert_eq!(self.output.len(), self.raw.len());

        tracing::trace!(
            file = %self.name,
            ids = self.index.len(),
            regions = self.regions.len(),
            "markup projected"
        );

        SourceDocument {
            name: self.name,
            raw_text: self.raw.to_string(),
            projected_text: self.output,
            identifier_index: Some(self.index),
            script_regions: self.regions,
        }
    }

    /// Close a pending event-handler value.
    fn settle(&mut self) {
        if let ProjectionState::InEventAttribute { value } = self.state {
            self.flush_verbatim(value, ScriptKind::EventHandler);
            self.state = ProjectionState::Outside;
        }
    }

    /// Blank `[from, to)` and move the cursor to `to`.
    fn flush_blank(&mut self, to: u32) {
        if to <= self.from {
            return;
        }
        let bytes = &self.raw.as_bytes()[self.from as usize..to as usize];
        self.output.extend(bytes.iter().map(|&b| match b {
            b'\r' | b'\n' | b'\t' => b as char,
            _ => ' ',
        }));
        self.from = to;
    }

    /// Copy `span` verbatim, blanking anything between the cursor and it.
    fn flush_verbatim(&mut self, span: Span, kind: ScriptKind) {
        self.flush_blank(span.start);
        if span.end <= self.from {
            return;
        }
        self.output.push_str(span.source_text(self.raw));
        self.from = span.end;
        self.regions.push(ScriptRegion { kind, span });
    }

    fn declare_id(&mut self, attr: &Attribute<'_>) {
        let entry = IdentifierEntry {
            value: CompactString::from(&*attr.value),
            owner_tag: CompactString::from(attr.owner.to_ascii_lowercase()),
            source_file: self.name.clone(),
            span: attr.value_span,
        };
        if let Some(previous) = self.index.declare(entry) {
            tracing::trace!(id = %previous.value, "duplicate id, last declaration wins");
        }
    }
}

#[inline]
fn is_script_tag(name: &str) -> bool {
    name.eq_ignore_ascii_case("script")
}

/// Intrinsic event-handler attribute (`onclick`, `onLoad`, ...).
#[inline]
pub fn is_event_handler_attribute(name: &str) -> bool {
    name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on"))
}

impl MarkupHandler for Projector<'_> {
    fn open_tag(&mut self, tag: &OpenTag<'_>) {
        self.settle();
        if self.state == ProjectionState::Outside && is_script_tag(tag.name) && !tag.self_closing
        {
            self.flush_blank(tag.span.end);
            self.state = ProjectionState::InScript;
        }
    }

    fn attribute(&mut self, attr: &Attribute<'_>) {
        self.settle();
        if attr.name.eq_ignore_ascii_case("id") {
            self.declare_id(attr);
        } else if is_event_handler_attribute(attr.name)
            && !attr.value_span.is_empty()
            && self.state == ProjectionState::Outside
        {
            self.flush_blank(attr.value_span.start);
            self.state = ProjectionState::InEventAttribute {
                value: attr.value_span,
            };
        }
    }

    fn close_tag(&mut self, tag: &CloseTag<'_>) {
        self.settle();
        if self.state == ProjectionState::InScript && is_script_tag(tag.name) {
            let body = Span::new(self.from, tag.span.start);
            self.flush_verbatim(body, ScriptKind::Block);
            self.state = ProjectionState::Outside;
            self.flush_blank(tag.span.end);
        }
    }
}

/// Project `raw` markup into a document named `name`.
pub fn project(raw: &str, name: &str) -> SourceDocument {
    Projector::new(raw, name).project()
}
