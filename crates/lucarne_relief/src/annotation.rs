//! Argument annotations.
//!
//! The resolver hooks write them during inference; lint rules and the
//! completion provider read them afterwards. They live as long as the
//! analysis of one document.

use lucarne_carton::FxHashMap;
use serde::Serialize;

use crate::index::IdentifierEntry;
use crate::span::Span;

/// Metadata attached to a string-literal call argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgumentAnnotation {
    /// The argument should be validated as a DOM id
    pub is_identifier_lookup: bool,
    /// The argument should be validated as a CSS selector
    pub is_selector_lookup: bool,
    /// Set only when the id resolved against the document's index
    pub resolved_identifier: Option<IdentifierEntry>,
}

/// Annotations of one analysis run, keyed by argument span.
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    annotations: FxHashMap<Span, ArgumentAnnotation>,
}

impl AnnotationTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, span: Span) -> Option<&ArgumentAnnotation> {
        self.annotations.get(&span)
    }

    #[inline]
    pub fn entry(&mut self, span: Span) -> &mut ArgumentAnnotation {
        self.annotations.entry(span).or_default()
    }

    pub fn mark_identifier_lookup(&mut self, span: Span) {
        self.entry(span).is_identifier_lookup = true;
    }

    pub fn mark_selector_lookup(&mut self, span: Span) {
        self.entry(span).is_selector_lookup = true;
    }

    pub fn resolve(&mut self, span: Span, entry: IdentifierEntry) {
        self.entry(span).resolved_identifier = Some(entry);
    }

    #[inline]
    pub fn is_identifier_lookup(&self, span: Span) -> bool {
        self.get(span).is_some_and(|a| a.is_identifier_lookup)
    }

    #[inline]
    pub fn is_selector_lookup(&self, span: Span) -> bool {
        self.get(span).is_some_and(|a| a.is_selector_lookup)
    }

    #[inline]
    pub fn resolved(&self, span: Span) -> Option<&IdentifierEntry> {
        self.get(span).and_then(|a| a.resolved_identifier.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_accumulate_on_one_span() {
        let mut table = AnnotationTable::new();
        let span = Span::new(40, 45);
        table.mark_identifier_lookup(span);
        assert!(table.is_identifier_lookup(span));
        assert!(!table.is_selector_lookup(span));
        assert!(table.resolved(span).is_none());

        table.resolve(
            span,
            IdentifierEntry {
                value: "app".into(),
                owner_tag: "div".into(),
                source_file: "index.html".into(),
                span: Span::new(9, 12),
            },
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolved(span).map(|e| e.owner_tag.as_str()), Some("div"));
    }

    #[test]
    fn test_unknown_span() {
        let table = AnnotationTable::new();
        assert!(table.is_empty());
        assert!(!table.is_identifier_lookup(Span::new(0, 2)));
    }
}
