//! Identifier index built from `id` attributes.

use indexmap::IndexMap;
use lucarne_carton::CompactString;
use serde::Serialize;

use crate::span::Span;

/// One `id="..."` declaration found in markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierEntry {
    /// The id value (entity-decoded)
    pub value: CompactString,
    /// Lower-cased name of the element carrying the attribute
    pub owner_tag: CompactString,
    /// Name of the document that declared it
    pub source_file: CompactString,
    /// Span of the attribute value in the raw text, quotes excluded
    pub span: Span,
}

/// Identifier index of one document.
///
/// Iteration follows first-declaration order. Re-declaring an id replaces the
/// entry (last declaration wins) without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentifierIndex {
    entries: IndexMap<CompactString, IdentifierEntry>,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration, returning the entry it replaced.
    pub fn declare(&mut self, entry: IdentifierEntry) -> Option<IdentifierEntry> {
        self.entries.insert(entry.value.clone(), entry)
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&IdentifierEntry> {
        self.entries.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentifierEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}
