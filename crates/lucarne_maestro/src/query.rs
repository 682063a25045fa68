//! Request and response shapes of the IDE services.

use lucarne_carton::{CompactString, LineCh, LineIndex};
use serde::{Deserialize, Serialize};

/// A position as sent by a client: a byte offset or `{line, ch}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryPosition {
    Offset(u32),
    LineCh(LineCh),
}

impl QueryPosition {
    /// Byte offset in `text`, clamped to its length.
    pub fn resolve(self, text: &str) -> Option<u32> {
        let offset = match self {
            Self::Offset(offset) => offset,
            Self::LineCh(pos) => LineIndex::new(text).offset_at(pos)?,
        };
        Some(offset.min(text.len() as u32))
    }
}

impl From<u32> for QueryPosition {
    fn from(offset: u32) -> Self {
        Self::Offset(offset)
    }
}

/// A position sent back to the client.
pub type OutputPosition = QueryPosition;

fn default_true() -> bool {
    true
}

/// Completion request options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionQuery {
    /// Cursor position (end of the word being completed)
    pub end: QueryPosition,
    #[serde(default)]
    pub case_insensitive: bool,
    /// Only offer names starting with the typed word
    #[serde(default = "default_true")]
    pub filter: bool,
    #[serde(default)]
    pub types: bool,
    #[serde(default)]
    pub origins: bool,
    #[serde(default)]
    pub depths: bool,
    #[serde(default)]
    pub docs: bool,
    #[serde(default)]
    pub urls: bool,
    /// Report positions as `{line, ch}` instead of offsets
    #[serde(default)]
    pub line_char_positions: bool,
}

impl CompletionQuery {
    pub fn at(end: impl Into<QueryPosition>) -> Self {
        Self {
            end: end.into(),
            case_insensitive: false,
            filter: true,
            types: false,
            origins: false,
            depths: false,
            docs: false,
            urls: false,
            line_char_positions: false,
        }
    }

    /// Whether completions are objects rather than plain names.
    #[inline]
    pub fn wraps_as_objects(&self) -> bool {
        self.types || self.depths || self.docs || self.urls || self.origins
    }

    /// Convert an offset to the position shape the client asked for.
    pub fn output_position(&self, text: &str, offset: u32) -> OutputPosition {
        if self.line_char_positions {
            QueryPosition::LineCh(LineIndex::new(text).position_at(offset))
        } else {
            QueryPosition::Offset(offset)
        }
    }
}

/// A completion entry carrying metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    /// Quoted text to insert
    pub name: CompactString,
    /// The bare id
    pub display_name: CompactString,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<CompactString>,
}

/// A completion, plain or with metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Completion {
    Name(CompactString),
    Entry(CompletionEntry),
}

impl Completion {
    /// Text inserted by the client.
    pub fn insert_text(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Entry(entry) => &entry.name,
        }
    }
}

/// Completions and the range they replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub start: OutputPosition,
    pub end: OutputPosition,
    pub is_property: bool,
    pub is_object_key: bool,
    pub completions: Vec<Completion>,
}
