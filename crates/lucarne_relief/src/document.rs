//! Analyzed source documents.

use lucarne_carton::CompactString;
use serde::Serialize;

use crate::index::IdentifierIndex;
use crate::span::Span;

/// Where a preserved script region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptKind {
    /// Body of a `<script>` element
    Block,
    /// Value of an intrinsic event-handler attribute (`onclick`, ...)
    EventHandler,
}

/// A region of the projection holding script text verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptRegion {
    pub kind: ScriptKind,
    pub span: Span,
}

/// One analyzed file.
///
/// Created once per file at pre-parse time and never patched afterwards; a
/// re-analysis builds a new document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDocument {
    pub name: CompactString,
    pub raw_text: String,
    /// Same length as `raw_text`; only script regions are kept verbatim
    pub projected_text: String,
    /// Present only for documents that went through markup projection
    pub identifier_index: Option<IdentifierIndex>,
    pub script_regions: Vec<ScriptRegion>,
}

impl SourceDocument {
    /// A document whose text is script already (no projection, no index).
    pub fn pass_through(name: impl Into<CompactString>, text: impl Into<String>) -> Self {
        let text = text.into();
        let span = Span::new(0, text.len() as u32);
        Self {
            name: name.into(),
            projected_text: text.clone(),
            raw_text: text,
            identifier_index: None,
            script_regions: vec![ScriptRegion {
                kind: ScriptKind::Block,
                span,
            }],
        }
    }

    #[inline]
    pub fn is_markup(&self) -> bool {
        self.identifier_index.is_some()
    }

    /// Script text of a region, taken from the projection.
    #[inline]
    pub fn region_text(&self, region: &ScriptRegion) -> &str {
        region.span.source_text(&self.projected_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_covers_whole_text() {
        let doc = SourceDocument::pass_through("app.js", "document.getElementById('a');");
        assert!(!doc.is_markup());
        assert_eq!(doc.projected_text, doc.raw_text);
        assert_eq!(doc.script_regions.len(), 1);
        assert_eq!(doc.region_text(&doc.script_regions[0]), doc.raw_text);
    }
}
