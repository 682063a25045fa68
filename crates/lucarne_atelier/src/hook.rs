//! Pre-parse hook.

use lucarne_relief::SourceDocument;

use crate::gate::is_markup_file;
use crate::projector::project;

/// Runs before the host parses a file.
///
/// Returning `None` leaves the file untouched; the host then analyzes its
/// text as script.
pub trait PreParseHook {
    fn name(&self) -> &'static str;

    fn pre_parse(&self, file_name: &str, text: &str) -> Option<SourceDocument>;
}

/// Projects markup files, passes everything else through.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPreParse;

impl PreParseHook for MarkupPreParse {
    fn name(&self) -> &'static str {
        "browser-markup"
    }

    fn pre_parse(&self, file_name: &str, text: &str) -> Option<SourceDocument> {
        if !is_markup_file(file_name) {
            tracing::trace!(file = file_name, "not markup, skipping projection");
            return None;
        }
        Some(project(text, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_markup_only() {
        let hook = MarkupPreParse;
        let doc = hook
            .pre_parse("index.html", "<p id=a></p>")
            .expect("html is projected");
        assert!(doc.is_markup());
        assert_eq!(doc.projected_text, "            ");

        assert!(hook.pre_parse("app.js", "<p id=a></p>").is_none());
    }
}
