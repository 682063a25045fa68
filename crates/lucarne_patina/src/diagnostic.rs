//! Diagnostic types for lucarne_patina.

use lucarne_carton::CompactString;
use serde::{Deserialize, Serialize};

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A lint diagnostic located in the raw document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintDiagnostic {
    /// Configuration key of the rule that reported it
    pub rule_name: &'static str,
    pub severity: Severity,
    pub message: CompactString,
    /// File the diagnostic belongs to
    pub file: CompactString,
    /// Start byte offset in the raw document
    pub start: u32,
    /// End byte offset in the raw document
    pub end: u32,
}

impl LintDiagnostic {
    #[inline]
    pub fn new(
        rule_name: &'static str,
        severity: Severity,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            rule_name,
            severity,
            message: message.into(),
            file: CompactString::default(),
            start,
            end,
        }
    }

    #[inline]
    pub fn in_file(mut self, file: impl Into<CompactString>) -> Self {
        self.file = file.into();
        self
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
}

impl LintSummary {
    pub fn from_diagnostics(diagnostics: &[LintDiagnostic]) -> Self {
        let mut summary = Self::default();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => summary.error_count += 1,
                Severity::Warning => summary.warning_count += 1,
            }
        }
        summary
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let diagnostic = LintDiagnostic::new("UnknownElementId", Severity::Warning, "Unknown element id 'x'", 3, 6)
            .in_file("index.html");
        let json = serde_json::to_string(&diagnostic).unwrap();
        assert_eq!(
            json,
            r#"{"ruleName":"UnknownElementId","severity":"warning","message":"Unknown element id 'x'","file":"index.html","start":3,"end":6}"#
        );
    }

    #[test]
    fn test_summary() {
        let diagnostics = [
            LintDiagnostic::new("a", Severity::Error, "e", 0, 1),
            LintDiagnostic::new("b", Severity::Warning, "w", 0, 1),
            LintDiagnostic::new("b", Severity::Warning, "w", 2, 3),
        ];
        let summary = LintSummary::from_diagnostics(&diagnostics);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 2);
        assert!(summary.has_errors());
    }
}
