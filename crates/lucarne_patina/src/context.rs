//! Lint context for rule execution.

use lucarne_carton::CompactString;
use lucarne_relief::{AnnotationTable, SourceDocument};

use crate::config::{LintConfig, RuleConfig};
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::selector::SelectorChecker;

/// What a rule sees while checking one call.
pub struct LintContext<'a> {
    pub document: &'a SourceDocument,
    /// Annotations left by inference over the same document
    pub annotations: &'a AnnotationTable,
    config: &'a LintConfig,
    selector_checker: Option<&'a dyn SelectorChecker>,
    diagnostics: Vec<LintDiagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(
        document: &'a SourceDocument,
        annotations: &'a AnnotationTable,
        config: &'a LintConfig,
        selector_checker: Option<&'a dyn SelectorChecker>,
    ) -> Self {
        Self {
            document,
            annotations,
            config,
            selector_checker,
            diagnostics: Vec::new(),
        }
    }

    /// Configuration of a rule, `None` when disabled.
    #[inline]
    pub fn get_rule(&self, rule: &str) -> Option<RuleConfig> {
        self.config.get_rule(rule)
    }

    #[inline]
    pub fn selector_checker(&self) -> Option<&'a dyn SelectorChecker> {
        self.selector_checker
    }

    /// Report a diagnostic in the current document.
    pub fn report(
        &mut self,
        rule_name: &'static str,
        severity: Severity,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) {
        let diagnostic = LintDiagnostic::new(rule_name, severity, message, start, end)
            .in_file(self.document.name.clone());
        self.diagnostics.push(diagnostic);
    }

    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }
}
