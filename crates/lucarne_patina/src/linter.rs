//! Main linter implementation.

use lucarne_croquis::Inference;
use lucarne_relief::SourceDocument;

use crate::config::LintConfig;
use crate::context::LintContext;
use crate::diagnostic::LintDiagnostic;
use crate::rule::RuleRegistry;
use crate::selector::{LightningSelectorChecker, SelectorChecker};

/// Runs the rules requested during inference.
pub struct Linter {
    registry: RuleRegistry,
    selector_checker: Option<Box<dyn SelectorChecker>>,
}

impl Linter {
    /// Linter with the browser rules and the lightningcss selector checker.
    pub fn browser() -> Self {
        Self::with_registry(RuleRegistry::browser())
            .with_selector_checker(Some(Box::new(LightningSelectorChecker)))
    }

    /// Linter with a custom registry and no selector checker.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            selector_checker: None,
        }
    }

    /// Replace the selector checker; `None` turns selector validation off.
    pub fn with_selector_checker(mut self, checker: Option<Box<dyn SelectorChecker>>) -> Self {
        self.selector_checker = checker;
        self
    }

    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint one inferred document. Diagnostics are sorted by position.
    pub fn lint(
        &self,
        document: &SourceDocument,
        inference: &Inference,
        config: &LintConfig,
    ) -> Vec<LintDiagnostic> {
        let mut ctx = LintContext::new(
            document,
            &inference.annotations,
            config,
            self.selector_checker.as_deref(),
        );

        for (call, name) in inference.lint_targets() {
            match self.registry.get(name) {
                Some(rule) => rule.check_call(&mut ctx, call),
                None => tracing::debug!(rule = name, "lint rule not registered"),
            }
        }

        let mut diagnostics = ctx.into_diagnostics();
        diagnostics.sort_by_key(|d| (d.start, d.end));
        tracing::debug!(file = %document.name, count = diagnostics.len(), "lint done");
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::browser()
    }
}
