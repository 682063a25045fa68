//! Helpers shared by the rule tests.

use lucarne_croquis::{BrowserDefinitions, BuiltinOverrides, FunctionRegistry, Inference, Resolver};
use lucarne_relief::SourceDocument;

use crate::config::LintConfig;
use crate::diagnostic::LintDiagnostic;
use crate::linter::Linter;
use crate::selector::LightningSelectorChecker;

pub fn infer(doc: &SourceDocument) -> Inference {
    let overrides = BuiltinOverrides::browser();
    let functions = FunctionRegistry::browser();
    Resolver::new(&overrides, &functions, &BrowserDefinitions).infer(doc)
}

/// Lint `raw` as `index.html` with the default configuration.
pub fn lint(raw: &str) -> Vec<LintDiagnostic> {
    lint_with(raw, &LintConfig::new(), true)
}

pub fn lint_with(raw: &str, config: &LintConfig, with_checker: bool) -> Vec<LintDiagnostic> {
    let doc = lucarne_atelier::project(raw, "index.html");
    let inference = infer(&doc);
    let linter = Linter::browser().with_selector_checker(if with_checker {
        Some(Box::new(LightningSelectorChecker))
    } else {
        None
    });
    linter.lint(&doc, &inference, config)
}
