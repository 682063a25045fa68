//! InvalidArgument (CSS selectors)
//!
//! Checks the selector passed to `querySelector` / `querySelectorAll` with
//! the configured selector checker.
//!
//! ## Examples
//!
//! ### Invalid
//! ```html
//! <script>document.querySelector("###")</script>
//! ```
//!
//! ### Valid
//! ```html
//! <script>document.querySelector("#app > .item")</script>
//! ```

use lucarne_croquis::VALIDATE_CSS_SELECTORS;
use lucarne_relief::CallSite;

use crate::config::INVALID_ARGUMENT;
use crate::context::LintContext;
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: VALIDATE_CSS_SELECTORS,
    config_key: INVALID_ARGUMENT,
    description: "Disallow selector strings that are not valid CSS",
};

pub struct InvalidSelector;

impl Rule for InvalidSelector {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_call(&self, ctx: &mut LintContext<'_>, call: &CallSite) {
        let Some(arg) = call.first_argument() else {
            return;
        };
        let Some(selector) = arg.string_value() else {
            return;
        };
        if !ctx.annotations.is_selector_lookup(arg.span) {
            return;
        }
        let Some(checker) = ctx.selector_checker() else {
            return;
        };
        let Some(rule) = ctx.get_rule(META.config_key) else {
            return;
        };

        for problem in checker.check(&format!("{selector}{{}}")) {
            let at = arg.span.start + problem.column.saturating_sub(1);
            ctx.report(
                META.config_key,
                rule.severity,
                format!("Invalid CSS selectors '{selector}': {}", problem.message),
                at,
                at,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::config::{LintConfig, RuleLevel};
    use crate::test_utils::{lint, lint_with};

    #[test]
    fn test_valid_selector() {
        let diagnostics = lint("<script>document.querySelectorAll('#app > li.item')</script>");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_selector() {
        let raw = "<script>document.querySelector('###')</script>";
        let diagnostics = lint(raw);
        assert!(!diagnostics.is_empty());

        let d = &diagnostics[0];
        assert_eq!(d.rule_name, "InvalidArgument");
        assert_eq!(d.severity, Severity::Error);
        assert!(d.message.starts_with("Invalid CSS selectors '###': "));
        assert_eq!(d.start, d.end);
        let literal = raw.find("'###'").unwrap() as u32;
        assert!(d.start >= literal && d.start < literal + 5);
    }

    #[test]
    fn test_disabled_rule() {
        let mut config = LintConfig::new();
        config.set(INVALID_ARGUMENT, RuleLevel::Off);
        let diagnostics = lint_with("<script>document.querySelector('###')</script>", &config, true);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_without_checker() {
        let diagnostics = lint_with(
            "<script>document.querySelector('###')</script>",
            &LintConfig::new(),
            false,
        );
        assert!(diagnostics.is_empty());
    }
}
