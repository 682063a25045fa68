//! Patina - Lint rules for DOM lookups.
//!
//! Rules run on the calls inference asked for (each builtin override names
//! its lint rule) and only read the argument annotations inference left
//! behind:
//!
//! - `UnknownElementId` (`Browser_validateElementId`): `getElementById` with
//!   an id the document does not declare, default severity warning
//! - `InvalidArgument` (`Browser_validateCSSSelectors`): selector strings
//!   rejected by the [`SelectorChecker`], default severity error
//!
//! Severities come from a [`LintConfig`]; a rule set to `off` reports
//! nothing.

pub mod config;
pub mod context;
pub mod diagnostic;
pub mod linter;
pub mod rule;
pub mod rules;
pub mod selector;

#[cfg(test)]
mod test_utils;

pub use config::{
    ConfigError, LintConfig, RuleConfig, RuleLevel, RuleSetting, INVALID_ARGUMENT,
    UNKNOWN_ELEMENT_ID,
};
pub use context::LintContext;
pub use diagnostic::{LintDiagnostic, LintSummary, Severity};
pub use linter::Linter;
pub use rule::{Rule, RuleMeta, RuleRegistry};
pub use selector::{LightningSelectorChecker, SelectorChecker, SelectorDiagnostic};
