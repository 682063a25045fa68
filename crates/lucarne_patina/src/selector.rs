//! CSS selector syntax checking.
//!
//! A checker receives a CSS rule (`<selector>{}`) and returns what is wrong
//! with it. Columns are 1-based, counted from the start of the rule text.

use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lucarne_carton::CompactString;

/// A problem found in a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorDiagnostic {
    /// 1-based column in the checked rule text
    pub column: u32,
    pub message: CompactString,
}

/// External selector syntax checker.
pub trait SelectorChecker: Send + Sync {
    fn check(&self, rule: &str) -> Vec<SelectorDiagnostic>;
}

/// Checker backed by lightningcss.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningSelectorChecker;

impl SelectorChecker for LightningSelectorChecker {
    fn check(&self, rule: &str) -> Vec<SelectorDiagnostic> {
        match StyleSheet::parse(rule, ParserOptions::default()) {
            Ok(_) => Vec::new(),
            Err(err) => {
                let column = err.loc.as_ref().map_or(1, |loc| loc.column.max(1));
                vec![SelectorDiagnostic {
                    column,
                    message: CompactString::from(err.kind.to_string()),
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selectors() {
        let checker = LightningSelectorChecker;
        for selector in ["#app", ".a > .b", "ul li:first-child", "input[type=text]"] {
            let rule = format!("{selector}{{}}");
            assert!(checker.check(&rule).is_empty(), "{selector}");
        }
    }

    #[test]
    fn test_invalid_selector() {
        let diagnostics = LightningSelectorChecker.check("###{}");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].column >= 1);
        assert!(!diagnostics[0].message.is_empty());
    }
}
