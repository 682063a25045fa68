//! Lint rule configuration.
//!
//! Loaded from the `rules` object of a lint configuration:
//!
//! ```json
//! { "rules": { "UnknownElementId": "error", "InvalidArgument": { "severity": "none" } } }
//! ```
//!
//! A rule set to `off` or `none` is disabled.

use lucarne_carton::{CompactString, FxHashMap};
use serde::Deserialize;
use thiserror::Error;

use crate::diagnostic::Severity;

/// Configuration key of the unknown element id rule.
pub const UNKNOWN_ELEMENT_ID: &str = "UnknownElementId";
/// Configuration key of the invalid argument (selector syntax) rule.
pub const INVALID_ARGUMENT: &str = "InvalidArgument";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid lint configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Level a rule is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warning,
    Off,
    None,
}

impl RuleLevel {
    #[inline]
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Error => Some(Severity::Error),
            Self::Warning => Some(Severity::Warning),
            Self::Off | Self::None => None,
        }
    }
}

/// A rule entry, either a bare level or `{ "severity": level }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Level(RuleLevel),
    Detailed { severity: RuleLevel },
}

impl RuleSetting {
    #[inline]
    pub fn level(self) -> RuleLevel {
        match self {
            Self::Level(level) | Self::Detailed { severity: level } => level,
        }
    }
}

/// Resolved configuration of an enabled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    pub severity: Severity,
}

/// Per-rule settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    rules: FxHashMap<CompactString, RuleSetting>,
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override one rule.
    pub fn set(&mut self, rule: impl Into<CompactString>, level: RuleLevel) -> &mut Self {
        self.rules.insert(rule.into(), RuleSetting::Level(level));
        self
    }

    /// Configuration of `rule`, or `None` when it is disabled.
    pub fn get_rule(&self, rule: &str) -> Option<RuleConfig> {
        let level = match self.rules.get(rule) {
            Some(setting) => setting.level(),
            None => default_level(rule)?,
        };
        level.severity().map(|severity| RuleConfig { severity })
    }
}

/// Built-in default of a rule; unknown rules are disabled.
fn default_level(rule: &str) -> Option<RuleLevel> {
    match rule {
        UNKNOWN_ELEMENT_ID => Some(RuleLevel::Warning),
        INVALID_ARGUMENT => Some(RuleLevel::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LintConfig::new();
        assert_eq!(
            config.get_rule(UNKNOWN_ELEMENT_ID),
            Some(RuleConfig {
                severity: Severity::Warning
            })
        );
        assert_eq!(
            config.get_rule(INVALID_ARGUMENT).map(|r| r.severity),
            Some(Severity::Error)
        );
        assert_eq!(config.get_rule("SomethingElse"), None);
    }

    #[test]
    fn test_from_json() {
        let config = LintConfig::from_json(
            r#"{ "rules": { "UnknownElementId": "error", "InvalidArgument": { "severity": "none" } } }"#,
        )
        .unwrap();
        assert_eq!(
            config.get_rule(UNKNOWN_ELEMENT_ID).map(|r| r.severity),
            Some(Severity::Error)
        );
        assert_eq!(config.get_rule(INVALID_ARGUMENT), None);
    }

    #[test]
    fn test_empty_object() {
        let config = LintConfig::from_json("{}").unwrap();
        assert!(config.get_rule(UNKNOWN_ELEMENT_ID).is_some());
    }

    #[test]
    fn test_invalid_json() {
        let err = LintConfig::from_json(r#"{ "rules": { "UnknownElementId": "loud" } }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid lint configuration"));
    }

    #[test]
    fn test_set_off() {
        let mut config = LintConfig::new();
        config.set(UNKNOWN_ELEMENT_ID, RuleLevel::Off);
        assert_eq!(config.get_rule(UNKNOWN_ELEMENT_ID), None);
    }
}
