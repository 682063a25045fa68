//! Rule trait and registry for lint rules.

use lucarne_carton::FxHashMap;
use lucarne_relief::CallSite;

use crate::context::LintContext;

/// Rule metadata
pub struct RuleMeta {
    /// Name the builtin overrides refer to (`Browser_validateElementId`)
    pub name: &'static str,
    /// Key of the rule in the lint configuration (`UnknownElementId`)
    pub config_key: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// A lint rule run on calls to a builtin that requested it.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &'static RuleMeta;

    fn check_call(&self, ctx: &mut LintContext<'_>, call: &CallSite);
}

/// Lint rules keyed by name.
#[derive(Default)]
pub struct RuleRegistry {
    rules: FxHashMap<&'static str, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under its name
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.insert(rule.meta().name, rule);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registry with the browser rules.
    pub fn browser() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::rules::UnknownElementId));
        registry.register(Box::new(crate::rules::InvalidSelector));
        registry
    }
}
