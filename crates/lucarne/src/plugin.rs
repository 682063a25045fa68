//! Plugin registration.
//!
//! A host hands a [`PluginRegistry`] to each [`Extension`] at start-up. The
//! registry is the dispatch table the host consults afterwards: pre-parse
//! hooks by file, builtin overrides by method name, custom functions and lint
//! rules by their string identifiers, completion providers in registration
//! order.

use lucarne_atelier::{MarkupPreParse, PreParseHook};
use lucarne_croquis::{
    BrowserDefinitions, BuiltinOverride, BuiltinOverrides, CustomFunction, FunctionRegistry,
    TypeDefinitions,
};
use lucarne_maestro::{CompletionProvider, ElementIdCompletion};
use lucarne_patina::{LightningSelectorChecker, Linter, Rule, RuleRegistry, SelectorChecker};
use lucarne_relief::SourceDocument;

/// Something that contributes hooks to a [`PluginRegistry`].
pub trait Extension {
    fn name(&self) -> &'static str;

    fn register(&self, registry: &mut PluginRegistry);
}

/// Dispatch tables filled by extensions.
pub struct PluginRegistry {
    pre_parse: Vec<Box<dyn PreParseHook>>,
    overrides: BuiltinOverrides,
    functions: FunctionRegistry,
    rules: RuleRegistry,
    selector_checker: Option<Box<dyn SelectorChecker>>,
    completions: Vec<Box<dyn CompletionProvider>>,
    definitions: Box<dyn TypeDefinitions>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    /// Empty registry over the browser type definitions.
    pub fn new() -> Self {
        Self {
            pre_parse: Vec::new(),
            overrides: BuiltinOverrides::new(),
            functions: FunctionRegistry::new(),
            rules: RuleRegistry::new(),
            selector_checker: None,
            completions: Vec::new(),
            definitions: Box::new(BrowserDefinitions),
        }
    }

    /// Registry with [`BrowserExtension`] loaded.
    pub fn browser() -> Self {
        let mut registry = Self::new();
        registry.load(&BrowserExtension);
        registry
    }

    /// Let `extension` register its hooks.
    pub fn load(&mut self, extension: &dyn Extension) -> &mut Self {
        tracing::debug!(extension = extension.name(), "loading extension");
        extension.register(self);
        self
    }

    pub fn add_pre_parse(&mut self, hook: Box<dyn PreParseHook>) -> &mut Self {
        self.pre_parse.push(hook);
        self
    }

    pub fn add_override(&mut self, entry: BuiltinOverride) -> &mut Self {
        self.overrides.add(entry);
        self
    }

    pub fn add_function(&mut self, function: Box<dyn CustomFunction>) -> &mut Self {
        self.functions.register(function);
        self
    }

    pub fn add_rule(&mut self, rule: Box<dyn Rule>) -> &mut Self {
        self.rules.register(rule);
        self
    }

    pub fn set_selector_checker(&mut self, checker: Box<dyn SelectorChecker>) -> &mut Self {
        self.selector_checker = Some(checker);
        self
    }

    pub fn add_completion(&mut self, provider: Box<dyn CompletionProvider>) -> &mut Self {
        self.completions.push(provider);
        self
    }

    pub fn set_definitions(&mut self, definitions: Box<dyn TypeDefinitions>) -> &mut Self {
        self.definitions = definitions;
        self
    }

    /// Run the pre-parse hooks in order; the first document produced wins.
    pub fn pre_parse(&self, file_name: &str, text: &str) -> Option<SourceDocument> {
        self.pre_parse.iter().find_map(|hook| {
            let document = hook.pre_parse(file_name, text)?;
            tracing::trace!(hook = hook.name(), file = file_name, "pre-parse hook applied");
            Some(document)
        })
    }

    #[inline]
    pub fn overrides(&self) -> &BuiltinOverrides {
        &self.overrides
    }

    #[inline]
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    #[inline]
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    #[inline]
    pub fn completions(&self) -> &[Box<dyn CompletionProvider>] {
        &self.completions
    }

    #[inline]
    pub fn definitions(&self) -> &dyn TypeDefinitions {
        self.definitions.as_ref()
    }

    /// Split off the lint rules into a linter, leaving the rest for inference
    /// and completion.
    pub(crate) fn take_linter(&mut self) -> Linter {
        let rules = std::mem::take(&mut self.rules);
        Linter::with_registry(rules).with_selector_checker(self.selector_checker.take())
    }
}

/// The browser extension: markup projection, DOM lookup overrides, their
/// custom functions and lint rules, and element id completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserExtension;

impl Extension for BrowserExtension {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn register(&self, registry: &mut PluginRegistry) {
        registry.add_pre_parse(Box::new(MarkupPreParse));

        for entry in BuiltinOverrides::browser().iter() {
            registry.add_override(*entry);
        }
        registry
            .add_function(Box::new(lucarne_croquis::IdentifierLookup))
            .add_function(Box::new(lucarne_croquis::ElementFactory))
            .add_function(Box::new(lucarne_croquis::SelectorLookup));

        registry
            .add_rule(Box::new(lucarne_patina::rules::UnknownElementId))
            .add_rule(Box::new(lucarne_patina::rules::InvalidSelector))
            .set_selector_checker(Box::new(LightningSelectorChecker));

        registry.add_completion(Box::new(ElementIdCompletion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucarne_croquis::{GET_ELEMENT_BY_ID, VALIDATE_CSS_SELECTORS, VALIDATE_ELEMENT_ID};

    #[test]
    fn test_empty_registry() {
        let registry = PluginRegistry::new();
        assert!(registry.overrides().is_empty());
        assert!(registry.functions().is_empty());
        assert!(registry.rules().is_empty());
        assert!(registry.completions().is_empty());
        assert!(registry.pre_parse("index.html", "<p></p>").is_none());
    }

    #[test]
    fn test_browser_extension() {
        let registry = PluginRegistry::browser();
        assert_eq!(registry.overrides().len(), 4);
        assert_eq!(registry.functions().len(), 3);
        assert!(registry.functions().get(GET_ELEMENT_BY_ID).is_some());
        assert!(registry.rules().get(VALIDATE_ELEMENT_ID).is_some());
        assert!(registry.rules().get(VALIDATE_CSS_SELECTORS).is_some());
        assert_eq!(registry.completions()[0].name(), "browser-element-id");
        assert!(registry.definitions().has_type("HTMLCanvasElement"));
    }

    #[test]
    fn test_pre_parse_only_projects_markup() {
        let registry = PluginRegistry::browser();
        let doc = registry.pre_parse("page.xhtml", "<b id=x></b>").unwrap();
        assert!(doc.is_markup());
        assert!(registry.pre_parse("app.js", "f()").is_none());
    }

    #[test]
    fn test_take_linter_moves_rules() {
        let mut registry = PluginRegistry::browser();
        let linter = registry.take_linter();
        assert_eq!(linter.registry().len(), 2);
        assert!(registry.rules().is_empty());
    }
}
