//! Custom function registry.
//!
//! Overridden builtins name a custom function (`!custom:Browser_createElement`).
//! The inference pass looks the name up here and calls the handler with the
//! receiver type, the argument types and the argument nodes.

use lucarne_carton::FxHashMap;
use lucarne_relief::{AnnotationTable, ArgumentNode, SourceDocument};

use crate::definitions::TypeDefinitions;
use crate::types::TypeValue;

/// What a custom function may look at and annotate.
pub struct CallContext<'a> {
    /// Document the call was found in
    pub document: &'a SourceDocument,
    pub definitions: &'a dyn TypeDefinitions,
    pub annotations: &'a mut AnnotationTable,
}

/// A named resolution hook invoked during call-type inference.
pub trait CustomFunction: Send + Sync {
    fn name(&self) -> &'static str;

    /// Return the call's type, or `None` to leave it untouched (effects).
    fn call(
        &self,
        cx: &mut CallContext<'_>,
        receiver: Option<&TypeValue>,
        args: &[TypeValue],
        nodes: &[ArgumentNode],
    ) -> Option<TypeValue>;
}

/// Custom functions keyed by name.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<&'static str, Box<dyn CustomFunction>>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function, replacing any function of the same name
    pub fn register(&mut self, function: Box<dyn CustomFunction>) {
        self.functions.insert(function.name(), function);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&dyn CustomFunction> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registry with the browser resolver hooks.
    pub fn browser() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::hooks::IdentifierLookup));
        registry.register(Box::new(crate::hooks::ElementFactory));
        registry.register(Box::new(crate::hooks::SelectorLookup));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::{GET_ELEMENT_BY_ID, QUERY_SELECTOR};

    #[test]
    fn test_browser_registry() {
        let registry = FunctionRegistry::browser();
        assert_eq!(registry.len(), 3);
        assert!(registry.get(GET_ELEMENT_BY_ID).is_some());
        assert!(registry.get(QUERY_SELECTOR).is_some());
        assert!(registry.get("Browser_missing").is_none());
    }
}
