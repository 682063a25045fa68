//! Builtin overrides.
//!
//! The browser definitions are patched when they are loaded: some builtin
//! methods get a custom return type, some a custom side effect, and some a
//! lint rule run on every call.

/// Custom function backing `Document#getElementById`.
pub const GET_ELEMENT_BY_ID: &str = "Browser_getElementById";
/// Custom function backing `Document#createElement`.
pub const CREATE_ELEMENT: &str = "Browser_createElement";
/// Custom effect of `Element#querySelector` and `Element#querySelectorAll`.
pub const QUERY_SELECTOR: &str = "Browser_querySelector";

/// Lint run on `getElementById` calls.
pub const VALIDATE_ELEMENT_ID: &str = "Browser_validateElementId";
/// Lint run on `querySelector` / `querySelectorAll` calls.
pub const VALIDATE_CSS_SELECTORS: &str = "Browser_validateCSSSelectors";

/// One patched builtin method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinOverride {
    /// Interface owning the method (`Document`, `Element`)
    pub owner: &'static str,
    pub method: &'static str,
    /// Custom function computing the return type
    pub custom: Option<&'static str>,
    /// Custom functions run for their side effects
    pub effects: &'static [&'static str],
    /// Lint rule run on each call
    pub lint: Option<&'static str>,
}

/// The set of patched builtins.
#[derive(Debug, Clone, Default)]
pub struct BuiltinOverrides {
    entries: Vec<BuiltinOverride>,
}

impl BuiltinOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: BuiltinOverride) {
        self.entries.push(entry);
    }

    /// Overrides applied to the `browser` definitions.
    pub fn browser() -> Self {
        let mut overrides = Self::new();
        overrides.add(BuiltinOverride {
            owner: "Document",
            method: "getElementById",
            custom: Some(GET_ELEMENT_BY_ID),
            effects: &[],
            lint: Some(VALIDATE_ELEMENT_ID),
        });
        overrides.add(BuiltinOverride {
            owner: "Document",
            method: "createElement",
            custom: Some(CREATE_ELEMENT),
            effects: &[],
            lint: None,
        });
        for method in ["querySelector", "querySelectorAll"] {
            overrides.add(BuiltinOverride {
                owner: "Element",
                method,
                custom: None,
                effects: &[QUERY_SELECTOR],
                lint: Some(VALIDATE_CSS_SELECTORS),
            });
        }
        overrides
    }

    /// Override for a called method name.
    pub fn find(&self, method: &str) -> Option<&BuiltinOverride> {
        self.entries.iter().find(|e| e.method == method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuiltinOverride> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
