//! Croquis - Type resolution for browser documents.
//!
//! Sketches just enough types over the projected script of a document to
//! check DOM lookups:
//!
//! - [`collect_call_sites`] parses each script region with OXC and copies
//!   out its call expressions
//! - [`BuiltinOverrides`] names the custom function, effects and lint rule
//!   attached to `getElementById`, `createElement` and `querySelector(All)`
//! - [`FunctionRegistry`] holds the [`CustomFunction`] hooks
//!   ([`IdentifierLookup`], [`ElementFactory`], [`SelectorLookup`])
//! - [`Resolver::infer`] runs them and returns an [`Inference`]: the calls,
//!   their synthesized types, the argument annotations and the lint requests
//!
//! ## Example
//!
//! ```
//! use lucarne_croquis::{BrowserDefinitions, BuiltinOverrides, FunctionRegistry, Resolver};
//!
//! let doc = lucarne_atelier::project(
//!     r#"<form id="login"></form><script>document.getElementById("login")</script>"#,
//!     "index.html",
//! );
//! let overrides = BuiltinOverrides::browser();
//! let functions = FunctionRegistry::browser();
//! let inference = Resolver::new(&overrides, &functions, &BrowserDefinitions).infer(&doc);
//!
//! let call = &inference.calls[0];
//! assert_eq!(inference.call_type(call.span).unwrap().name(), "HTMLFormElement");
//! ```

pub mod definitions;
pub mod hooks;
pub mod inference;
pub mod overrides;
pub mod registry;
pub mod script;
pub mod types;

pub use definitions::{
    element_interface_name, element_type_for_tag, BrowserDefinitions, TypeDefinitions,
};
pub use hooks::{ElementFactory, IdentifierLookup, SelectorLookup};
pub use inference::{Inference, LintRequest, Resolver};
pub use overrides::{
    BuiltinOverride, BuiltinOverrides, CREATE_ELEMENT, GET_ELEMENT_BY_ID, QUERY_SELECTOR,
    VALIDATE_CSS_SELECTORS, VALIDATE_ELEMENT_ID,
};
pub use registry::{CallContext, CustomFunction, FunctionRegistry};
pub use script::collect_call_sites;
pub use types::{Provenance, TypeKind, TypeValue, HTML_ELEMENT};
