//! # Lucarne
//!
//! Browser markup support for a JavaScript type analyzer: HTML documents are
//! projected to script, `id` attributes become an identifier index, and DOM
//! lookups (`getElementById`, `createElement`, `querySelector`) get element
//! types, lint diagnostics and id completions.
//!
//! This crate re-exports all Lucarne sub-crates and adds the plugin wiring
//! ([`PluginRegistry`], [`BrowserExtension`]) plus a reference host
//! ([`Session`]).
//!
//! ## Crates
//!
//! - [`carton`] - Shared toolbox (hash maps, inline strings, line index)
//! - [`relief`] - Documents, spans, call sites and annotations
//! - [`armature`] - Markup tokenizer and event reader
//! - [`atelier`] - Markup projection and the pre-parse hook
//! - [`croquis`] - Builtin overrides and type resolution hooks
//! - [`patina`] - Lint rules
//! - [`maestro`] - Completion and type-at services
//!
//! ## Example
//!
//! ```
//! use lucarne::{LintConfig, Session};
//!
//! let mut session = Session::browser(LintConfig::default());
//! session.add_file(
//!     "index.html",
//!     r#"<canvas id="c"></canvas><script>document.getElementById("d")</script>"#,
//! );
//!
//! let diagnostics = session.lint("index.html").unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Unknown element id 'd'");
//! ```

/// Shared toolbox (hash maps, inline strings, line index).
pub use lucarne_carton as carton;

/// Documents, spans, call sites and annotations.
pub use lucarne_relief as relief;

/// Markup tokenizer and event reader.
pub use lucarne_armature as armature;

/// Markup projection and the pre-parse hook.
pub use lucarne_atelier as atelier;

/// Builtin overrides and type resolution hooks.
pub use lucarne_croquis as croquis;

/// Lint rules.
pub use lucarne_patina as patina;

/// Completion and type-at services.
pub use lucarne_maestro as maestro;

pub mod plugin;
pub mod session;

pub use lucarne_maestro::{CompletionQuery, CompletionResult, TypeInfo};
pub use lucarne_patina::{LintConfig, LintDiagnostic, Severity};
pub use plugin::{BrowserExtension, Extension, PluginRegistry};
pub use session::{Session, SessionError};
