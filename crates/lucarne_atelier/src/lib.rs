//! Atelier - The projection workshop for Lucarne.
//!
//! Turns markup documents into script the analyzer can parse:
//!
//! - [`Projector`]: cursor state machine over the markup event stream that
//!   blanks everything except script bodies and event-handler values, and
//!   records every `id` attribute in an [`IdentifierIndex`]
//! - [`is_markup_file`]: decides which files are projected
//! - [`MarkupPreParse`]: the [`PreParseHook`] tying both together
//!
//! ```
//! use lucarne_atelier::project;
//!
//! let doc = project("<b id=x></b><script>f()</script>", "[doc]");
//! assert_eq!(doc.projected_text.len(), 32);
//! assert!(doc.projected_text.ends_with("f()         "));
//! assert_eq!(doc.identifier_index.unwrap().get("x").unwrap().owner_tag, "b");
//! ```
//!
//! [`IdentifierIndex`]: lucarne_relief::IdentifierIndex

pub mod gate;
pub mod hook;
pub mod projector;

pub use gate::{is_markup_file, DOCUMENT_SENTINEL};
pub use hook::{MarkupPreParse, PreParseHook};
pub use projector::{is_event_handler_attribute, project, ProjectionState, Projector};
