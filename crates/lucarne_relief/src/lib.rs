//! Relief - The surface every Lucarne pass works on.
//!
//! Defines the values shared between the markup projector, the type resolver
//! hooks, the lint rules and the completion provider:
//!
//! - [`SourceDocument`]: raw markup, its same-length script projection and
//!   the identifier index built from `id` attributes
//! - [`CallSite`] / [`ArgumentNode`]: an owned view of script calls
//! - [`AnnotationTable`]: metadata attached to call arguments during
//!   inference and read back by lint and completion
//!
//! All offsets are UTF-8 byte offsets into the raw document. Because the
//! projection has the same length as the raw text, an offset computed against
//! the projection is valid in the raw document too.

pub mod annotation;
pub mod call;
pub mod document;
pub mod errors;
pub mod index;
pub mod span;

pub use annotation::{AnnotationTable, ArgumentAnnotation};
pub use call::{ArgumentKind, ArgumentNode, CallSite, Callee};
pub use document::{ScriptKind, ScriptRegion, SourceDocument};
pub use errors::{ErrorCode, MarkupError};
pub use index::{IdentifierEntry, IdentifierIndex};
pub use span::Span;
