//! Maestro - IDE services for Lucarne.
//!
//! Works on a document and the inference of the same version of it:
//!
//! - [`ElementIdCompletion`]: completes id lookups with declared ids
//! - [`TypeAtService`]: type under the cursor, with the `id` declaration as
//!   origin for resolved literals
//!
//! Requests and responses ([`CompletionQuery`], [`CompletionResult`]) are
//! serde types so a host can pass them through unchanged.

pub mod ide;
pub mod query;

pub use ide::{CompletionProvider, ElementIdCompletion, IdeContext, TypeAtService, TypeInfo};
pub use query::{
    Completion, CompletionEntry, CompletionQuery, CompletionResult, OutputPosition, QueryPosition,
};
