//! IDE services over an analyzed document.

mod completion;
mod type_at;

pub use completion::{CompletionProvider, ElementIdCompletion};
pub use type_at::{TypeAtService, TypeInfo};

use lucarne_croquis::Inference;
use lucarne_relief::SourceDocument;

/// One analyzed file as the services see it.
#[derive(Clone, Copy)]
pub struct IdeContext<'a> {
    pub document: &'a SourceDocument,
    /// Inference over the same version of the document
    pub inference: &'a Inference,
}

impl<'a> IdeContext<'a> {
    pub fn new(document: &'a SourceDocument, inference: &'a Inference) -> Self {
        Self {
            document,
            inference,
        }
    }
}
