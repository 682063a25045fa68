//! Recoverable markup errors reported by the tokenizer.

use thiserror::Error;

/// Error codes for markup the tokenizer recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EofInTag,
    EofInComment,
    EofInCdata,
    EofInScriptText,
    MissingEndTagName,
}

impl ErrorCode {
    pub const fn message(self) -> &'static str {
        match self {
            Self::EofInTag => "Unexpected EOF in tag.",
            Self::EofInComment => "Unexpected EOF in comment.",
            Self::EofInCdata => "Unexpected EOF in CDATA section.",
            Self::EofInScriptText => "Unexpected EOF in script content.",
            Self::MissingEndTagName => "End tag name was expected.",
        }
    }
}

/// A recovered markup error and where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} (at offset {offset})", .code.message())]
pub struct MarkupError {
    pub code: ErrorCode,
    pub offset: u32,
}

impl MarkupError {
    pub const fn new(code: ErrorCode, offset: u32) -> Self {
        Self { code, offset }
    }
}
