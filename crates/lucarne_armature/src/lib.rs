//! Armature - The structural markup reader for Lucarne.
//!
//! A byte-level HTML/XML tokenizer ([`tokenizer`]) and a reader that folds
//! its callbacks into a document-ordered stream of open-tag, attribute and
//! close-tag events ([`reader`]). Nothing here builds a tree: the reader only
//! reports tag and attribute boundaries with exact byte spans.
//!
//! The tokenizer never fails. Malformed input is recovered from and reported
//! as [`lucarne_relief::MarkupError`]s alongside the events.

pub mod reader;
pub mod tokenizer;

pub use reader::{Attribute, CloseTag, MarkupHandler, MarkupReader, OpenTag};
pub use tokenizer::{Callbacks, QuoteType, Tokenizer};
