//! Browser lint rules.
//!
//! Both rules only read annotations written during inference; they never
//! resolve anything themselves.

mod invalid_selector;
mod unknown_element_id;

pub use invalid_selector::InvalidSelector;
pub use unknown_element_id::UnknownElementId;
