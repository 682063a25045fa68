//! Carton - The toolbox shared by every Lucarne crate.
//!
//! Like the carton an artist carries between studios, this crate holds the
//! small utilities every other crate reaches for: fast hash maps, inline
//! strings, content hashing and line/column bookkeeping.
//!
//! # Example
//!
//! ```
//! use lucarne_carton::line_index::LineIndex;
//!
//! let index = LineIndex::new("<div>\n  <script></script>\n</div>");
//! let pos = index.position_at(8);
//! assert_eq!((pos.line, pos.ch), (1, 2));
//! assert_eq!(index.offset_at(pos), Some(8));
//! ```

pub mod hash;
pub mod line_index;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

pub use line_index::{LineCh, LineIndex};
