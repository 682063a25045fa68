//! Byte spans.

use serde::{Deserialize, Serialize};

/// Source span `[start, end)` in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn empty(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `start <= offset <= end`
    #[inline]
    pub const fn covers(&self, offset: u32) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// `start < offset < end`, i.e. strictly between the delimiters of a
    /// quoted literal.
    #[inline]
    pub const fn encloses(&self, offset: u32) -> bool {
        self.start < offset && offset < self.end
    }

    #[inline]
    pub fn shift(self, delta: u32) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    #[inline]
    pub fn source_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start as usize..self.end as usize]
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}
