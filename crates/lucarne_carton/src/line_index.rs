//! Byte offset <-> `{line, ch}` conversion.
//!
//! Lines are split on `\n` only (a `\r\n` pair keeps its `\r` at the end of
//! the line). Both `line` and `ch` are 0-based; `ch` counts Unicode scalar
//! values from the start of the line.

use serde::{Deserialize, Serialize};

/// A 0-based line / character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LineCh {
    pub line: u32,
    pub ch: u32,
}

impl LineCh {
    pub const fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Precomputed line starts for a text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i as u32 + 1));
        Self { text, line_starts }
    }

    /// Number of lines (an empty text has one line).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a position. Offsets past the end are clamped,
    /// offsets inside a multi-byte character round down to it.
    pub fn position_at(&self, offset: u32) -> LineCh {
        let offset = offset.min(self.text.len() as u32);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let start = self.line_starts[line] as usize;
        let ch = self.text[start..]
            .char_indices()
            .take_while(|(i, _)| start + i < offset as usize)
            .count();

        LineCh::new(line as u32, ch as u32)
    }

    /// Convert a position back to a byte offset.
    ///
    /// Returns `None` when the line does not exist or `ch` is past the end of
    /// that line.
    pub fn offset_at(&self, pos: LineCh) -> Option<u32> {
        let line = pos.line as usize;
        let start = *self.line_starts.get(line)? as usize;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&s| s as usize - 1)
            .unwrap_or(self.text.len());
        let line_text = &self.text[start..end];

        let mut chars = line_text.char_indices();
        for _ in 0..pos.ch {
            chars.next()?;
        }
        let rel = chars.next().map(|(i, _)| i).unwrap_or(line_text.len());
        Some((start + rel) as u32)
    }
}
