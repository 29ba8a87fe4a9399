//! Offset to line/column mapping for a document's text.
//!
//! Tokens only store byte offsets; rules that report positions ask the
//! owning document, which builds this table on first use.

use std::fmt;

/// 1-based line and byte column.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Start offset of every line in a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Always starts with `0`; one entry per `\n` follows.
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(
            memchr::memchr_iter(b'\n', text.as_bytes())
                .map_while(|pos| u32::try_from(pos + 1).ok()),
        );
        LineIndex { line_starts, len }
    }

    /// Number of lines. An empty text has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Map a byte offset to its line and column.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn line_col(&self, offset: u32) -> LineCol {
        let offset = offset.min(self.len);
        // `line_starts[0] == 0 <= offset`, so the partition point is at least 1.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        LineCol {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            col: offset - line_start + 1,
        }
    }

    /// Start offset of a 1-based line, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.line_starts.get(index).copied()
    }
}
