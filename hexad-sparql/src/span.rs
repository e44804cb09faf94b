//! Source spans for diagnostics.
//!
//! Tokens and diagnostics carry byte-offset spans; a `LineIndex` converts
//! offsets to 1-indexed line/column positions when an error is rendered.

use serde::{Deserialize, Serialize};

/// A byte range in the query text: `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Byte offset of the start (inclusive)
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a span from start to end byte offsets.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at a single position.
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// A span covering both this span and another.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The text covered by this span, clamped to the source bounds.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let len = source.len();
        let start = self.start.min(len);
        let end = self.end.min(len);
        if start <= end {
            &source[start..end]
        } else {
            ""
        }
    }
}

/// A 1-indexed line/column position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Mapping from byte offsets to line/column positions.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-indexed line/column.
    pub fn line_col(&self, offset: usize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        LineCol {
            line: line as u32 + 1,
            col: (offset - line_start) as u32 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_union_and_slice() {
        let a = SourceSpan::new(2, 5);
        let b = SourceSpan::new(4, 9);
        assert_eq!(a.union(b), SourceSpan::new(2, 9));

        assert_eq!(SourceSpan::new(7, 12).slice("SELECT ?name"), "?name");
        assert_eq!(SourceSpan::new(50, 60).slice("short"), "");
    }

    #[test]
    fn test_line_index() {
        let source = "SELECT ?x\nWHERE {\n}";
        let index = LineIndex::new(source);

        assert_eq!(index.line_col(0), LineCol { line: 1, col: 1 });
        assert_eq!(index.line_col(7), LineCol { line: 1, col: 8 });
        assert_eq!(index.line_col(10), LineCol { line: 2, col: 1 });
        assert_eq!(index.line_col(18), LineCol { line: 3, col: 1 });
    }
}
