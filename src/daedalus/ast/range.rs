//! Source positions and ranges
//!
//!     Every token, node and diagnostic carries a [Range]: the byte span into the source plus
//!     the line:column of both ends. Slicing the source with `span` gives back the exact text
//!     of a node, the positions are what editors and messages show.
//!
//!     Lines and columns are zero based. Columns count bytes, so `Zähler` is 7 columns wide.
//!
//!     Positions are computed once per source through a [LineIndex], a sorted list of line
//!     start offsets searched with a binary search.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Zero width range at `offset`, the range of a missing node
    pub fn empty_at(offset: usize, position: Position) -> Self {
        Self::new(offset..offset, position, position)
    }

    /// From the start of `self` to the end of `last`
    pub fn to(&self, last: &Range) -> Range {
        Range::new(self.span.start..last.span.end, self.start, last.end)
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Source text under this range, empty if the range belongs to another source
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.clone()).unwrap_or("")
    }

    /// Half open: `start <= position < end`. Empty ranges cover nothing.
    pub fn covers(&self, position: Position) -> bool {
        !self.is_empty() && self.start <= position && position < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Byte offset to line:column conversion for one source text
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { line_starts }
    }

    pub fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line, offset - self.line_starts[line])
    }

    pub fn range(&self, span: &ByteRange<usize>) -> Range {
        Range::new(
            span.clone(),
            self.position(span.start),
            self.position(span.end),
        )
    }

    /// Byte offset of `position`, `None` past the last line
    pub fn offset(&self, position: Position) -> Option<usize> {
        self.line_starts
            .get(position.line)
            .map(|start| start + position.column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_order_by_line_then_column() {
        assert!(Position::new(0, 40) < Position::new(1, 0));
        assert!(Position::new(3, 2) < Position::new(3, 5));
        assert_eq!(Position::new(2, 7).to_string(), "2:7");
    }

    #[test]
    fn test_covers_is_half_open() {
        let range = Range::new(4..10, Position::new(1, 2), Position::new(2, 3));
        assert!(range.covers(Position::new(1, 2)));
        assert!(range.covers(Position::new(1, 80)));
        assert!(range.covers(Position::new(2, 2)));
        assert!(!range.covers(Position::new(2, 3)));
        assert!(!range.covers(Position::new(1, 1)));
        assert!(!Range::empty_at(4, Position::new(1, 2)).covers(Position::new(1, 2)));
    }

    #[test]
    fn test_join_and_display() {
        let first = Range::new(2..5, Position::new(0, 2), Position::new(0, 5));
        let last = Range::new(9..10, Position::new(1, 1), Position::new(1, 2));
        let joined = first.to(&last);
        assert_eq!(joined.span, 2..10);
        assert_eq!(joined.to_string(), "0:2..1:2");
    }

    #[test]
    fn test_text() {
        let source = "var int x;";
        let range = LineIndex::new(source).range(&(4..7));
        assert_eq!(range.text(source), "int");
        assert_eq!(range.len(), 3);
        assert_eq!(range.text("var"), "");
    }

    #[test]
    fn test_positions_across_lines() {
        let index = LineIndex::new("func\nvoid\n\nf");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.position(0), Position::new(0, 0));
        assert_eq!(index.position(4), Position::new(0, 4));
        assert_eq!(index.position(5), Position::new(1, 0));
        assert_eq!(index.position(10), Position::new(2, 0));
        assert_eq!(index.position(11), Position::new(3, 0));
        assert_eq!(index.position(12), Position::new(3, 1));
    }

    #[test]
    fn test_columns_count_bytes() {
        let index = LineIndex::new("x\nGröße");
        assert_eq!(index.position(2), Position::new(1, 0));
        assert_eq!(index.position(6), Position::new(1, 4));
    }

    #[test]
    fn test_offset_inverts_position() {
        let index = LineIndex::new("a\nbc\ndef");
        for offset in 0..8 {
            assert_eq!(index.offset(index.position(offset)), Some(offset));
        }
        assert_eq!(index.offset(Position::new(7, 0)), None);
    }
}
