//! Range helpers for tree building
//!
//!     `ast/range.rs` knows positions and offsets. This module knows how the ranges of nodes
//!     are put together from their tokens and children.

use crate::daedalus::ast::range::{LineIndex, Position, Range};

/// From the start of `first` to the end of `last`
pub fn span_of(first: &Range, last: &Range) -> Range {
    first.to(last)
}

/// Where a missing node goes: zero width, right after the previous significant token
pub fn missing_range(offset: usize, position: Position) -> Range {
    Range::empty_at(offset, position)
}

/// The program covers the whole source, leading and trailing trivia included
pub fn program_range(source: &str, index: &LineIndex) -> Range {
    index.range(&(0..source.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_range_is_empty() {
        let range = missing_range(12, Position::new(1, 3));
        assert!(range.is_empty());
        assert_eq!(range.start, range.end);
        assert_eq!(range.span, 12..12);
    }

    #[test]
    fn test_program_range_covers_trivia() {
        let source = "\n  var int x;  \n";
        let range = program_range(source, &LineIndex::new(source));
        assert_eq!(range.span, 0..source.len());
        assert_eq!(range.end, Position::new(2, 0));
    }
}
