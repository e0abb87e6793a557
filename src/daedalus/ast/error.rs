//! Error types for AST operations
//!
//! Parsing itself never fails: problems are reported as diagnostics next to the tree. These
//! errors are for callers that choose to be strict, and for queries over a finished tree.

use super::diagnostics::Diagnostic;
use thiserror::Error;

/// Errors that can occur during AST position lookup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionLookupError {
    /// Invalid position format string
    #[error("Invalid position format: {0}")]
    InvalidPositionFormat(String),
    /// No node at the specified position
    #[error("No element found at position {line}:{column}")]
    NotFound { line: usize, column: usize },
}

/// A source rejected by strict parsing, see
/// [ParseResult::into_result](crate::daedalus::parsing::ParseResult::into_result)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// `count` is every error found. `diagnostics` holds the ones kept under
    /// `max_diagnostics`, so it can be shorter or even empty.
    #[error("{count} syntax error(s){}", first_message(diagnostics))]
    Syntax {
        count: usize,
        diagnostics: Vec<Diagnostic>,
    },
}

impl ParseError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ParseError::Syntax { diagnostics, .. } => diagnostics,
        }
    }

    pub fn error_count(&self) -> usize {
        match self {
            ParseError::Syntax { count, .. } => *count,
        }
    }
}

fn first_message(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .first()
        .map(|diagnostic| format!(", first: {diagnostic}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::ast::diagnostics::DiagnosticCode;
    use crate::daedalus::ast::range::{Position, Range};

    #[test]
    fn test_parse_error_display() {
        let range = Range::new(0..1, Position::new(2, 3), Position::new(2, 4));
        let error = ParseError::Syntax {
            count: 1,
            diagnostics: vec![Diagnostic::error(
                range,
                DiagnosticCode::UnexpectedCharacter,
                "unexpected character `#`",
            )],
        };
        assert_eq!(
            error.to_string(),
            "1 syntax error(s), first: error[unexpected-character]: unexpected character `#` at 2:3"
        );
        assert_eq!(error.diagnostics().len(), 1);
    }

    #[test]
    fn test_parse_error_without_kept_diagnostics() {
        let error = ParseError::Syntax {
            count: 3,
            diagnostics: Vec::new(),
        };
        assert_eq!(error.to_string(), "3 syntax error(s)");
        assert_eq!(error.error_count(), 3);
    }

    #[test]
    fn test_lookup_error_display() {
        let error = PositionLookupError::NotFound { line: 4, column: 2 };
        assert_eq!(error.to_string(), "No element found at position 4:2");
    }
}
