//! Parse output

use crate::daedalus::ast::diagnostics::{Diagnostic, DiagnosticSeverity};
use crate::daedalus::ast::elements::Program;
use crate::daedalus::ast::error::ParseError;
use crate::daedalus::ast::syntax::SyntaxNode;
use crate::daedalus::lexing::Trivia;
use serde::Serialize;
use std::time::Duration;

/// Everything one parse produces. The tree is always present, however broken the input.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    pub program: Program,
    /// Lexical and syntax diagnostics, ordered by start offset
    pub diagnostics: Vec<Diagnostic>,
    /// Whitespace and comments in source order, empty when trivia collection is off
    pub trivia: Vec<Trivia>,
    pub stats: ParseStats,
    /// Set when `max_diagnostics` dropped some diagnostics
    pub diagnostics_truncated: bool,
    /// Error diagnostics before `max_diagnostics` was applied
    pub error_count: usize,
}

impl ParseResult {
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::from(&self.program)
    }

    /// Counts errors dropped by `max_diagnostics` too
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
    }

    /// Line and block comments, in source order
    pub fn comments(&self) -> Vec<&Trivia> {
        self.trivia.iter().filter(|t| t.is_comment()).collect()
    }

    /// The tree if the source parsed without errors. Warnings are not errors.
    pub fn into_result(self) -> Result<Program, ParseError> {
        if self.has_errors() {
            let errors = self
                .diagnostics
                .into_iter()
                .filter(Diagnostic::is_error)
                .collect();
            Err(ParseError::Syntax {
                count: self.error_count,
                diagnostics: errors,
            })
        } else {
            Ok(self.program)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    pub duration: Duration,
    pub source_len: usize,
    /// Significant tokens, trivia excluded
    pub token_count: usize,
    pub trivia_count: usize,
}

impl ParseStats {
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        let seconds = self.duration.as_secs_f64();
        if seconds == 0.0 {
            0.0
        } else {
            self.source_len as f64 / seconds
        }
    }
}

/// Output of [validate](super::validate)
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// No error diagnostics. Warnings do not make a source invalid.
    pub is_valid: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ParseStats,
}

impl From<ParseResult> for ValidationReport {
    fn from(result: ParseResult) -> Self {
        Self {
            is_valid: !result.has_errors(),
            diagnostics: result.diagnostics,
            stats: result.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput() {
        let stats = ParseStats {
            duration: Duration::from_millis(500),
            source_len: 1000,
            ..ParseStats::default()
        };
        assert_eq!(stats.throughput_bytes_per_sec(), 2000.0);
        assert_eq!(ParseStats::default().throughput_bytes_per_sec(), 0.0);
    }
}
