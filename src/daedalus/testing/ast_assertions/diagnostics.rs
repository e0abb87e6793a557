//! Diagnostic assertions

use super::check_index;
use crate::daedalus::ast::{Diagnostic, DiagnosticCode, DiagnosticSeverity};
use crate::daedalus::testing::matchers::TextMatch;

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{} at {}", d.code, d.range.start))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DiagnosticsAssertion<'a> {
    pub(crate) diagnostics: &'a [Diagnostic],
}

impl<'a> DiagnosticsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        let actual = self.diagnostics.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} diagnostics, found {}: [{}]",
            expected,
            actual,
            summarize(self.diagnostics)
        );
        self
    }

    pub fn none(self) -> Self {
        self.count(0)
    }

    pub fn diagnostic<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DiagnosticAssertion<'a>),
    {
        check_index(index, self.diagnostics.len(), "diagnostic", "diagnostics");
        assertion(DiagnosticAssertion {
            diagnostic: &self.diagnostics[index],
            context: format!("diagnostics[{}]", index),
        });
        self
    }

    /// Assert that some diagnostic carries the code, wherever it is
    pub fn contains_code(self, code: DiagnosticCode) -> Self {
        assert!(
            self.diagnostics.iter().any(|d| d.code == code),
            "Expected a {} diagnostic, found: [{}]",
            code,
            summarize(self.diagnostics)
        );
        self
    }

    /// Diagnostics come out ordered by their start offset
    pub fn sorted(self) -> Self {
        let sorted = self
            .diagnostics
            .windows(2)
            .all(|pair| pair[0].range.span.start <= pair[1].range.span.start);
        assert!(
            sorted,
            "Expected diagnostics in source order, found: [{}]",
            summarize(self.diagnostics)
        );
        self
    }
}

pub struct DiagnosticAssertion<'a> {
    pub(crate) diagnostic: &'a Diagnostic,
    pub(crate) context: String,
}

impl<'a> DiagnosticAssertion<'a> {
    pub fn code(self, expected: DiagnosticCode) -> Self {
        assert_eq!(
            self.diagnostic.code, expected,
            "{}: Expected code {}, found {}",
            self.context, expected, self.diagnostic.code
        );
        self
    }

    pub fn severity(self, expected: DiagnosticSeverity) -> Self {
        assert_eq!(
            self.diagnostic.severity, expected,
            "{}: Unexpected severity",
            self.context
        );
        self
    }

    pub fn message(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.diagnostic.message, &self.context);
        self
    }

    pub fn message_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.diagnostic.message, &self.context);
        self
    }

    /// Byte span of the diagnostic
    pub fn span(self, start: usize, end: usize) -> Self {
        assert_eq!(
            self.diagnostic.range.span,
            start..end,
            "{}: Unexpected span",
            self.context
        );
        self
    }

    /// Zero-width diagnostic, as reported for an inserted token
    pub fn at(self, offset: usize) -> Self {
        self.span(offset, offset)
    }

    /// Zero-based line and column of the start
    pub fn starts_at(self, line: usize, column: usize) -> Self {
        let start = self.diagnostic.range.start;
        assert_eq!(
            (start.line, start.column),
            (line, column),
            "{}: Unexpected start position",
            self.context
        );
        self
    }
}
