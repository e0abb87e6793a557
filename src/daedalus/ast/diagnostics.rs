//! Diagnostics reported while lexing and parsing
//!
//! Every problem found in the source is reported as a [`Diagnostic`] and returned next to the
//! (possibly partial) tree. Nothing here aborts a parse: lexical problems still produce a
//! best-effort token, syntax problems trigger recovery.
//!
//! ## Taxonomy
//!
//! 1. **Lexical**: unterminated strings and block comments, malformed escapes, characters no
//!    token accepts, a lone `&` or `|`.
//! 2. **Syntax**: an expected token kind was not found. Carries the expected set and the
//!    token actually found (`None` at end of input).
//!
//! The severity is `Error` for everything that makes the tree incomplete. Unknown
//! single-character escapes (`\q`) are accepted by the language and only produce a warning.

use super::range::Range;
use crate::daedalus::token::Token;
use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable machine readable diagnostic identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    UnterminatedString,
    UnterminatedComment,
    InvalidEscape,
    UnknownEscape,
    StrayOperator,
    UnexpectedCharacter,
    ExpectedToken,
    InvalidAssignmentTarget,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnterminatedString => "unterminated-string",
            DiagnosticCode::UnterminatedComment => "unterminated-comment",
            DiagnosticCode::InvalidEscape => "invalid-escape",
            DiagnosticCode::UnknownEscape => "unknown-escape",
            DiagnosticCode::StrayOperator => "stray-operator",
            DiagnosticCode::UnexpectedCharacter => "unexpected-character",
            DiagnosticCode::ExpectedToken => "expected-token",
            DiagnosticCode::InvalidAssignmentTarget => "invalid-assignment-target",
        }
    }

    pub fn is_lexical(&self) -> bool {
        !matches!(
            self,
            DiagnosticCode::ExpectedToken | DiagnosticCode::InvalidAssignmentTarget
        )
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured diagnostic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    pub code: DiagnosticCode,
    pub message: String,
    /// Token kinds the parser would have accepted (syntax errors only)
    pub expected: Vec<Token>,
    /// Token found instead, `None` at end of input
    pub found: Option<Token>,
    pub source: String,
}

impl Diagnostic {
    pub fn new(
        range: Range,
        severity: DiagnosticSeverity,
        code: DiagnosticCode,
        message: String,
    ) -> Self {
        Self {
            range,
            severity,
            code,
            message,
            expected: Vec::new(),
            found: None,
            source: "daedalus-parser".to_string(),
        }
    }

    pub fn error(range: Range, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(range, DiagnosticSeverity::Error, code, message.into())
    }

    pub fn warning(range: Range, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(range, DiagnosticSeverity::Warning, code, message.into())
    }

    /// A syntax error naming the expected token kinds and the token found instead.
    pub fn expected(range: Range, expected: &[Token], found: Option<Token>) -> Self {
        let message = format!(
            "expected {}, found {}",
            describe_expected(expected),
            found.map_or("end of input", |token| token.describe())
        );
        let mut diagnostic = Self::error(range, DiagnosticCode::ExpectedToken, message);
        diagnostic.expected = expected.to_vec();
        diagnostic.found = found;
        diagnostic
    }

    /// Like [`Diagnostic::expected`] but for a whole production (`expression`, `type`, ...).
    pub fn expected_production(range: Range, production: &str, found: Option<Token>) -> Self {
        let message = format!(
            "expected {}, found {}",
            production,
            found.map_or("end of input", |token| token.describe())
        );
        let mut diagnostic = Self::error(range, DiagnosticCode::ExpectedToken, message);
        diagnostic.found = found;
        diagnostic
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity, self.code, self.message, self.range.start
        )
    }
}

fn describe_expected(expected: &[Token]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.describe().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|token| token.describe()).collect();
            format!("{} or {}", head.join(", "), last.describe())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::ast::range::Position;

    fn range() -> Range {
        Range::new(4..5, Position::new(0, 4), Position::new(0, 5))
    }

    #[test]
    fn test_expected_single_token_message() {
        let diag = Diagnostic::expected(range(), &[Token::Semicolon], Some(Token::Identifier));
        assert_eq!(diag.message, "expected `;`, found identifier");
        assert_eq!(diag.code, DiagnosticCode::ExpectedToken);
        assert_eq!(diag.found, Some(Token::Identifier));
        assert!(diag.is_error());
    }

    #[test]
    fn test_expected_many_tokens_at_end_of_input() {
        let diag = Diagnostic::expected(range(), &[Token::Comma, Token::RParen], None);
        assert_eq!(diag.message, "expected `,` or `)`, found end of input");
        assert_eq!(diag.expected, vec![Token::Comma, Token::RParen]);
    }

    #[test]
    fn test_display() {
        let diag =
            Diagnostic::warning(range(), DiagnosticCode::UnknownEscape, "unknown escape `\\q`");
        assert_eq!(
            diag.to_string(),
            "warning[unknown-escape]: unknown escape `\\q` at 0:4"
        );
    }

    #[test]
    fn test_lexical_codes() {
        assert!(DiagnosticCode::UnterminatedString.is_lexical());
        assert!(!DiagnosticCode::ExpectedToken.is_lexical());
    }
}
