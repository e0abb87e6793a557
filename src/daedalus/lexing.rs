//! Lexer
//!
//!     This module turns source text into the token stream consumed by the parser.
//!
//! The Lexing Pipeline
//!
//!     1. Core tokenization using the logos lexer. See [base_tokenization](base_tokenization).
//!        Every byte of the input lands in exactly one token, keywords are already
//!        classified and unrecognized characters are `Token::Error`.
//!
//!     2. Splitting. Whitespace and comments are moved out of the significant stream into
//!        [Trivia]. They never become tree nodes, but their ranges are kept so tooling can
//!        recover comments.
//!
//!     3. Lexical diagnostics. Unterminated strings and block comments, malformed escapes,
//!        a lone `&` or `|` and unexpected characters each produce a [Diagnostic]. The token
//!        itself stays in the stream: the parser sees a best-effort token and lexing never
//!        fails.
//!
//! Ranges
//!
//!     Logos gives byte spans. They are converted once, here, into full [Range] values with
//!     line/column positions. From this point on nothing recomputes or adjusts them.

pub mod base_tokenization;
pub mod escapes;

pub use base_tokenization::tokenize;

use crate::daedalus::ast::diagnostics::{Diagnostic, DiagnosticCode};
use crate::daedalus::ast::range::{LineIndex, Range};
use crate::daedalus::token::{is_terminated_block_comment, is_terminated_string, Token};
use escapes::{check_escapes, EscapeIssueKind};
use serde::Serialize;

/// A significant token with its location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexedToken {
    pub token: Token,
    pub range: Range,
}

impl LexedToken {
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.range.text(source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriviaKind {
    Whitespace,
    LineComment,
    BlockComment,
}

/// Whitespace or a comment, kept out of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub range: Range,
}

impl Trivia {
    pub fn is_comment(&self) -> bool {
        self.kind != TriviaKind::Whitespace
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.range.text(source)
    }
}

/// Output of [lex]
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    pub tokens: Vec<LexedToken>,
    pub trivia: Vec<Trivia>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lex a complete source text.
pub fn lex(source: &str) -> Lexed {
    lex_with_index(source, &LineIndex::new(source))
}

/// Lex using an already built [LineIndex] for the same source.
pub fn lex_with_index(source: &str, index: &LineIndex) -> Lexed {
    let mut lexed = Lexed::default();

    for (token, span) in tokenize(source) {
        let range = index.range(&span);
        let text = range.text(source);

        let trivia_kind = match token {
            Token::Whitespace => Some(TriviaKind::Whitespace),
            Token::LineComment => Some(TriviaKind::LineComment),
            Token::BlockComment => Some(TriviaKind::BlockComment),
            _ => None,
        };

        if let Some(kind) = trivia_kind {
            if kind == TriviaKind::BlockComment && !is_terminated_block_comment(text) {
                lexed.diagnostics.push(Diagnostic::error(
                    range.clone(),
                    DiagnosticCode::UnterminatedComment,
                    "unterminated block comment",
                ));
            }
            lexed.trivia.push(Trivia { kind, range });
            continue;
        }

        match token {
            Token::String => string_diagnostics(text, &range, index, &mut lexed.diagnostics),
            Token::StrayAmpersand => lexed.diagnostics.push(Diagnostic::error(
                range.clone(),
                DiagnosticCode::StrayOperator,
                "unexpected `&`, did you mean `&&`?",
            )),
            Token::StrayPipe => lexed.diagnostics.push(Diagnostic::error(
                range.clone(),
                DiagnosticCode::StrayOperator,
                "unexpected `|`, did you mean `||`?",
            )),
            Token::Error => lexed.diagnostics.push(Diagnostic::error(
                range.clone(),
                DiagnosticCode::UnexpectedCharacter,
                format!("unexpected character `{}`", text),
            )),
            _ => {}
        }

        lexed.tokens.push(LexedToken { token, range });
    }

    lexed
}

fn string_diagnostics(
    text: &str,
    range: &Range,
    index: &LineIndex,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for issue in check_escapes(text, range.span.start) {
        let issue_range = index.range(&issue.span);
        diagnostics.push(match issue.kind {
            EscapeIssueKind::Invalid => Diagnostic::error(
                issue_range,
                DiagnosticCode::InvalidEscape,
                format!("invalid escape sequence `{}`", issue.sequence),
            ),
            EscapeIssueKind::Unknown => Diagnostic::warning(
                issue_range,
                DiagnosticCode::UnknownEscape,
                format!("unknown escape sequence `{}`", issue.sequence),
            ),
        });
    }

    if !is_terminated_string(text) {
        diagnostics.push(Diagnostic::error(
            range.clone(),
            DiagnosticCode::UnterminatedString,
            "unterminated string literal",
        ));
    }
}
