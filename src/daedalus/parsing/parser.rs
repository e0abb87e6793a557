//! Parser state and token cursor
//!
//!     The [Parser] owns the significant tokens of one source and walks them left to right
//!     with unlimited lookahead. The grammar itself lives in the sibling modules
//!     ([declarations](super::declarations), [statements](super::statements),
//!     [expressions](super::expressions)), each adding methods to the same struct.
//!
//! Reporting
//!
//!     Every syntax error goes through [Parser::fail] or [Parser::unexpected]. They decide
//!     whether a diagnostic is emitted at all and which recovery state follows, see
//!     [recovery](super::recovery). Grammar code never pushes syntax diagnostics directly.

use super::recovery::RecoveryState;
use crate::daedalus::ast::diagnostics::{Diagnostic, DiagnosticCode};
use crate::daedalus::ast::elements::{Identifier, TypeKind, TypeRef};
use crate::daedalus::ast::range::{Position, Range};
use crate::daedalus::building::{missing_range, NodeBuilder};
use crate::daedalus::lexing::LexedToken;
use crate::daedalus::token::Token;

pub struct Parser<'s> {
    pub(super) source: &'s str,
    pub(super) tokens: Vec<LexedToken>,
    pub(super) pos: usize,
    /// End of the last consumed token, where missing nodes are anchored
    pub(super) prev_end: usize,
    pub(super) prev_end_position: Position,
    pub(super) diagnostics: Vec<Diagnostic>,
    pub(super) state: RecoveryState,
    /// Token index of the last reported error, one diagnostic per position
    pub(super) last_error_pos: Option<usize>,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str, tokens: Vec<LexedToken>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            prev_end: 0,
            prev_end_position: Position::default(),
            diagnostics: Vec::new(),
            state: RecoveryState::Normal,
            last_error_pos: None,
        }
    }

    /// Syntax diagnostics collected so far
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub(super) fn peek(&self) -> Option<Token> {
        self.peek_at(0)
    }

    pub(super) fn peek_at(&self, n: usize) -> Option<Token> {
        self.tokens.get(self.pos + n).map(|t| t.token)
    }

    pub(super) fn current(&self) -> Option<&LexedToken> {
        self.tokens.get(self.pos)
    }

    pub(super) fn at(&self, token: Token) -> bool {
        self.peek() == Some(token)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn is_recovering(&self) -> bool {
        self.state == RecoveryState::Recovering
    }

    /// Consume the current token
    pub(super) fn bump(&mut self) -> Option<LexedToken> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        self.prev_end = token.range.span.end;
        self.prev_end_position = token.range.end;
        Some(token)
    }

    /// Consume the current token as an anonymous child of `builder`
    pub(super) fn bump_into(&mut self, builder: &mut NodeBuilder) -> Option<Token> {
        let token = self.bump()?;
        builder.token(&token);
        Some(token.token)
    }

    /// Consume `token` if it is next
    pub(super) fn eat(&mut self, token: Token, builder: &mut NodeBuilder) -> bool {
        if self.at(token) {
            self.bump_into(builder);
            true
        } else {
            false
        }
    }

    /// Consume `token` or report it as missing
    pub(super) fn expect(&mut self, token: Token, builder: &mut NodeBuilder) -> bool {
        if self.eat(token, builder) {
            return true;
        }
        self.fail(|range, found| Diagnostic::expected(range, &[token], found));
        false
    }

    /// The `;` ending a statement or declaration.
    ///
    /// An identifier, `if` or `return` right after it starts the next statement even on the
    /// same line, so the `;` is inserted there and that statement is parsed normally.
    pub(super) fn expect_terminator(&mut self, builder: &mut NodeBuilder) -> bool {
        if self.eat(Token::Semicolon, builder) {
            return true;
        }
        if matches!(
            self.peek(),
            Some(Token::Identifier | Token::If | Token::Return)
        ) {
            self.report_missing(Token::Semicolon);
            return false;
        }
        self.fail(|range, found| Diagnostic::expected(range, &[Token::Semicolon], found));
        false
    }

    /// Report `token` as missing before the current token. Nothing is consumed and parsing
    /// goes on normally.
    pub(super) fn report_missing(&mut self, token: Token) {
        let range = self.missing_range();
        self.report(range, |range, found| Diagnostic::expected(range, &[token], found));
    }

    /// Empty range right after the last consumed token
    pub(super) fn missing_range(&self) -> Range {
        missing_range(self.prev_end, self.prev_end_position)
    }

    /// Source text of a consumed token
    pub(super) fn text(&self, token: &LexedToken) -> &'s str {
        token.range.text(self.source)
    }

    pub(super) fn expect_identifier(&mut self) -> Identifier {
        if self.at(Token::Identifier) {
            if let Some(token) = self.bump() {
                return Identifier::new(self.text(&token), token.range);
            }
        }
        self.fail(|range, found| Diagnostic::expected(range, &[Token::Identifier], found));
        Identifier::missing(self.missing_range())
    }

    /// A builtin type keyword or a class name
    pub(super) fn parse_type(&mut self) -> TypeRef {
        match self.peek() {
            Some(token) if token.is_type_keyword() || token == Token::Identifier => {
                if let Some(lexed) = self.bump() {
                    let kind = TypeRef::builtin(lexed.token)
                        .unwrap_or_else(|| TypeKind::Named(self.text(&lexed).to_string()));
                    return TypeRef::new(kind, lexed.range);
                }
            }
            _ => {}
        }
        self.fail(|range, found| Diagnostic::expected_production(range, "type", found));
        TypeRef::missing(self.missing_range())
    }

    /// Whether the current token lets the parser pretend a missing token was there
    pub(super) fn can_insert(&self) -> bool {
        let Some(current) = self.current() else {
            return true;
        };
        let token = current.token;
        matches!(
            token,
            Token::Semicolon | Token::RBrace | Token::RParen | Token::RBracket | Token::LBrace
        ) || token.is_declaration_keyword()
            || current.range.start.line > self.prev_end_position.line
    }

    /// Report something missing at the current position.
    ///
    /// Returns true when the missing piece is virtually inserted and parsing goes on normally.
    /// Otherwise the parser is now recovering.
    pub(super) fn fail<F>(&mut self, diagnostic: F) -> bool
    where
        F: FnOnce(Range, Option<Token>) -> Diagnostic,
    {
        let inserted = self.can_insert();
        let range = match (inserted, self.current()) {
            (false, Some(current)) => current.range.clone(),
            _ => self.missing_range(),
        };
        self.report(range, diagnostic);
        if !inserted {
            self.enter_recovery();
        }
        inserted
    }

    /// Report the current token as not starting `production`. Always enters recovery.
    pub(super) fn unexpected(&mut self, production: &str) {
        let range = match self.current() {
            Some(current) => current.range.clone(),
            None => self.missing_range(),
        };
        self.report(range, |range, found| {
            Diagnostic::expected_production(range, production, found)
        });
        self.enter_recovery();
    }

    /// A diagnostic outside the expected-token scheme, never suppressed
    pub(super) fn report_invalid_assignment_target(&mut self, target: &Range) {
        self.diagnostics.push(Diagnostic::error(
            target.clone(),
            DiagnosticCode::InvalidAssignmentTarget,
            "invalid assignment target",
        ));
    }

    fn report<F>(&mut self, range: Range, diagnostic: F)
    where
        F: FnOnce(Range, Option<Token>) -> Diagnostic,
    {
        let found = self.peek();
        let silenced = self.is_recovering()
            || self.last_error_pos == Some(self.pos)
            || found.is_some_and(|token| token.is_error());
        if !silenced {
            self.diagnostics.push(diagnostic(range, found));
        }
        self.last_error_pos = Some(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::ast::syntax::NodeKind;
    use crate::daedalus::lexing::lex;

    fn parser(source: &str) -> Parser<'_> {
        Parser::new(source, lex(source).tokens)
    }

    #[test]
    fn test_expect_records_token() {
        let mut parser = parser(";");
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        assert!(parser.expect(Token::Semicolon, &mut builder));
        assert!(parser.at_eof());
        assert_eq!(parser.prev_end, 1);
        assert!(parser.into_diagnostics().is_empty());
    }

    #[test]
    fn test_missing_token_at_end_of_input_is_inserted() {
        let mut parser = parser("x");
        parser.bump();
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        assert!(!parser.expect(Token::Semicolon, &mut builder));
        assert!(!parser.is_recovering());
        let diagnostics = parser.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.span, 1..1);
        assert_eq!(diagnostics[0].message, "expected `;`, found end of input");
    }

    #[test]
    fn test_missing_token_before_same_line_token_recovers() {
        let mut parser = parser("x y");
        parser.bump();
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        parser.expect(Token::Semicolon, &mut builder);
        assert!(parser.is_recovering());
        let diagnostics = parser.into_diagnostics();
        assert_eq!(diagnostics[0].range.span, 2..3);
        assert_eq!(diagnostics[0].found, Some(Token::Identifier));
    }

    #[test]
    fn test_terminator_is_inserted_before_next_statement() {
        let mut parser = parser("x y");
        parser.bump();
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        assert!(!parser.expect_terminator(&mut builder));
        assert!(!parser.is_recovering());
        assert_eq!(parser.peek(), Some(Token::Identifier));
        let diagnostics = parser.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.span, 1..1);
        assert_eq!(diagnostics[0].message, "expected `;`, found identifier");
    }

    #[test]
    fn test_terminator_before_literal_recovers() {
        let mut parser = parser("x 2");
        parser.bump();
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        parser.expect_terminator(&mut builder);
        assert!(parser.is_recovering());
        assert_eq!(parser.into_diagnostics()[0].range.span, 2..3);
    }

    #[test]
    fn test_token_on_next_line_allows_insertion() {
        let mut parser = parser("x\ny");
        parser.bump();
        assert!(parser.can_insert());
    }

    #[test]
    fn test_one_diagnostic_per_position() {
        let mut parser = parser("var");
        parser.bump();
        parser.parse_type();
        parser.expect_identifier();
        assert_eq!(parser.into_diagnostics().len(), 1);
    }

    #[test]
    fn test_error_tokens_are_not_reported_twice() {
        let mut parser = parser("x #");
        parser.bump();
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        parser.expect(Token::Semicolon, &mut builder);
        assert!(parser.is_recovering());
        assert!(parser.into_diagnostics().is_empty());
    }

    #[test]
    fn test_type_keywords_and_names() {
        let mut parser = parser("INT C_NPC");
        assert_eq!(parser.parse_type().kind, TypeKind::Int);
        assert_eq!(parser.parse_type().kind, TypeKind::Named("C_NPC".into()));
    }
}
