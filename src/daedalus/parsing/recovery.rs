//! Error recovery
//!
//!     The parser is either `Normal` or `Recovering`.
//!
//!     In `Normal`, a missing or unexpected token produces exactly one diagnostic. When the
//!     missing token can be virtually inserted (the token found instead closes something,
//!     opens a block, starts a declaration, sits on a later line, or the input has ended) the
//!     parser pretends it was there and stays `Normal`. Otherwise it switches to `Recovering`.
//!
//!     In `Recovering`, no diagnostics are emitted. The production that failed returns what it
//!     has, and the closest enclosing list (block, class body or program) skips tokens up to a
//!     synchronization point:
//!
//!         statements:  `;` (consumed), `}` or a statement keyword (left in place)
//!         top level:   `;` (consumed), a declaration keyword (left in place)
//!
//!     Skipping is brace balanced. A `}` that closes a brace opened while skipping is consumed
//!     together with an optional `;`, and ends the skip. The skipped tokens become one `ERROR`
//!     node, and the parser is `Normal` again.

use super::parser::Parser;
use crate::daedalus::ast::elements::{Anonymous, ErrorNode};
use crate::daedalus::building::span_of;
use crate::daedalus::token::Token;
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecoveryState {
    Normal,
    Recovering,
}

/// Where a skip stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncLevel {
    Statement,
    TopLevel,
}

impl SyncLevel {
    /// Tokens left in place for the enclosing list to continue with
    fn stops_at(&self, token: Token, depth: usize) -> bool {
        if token.is_top_level_only() {
            return true;
        }
        if depth > 0 {
            return false;
        }
        match self {
            SyncLevel::Statement => matches!(
                token,
                Token::RBrace | Token::If | Token::Return | Token::Var | Token::Const
            ),
            SyncLevel::TopLevel => token.is_declaration_keyword(),
        }
    }
}

impl<'s> Parser<'s> {
    pub(super) fn enter_recovery(&mut self) {
        if self.state == RecoveryState::Normal {
            trace!(pos = self.pos, token = ?self.peek(), "entering recovery");
            self.state = RecoveryState::Recovering;
        }
    }

    fn leave_recovery(&mut self) {
        if self.state == RecoveryState::Recovering {
            trace!(pos = self.pos, token = ?self.peek(), "recovered");
        }
        self.state = RecoveryState::Normal;
    }

    /// Skip to the next statement boundary inside a block or class body
    pub(super) fn synchronize_statement(&mut self) -> Option<ErrorNode> {
        self.synchronize(SyncLevel::Statement)
    }

    /// Skip to the next top-level declaration
    pub(super) fn synchronize_top_level(&mut self) -> Option<ErrorNode> {
        self.synchronize(SyncLevel::TopLevel)
    }

    /// Unconditionally skip the current token. Used when a list made no progress at all.
    pub(super) fn skip_one(&mut self) -> Option<ErrorNode> {
        let token = self.bump()?;
        self.leave_recovery();
        Some(ErrorNode {
            range: token.range.clone(),
            skipped: vec![Anonymous::new(token.token, token.range)],
        })
    }

    fn synchronize(&mut self, level: SyncLevel) -> Option<ErrorNode> {
        let mut skipped: Vec<Anonymous> = Vec::new();
        let mut depth = 0usize;

        while let Some(token) = self.peek() {
            if level.stops_at(token, depth) {
                break;
            }
            let Some(lexed) = self.bump() else { break };
            skipped.push(Anonymous::new(lexed.token, lexed.range));

            match token {
                Token::LBrace => depth += 1,
                Token::RBrace if depth > 1 => depth -= 1,
                // Closes the outermost skipped brace, or is a stray `}` at the top level
                Token::RBrace => {
                    if let Some(semicolon) = self.bump_if(Token::Semicolon) {
                        skipped.push(semicolon);
                    }
                    break;
                }
                Token::Semicolon if depth == 0 => break,
                _ => {}
            }
        }

        self.leave_recovery();
        trace!(?level, skipped = skipped.len(), "synchronized");

        let (first, last) = (skipped.first()?, skipped.last()?);
        let range = span_of(&first.range, &last.range);
        Some(ErrorNode { skipped, range })
    }

    fn bump_if(&mut self, token: Token) -> Option<Anonymous> {
        if !self.at(token) {
            return None;
        }
        self.bump()
            .map(|lexed| Anonymous::new(lexed.token, lexed.range))
    }
}
