//! Statement nodes
//!
//!     Statements only appear inside blocks: function bodies, instance and prototype bodies,
//!     and the branches of an `if`.

use super::declarations::VariableDeclaration;
use super::expressions::Expression;
use super::terminals::{Anonymous, ErrorNode};
use crate::daedalus::ast::range::Range;
use crate::daedalus::token::Token;
use serde::Serialize;
use std::fmt;

/// `{ statements }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

impl Block {
    /// Stand-in for a block absent from the source
    pub fn missing(range: Range) -> Self {
        Self {
            statements: Vec::new(),
            anonymous: Vec::new(),
            range,
        }
    }

    /// A missing block owns no tokens at all, not even its delimiters
    pub fn is_missing(&self) -> bool {
        self.anonymous.is_empty() && self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    Assignment(AssignmentStatement),
    Expression(ExpressionStatement),
    If(IfStatement),
    Return(ReturnStatement),
    Variable(VariableDeclaration),
    Block(Block),
    Error(ErrorNode),
}

impl Statement {
    pub fn range(&self) -> &Range {
        match self {
            Statement::Assignment(s) => &s.range,
            Statement::Expression(s) => &s.range,
            Statement::If(s) => &s.range,
            Statement::Return(s) => &s.range,
            Statement::Variable(s) => &s.range,
            Statement::Block(s) => &s.range,
            Statement::Error(s) => &s.range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubtractAssign,
    #[serde(rename = "*=")]
    MultiplyAssign,
    #[serde(rename = "/=")]
    DivideAssign,
}

impl AssignmentOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Assign => Some(AssignmentOperator::Assign),
            Token::PlusAssign => Some(AssignmentOperator::AddAssign),
            Token::MinusAssign => Some(AssignmentOperator::SubtractAssign),
            Token::StarAssign => Some(AssignmentOperator::MultiplyAssign),
            Token::SlashAssign => Some(AssignmentOperator::DivideAssign),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `left op right ;`. An invalid `left` is kept as parsed and reported once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentStatement {
    pub left: Expression,
    pub operator: AssignmentOperator,
    pub right: Expression,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

/// `if cond consequence [else alternative]`
///
/// Branches are either blocks or single statements, which is how `else if` chains are
/// represented: the alternative is itself an `IfStatement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub consequence: Box<Statement>,
    pub alternative: Option<Box<Statement>>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_operator_from_token() {
        assert_eq!(
            AssignmentOperator::from_token(Token::PlusAssign),
            Some(AssignmentOperator::AddAssign)
        );
        assert_eq!(AssignmentOperator::from_token(Token::EqEq), None);
        assert_eq!(AssignmentOperator::DivideAssign.to_string(), "/=");
    }
}
