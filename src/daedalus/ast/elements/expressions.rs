//! Expression nodes
//!
//!     Operators, from loosest to tightest:
//!
//!         ||
//!         &&
//!         == !=
//!         < <= > >=
//!         + -
//!         * / %
//!         ! ~ + -        (prefix, right associative)
//!         [i]  .m  (args) (postfix, chained left to right)
//!
//!     Binary operators are left associative. The operator token itself is kept as an anonymous
//!     child; the node records which operator it was.

use super::terminals::{
    Anonymous, BooleanLiteral, ErrorNode, Identifier, NumberLiteral, StringLiteral,
};
use crate::daedalus::ast::range::Range;
use crate::daedalus::token::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    ArrayAccess(ArrayAccess),
    MemberAccess(MemberAccess),
    Call(CallExpression),
    Parenthesized(ParenthesizedExpression),
    Boolean(BooleanLiteral),
    Number(NumberLiteral),
    String(StringLiteral),
    Identifier(Identifier),
    /// `{ a, b, c }`, only valid as a variable initializer
    ArrayInitializer(ArrayInitializer),
    Error(ErrorNode),
}

impl Expression {
    pub fn range(&self) -> &Range {
        match self {
            Expression::Binary(e) => &e.range,
            Expression::Unary(e) => &e.range,
            Expression::ArrayAccess(e) => &e.range,
            Expression::MemberAccess(e) => &e.range,
            Expression::Call(e) => &e.range,
            Expression::Parenthesized(e) => &e.range,
            Expression::Boolean(e) => &e.range,
            Expression::Number(e) => &e.range,
            Expression::String(e) => &e.range,
            Expression::Identifier(e) => &e.range,
            Expression::ArrayInitializer(e) => &e.range,
            Expression::Error(e) => &e.range,
        }
    }

    /// Identifiers, member access and array access can be assigned to
    pub fn is_lvalue(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::MemberAccess(_) | Expression::ArrayAccess(_)
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Expression::Error(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
}

impl BinaryOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        let op = match token {
            Token::OrOr => BinaryOperator::Or,
            Token::AndAnd => BinaryOperator::And,
            Token::EqEq => BinaryOperator::Equal,
            Token::NotEq => BinaryOperator::NotEqual,
            Token::Less => BinaryOperator::Less,
            Token::LessEq => BinaryOperator::LessEqual,
            Token::Greater => BinaryOperator::Greater,
            Token::GreaterEq => BinaryOperator::GreaterEqual,
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Star => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            Token::Percent => BinaryOperator::Modulo,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Negate,
}

impl UnaryOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Bang => Some(UnaryOperator::Not),
            Token::Tilde => Some(UnaryOperator::BitNot),
            Token::Plus => Some(UnaryOperator::Plus),
            Token::Minus => Some(UnaryOperator::Negate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Plus => "+",
            UnaryOperator::Negate => "-",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayAccess {
    pub array: Box<Expression>,
    pub index: Box<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberAccess {
    pub object: Box<Expression>,
    pub member: Identifier,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: ArgumentList,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

/// `( a, b )` of a call. The parentheses belong to the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentList {
    pub arguments: Vec<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

impl ArgumentList {
    /// Stand-in for an argument list absent from the source
    pub fn missing(range: Range) -> Self {
        Self {
            arguments: Vec::new(),
            anonymous: Vec::new(),
            range,
        }
    }

    /// A missing argument list owns no tokens at all, not even its delimiters
    pub fn is_missing(&self) -> bool {
        self.anonymous.is_empty() && self.arguments.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayInitializer {
    pub elements: Vec<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operator_from_token() {
        assert_eq!(BinaryOperator::from_token(Token::Percent), Some(BinaryOperator::Modulo));
        assert_eq!(BinaryOperator::from_token(Token::Bang), None);
        assert_eq!(BinaryOperator::LessEqual.to_string(), "<=");
    }

    #[test]
    fn test_unary_operator_from_token() {
        assert_eq!(UnaryOperator::from_token(Token::Tilde), Some(UnaryOperator::BitNot));
        assert_eq!(UnaryOperator::from_token(Token::Star), None);
        assert_eq!(UnaryOperator::Negate.as_str(), "-");
    }
}
