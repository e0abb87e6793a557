//! Expressions
//!
//!     Precedence climbing over the binary operators (see [precedence](super::precedence)),
//!     then prefix operators, then a postfix chain on a primary:
//!
//!         expression := unary (binop unary)*
//!         unary      := ('!' | '~' | '+' | '-') unary | postfix
//!         postfix    := primary ( '[' expression ']' | '.' identifier | arguments )*
//!         primary    := identifier | number | string | boolean | '(' expression ')'
//!
//!     An expression is always produced. When none can be parsed the result is an empty
//!     error node at the current position.

use super::parser::Parser;
use super::precedence::{binding_power, LOWEST};
use crate::daedalus::ast::diagnostics::Diagnostic;
use crate::daedalus::ast::elements::{
    Anonymous, ArgumentList, ArrayAccess, ArrayInitializer, BinaryExpression, BinaryOperator,
    BooleanLiteral, CallExpression, ErrorNode, Expression, Identifier, MemberAccess,
    NumberLiteral, ParenthesizedExpression, StringLiteral, UnaryExpression, UnaryOperator,
};
use crate::daedalus::ast::syntax::NodeKind;
use crate::daedalus::building::NodeBuilder;
use crate::daedalus::token::Token;

/// Tokens an expression can start with. Error tokens are included: they are taken as an
/// error node without a second diagnostic.
pub(super) fn starts_expression(token: Token) -> bool {
    matches!(
        token,
        Token::Identifier
            | Token::Number
            | Token::String
            | Token::True
            | Token::False
            | Token::LParen
            | Token::Bang
            | Token::Tilde
            | Token::Plus
            | Token::Minus
    ) || token.is_error()
}

impl<'s> Parser<'s> {
    pub(super) fn expression(&mut self) -> Expression {
        self.binary_expression(LOWEST)
    }

    fn binary_expression(&mut self, min_power: u8) -> Expression {
        let mut left = self.unary_expression();

        while !self.is_recovering() {
            let Some(operator) = self.peek().and_then(BinaryOperator::from_token) else {
                break;
            };
            let power = binding_power(operator);
            if power < min_power {
                break;
            }

            let mut builder = NodeBuilder::new(NodeKind::BinaryExpression);
            builder.child(left.range());
            self.bump_into(&mut builder);
            let right = self.binary_expression(power + 1);
            builder.child(right.range());

            let (range, anonymous) = builder.finish(self.missing_range());
            left = Expression::Binary(BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                anonymous,
                range,
            });
        }

        left
    }

    fn unary_expression(&mut self) -> Expression {
        let Some(operator) = self.peek().and_then(UnaryOperator::from_token) else {
            let primary = self.primary_expression();
            return self.postfix_chain(primary);
        };

        let mut builder = NodeBuilder::new(NodeKind::UnaryExpression);
        self.bump_into(&mut builder);
        let operand = self.unary_expression();
        builder.child(operand.range());

        let (range, anonymous) = builder.finish(self.missing_range());
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
            anonymous,
            range,
        })
    }

    fn postfix_chain(&mut self, mut expression: Expression) -> Expression {
        while !self.is_recovering() {
            expression = match self.peek() {
                Some(Token::LBracket) => self.array_access(expression),
                Some(Token::Dot) => self.member_access(expression),
                Some(Token::LParen) => self.call(expression),
                _ => break,
            };
        }
        expression
    }

    fn array_access(&mut self, array: Expression) -> Expression {
        let mut builder = NodeBuilder::new(NodeKind::ArrayAccess);
        builder.child(array.range());
        self.bump_into(&mut builder);
        let index = self.expression();
        builder.child(index.range());
        if !self.is_recovering() {
            self.expect(Token::RBracket, &mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        Expression::ArrayAccess(ArrayAccess {
            array: Box::new(array),
            index: Box::new(index),
            anonymous,
            range,
        })
    }

    fn member_access(&mut self, object: Expression) -> Expression {
        let mut builder = NodeBuilder::new(NodeKind::MemberAccess);
        builder.child(object.range());
        self.bump_into(&mut builder);
        let member = self.expect_identifier();
        builder.child(&member.range);

        let (range, anonymous) = builder.finish(self.missing_range());
        Expression::MemberAccess(MemberAccess {
            object: Box::new(object),
            member,
            anonymous,
            range,
        })
    }

    fn call(&mut self, function: Expression) -> Expression {
        let mut builder = NodeBuilder::new(NodeKind::CallExpression);
        builder.child(function.range());
        let arguments = self.argument_list();
        builder.child(&arguments.range);

        let (range, anonymous) = builder.finish(self.missing_range());
        Expression::Call(CallExpression {
            function: Box::new(function),
            arguments,
            anonymous,
            range,
        })
    }

    /// `( a, b )`, the current token is the `(`
    fn argument_list(&mut self) -> ArgumentList {
        let mut builder = NodeBuilder::new(NodeKind::ArgumentList);
        self.bump_into(&mut builder);

        let mut arguments = Vec::new();
        if !self.at(Token::RParen) {
            loop {
                let argument = self.expression();
                builder.child(argument.range());
                arguments.push(argument);
                if self.is_recovering() || !self.eat(Token::Comma, &mut builder) {
                    break;
                }
                if self.at(Token::RParen) {
                    // Trailing comma
                    self.fail(|range, found| {
                        Diagnostic::expected_production(range, "expression", found)
                    });
                    break;
                }
            }
        }
        if !self.is_recovering() {
            self.expect(Token::RParen, &mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        ArgumentList {
            arguments,
            anonymous,
            range,
        }
    }

    fn primary_expression(&mut self) -> Expression {
        let Some(token) = self.peek() else {
            return self.missing_expression();
        };

        match token {
            Token::LParen => return self.parenthesized(),
            Token::Identifier
            | Token::Number
            | Token::String
            | Token::True
            | Token::False => {}
            token if token.is_error() => {}
            _ => return self.missing_expression(),
        }

        let Some(lexed) = self.bump() else {
            return self.missing_expression();
        };
        let text = self.text(&lexed);
        let range = lexed.range;
        match lexed.token {
            Token::Identifier => Expression::Identifier(Identifier::new(text, range)),
            Token::Number => Expression::Number(NumberLiteral {
                text: text.to_string(),
                range,
            }),
            Token::String => Expression::String(StringLiteral {
                raw: text.to_string(),
                range,
            }),
            Token::True | Token::False => Expression::Boolean(BooleanLiteral {
                value: lexed.token == Token::True,
                range,
            }),
            // Already reported by the lexer
            other => Expression::Error(ErrorNode {
                skipped: vec![Anonymous::new(other, range.clone())],
                range,
            }),
        }
    }

    fn parenthesized(&mut self) -> Expression {
        let mut builder = NodeBuilder::new(NodeKind::ParenthesizedExpression);
        self.bump_into(&mut builder);
        let inner = self.expression();
        builder.child(inner.range());
        if !self.is_recovering() {
            self.expect(Token::RParen, &mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(inner),
            anonymous,
            range,
        })
    }

    /// Report a missing expression and stand in for it
    fn missing_expression(&mut self) -> Expression {
        self.fail(|range, found| Diagnostic::expected_production(range, "expression", found));
        Expression::Error(ErrorNode::missing(self.missing_range()))
    }

    /// `{ a, b, c }` as a variable initializer, the current token is the `{`.
    /// A trailing comma is allowed, an empty initializer is not.
    pub(super) fn array_initializer(&mut self) -> Expression {
        let mut builder = NodeBuilder::new(NodeKind::ArrayInitializer);
        self.bump_into(&mut builder);

        let mut elements = Vec::new();
        loop {
            if self.at(Token::RBrace) && !elements.is_empty() {
                break;
            }
            let element = self.expression();
            builder.child(element.range());
            let missing = matches!(&element, Expression::Error(e) if e.is_missing());
            if !missing {
                elements.push(element);
            }
            if missing || self.is_recovering() || !self.eat(Token::Comma, &mut builder) {
                break;
            }
        }
        if !self.is_recovering() {
            self.expect(Token::RBrace, &mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        Expression::ArrayInitializer(ArrayInitializer {
            elements,
            anonymous,
            range,
        })
    }
}
