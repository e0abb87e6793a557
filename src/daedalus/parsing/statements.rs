//! Blocks and statements

use super::expressions::starts_expression;
use super::parser::Parser;
use crate::daedalus::ast::diagnostics::Diagnostic;
use crate::daedalus::ast::elements::{
    AssignmentOperator, AssignmentStatement, Block, ErrorNode, Expression, ExpressionStatement,
    IfStatement, ReturnStatement, Statement,
};
use crate::daedalus::ast::syntax::NodeKind;
use crate::daedalus::building::NodeBuilder;
use crate::daedalus::token::Token;

impl<'s> Parser<'s> {
    /// `{ statements }`. Reports and returns a missing block when there is no `{`.
    pub(super) fn block(&mut self) -> Block {
        let mut builder = NodeBuilder::new(NodeKind::Block);
        if !self.expect(Token::LBrace, &mut builder) {
            return Block::missing(self.missing_range());
        }

        let mut statements = Vec::new();
        loop {
            match self.peek() {
                None | Some(Token::RBrace) => break,
                // A declaration that cannot be nested means this block was never closed
                Some(token) if token.is_top_level_only() => break,
                _ => {}
            }

            let start = self.pos;
            if let Some(statement) = self.statement() {
                builder.child(statement.range());
                statements.push(statement);
            }
            if self.is_recovering() || self.pos == start {
                let skipped = match self.synchronize_statement() {
                    Some(node) => Some(node),
                    None if self.pos == start => self.skip_one(),
                    None => None,
                };
                if let Some(node) = skipped {
                    builder.child(&node.range);
                    statements.push(Statement::Error(node));
                }
            }
        }
        self.expect(Token::RBrace, &mut builder);

        let (range, anonymous) = builder.finish(self.missing_range());
        Block {
            statements,
            anonymous,
            range,
        }
    }

    /// One statement, or `None` after reporting a token that cannot start one
    pub(super) fn statement(&mut self) -> Option<Statement> {
        let Some(token) = self.peek() else {
            self.fail(|range, found| Diagnostic::expected_production(range, "statement", found));
            return None;
        };

        let statement = match token {
            Token::If => Statement::If(self.if_statement()),
            Token::Return => Statement::Return(self.return_statement()),
            Token::Var | Token::Const => Statement::Variable(self.variable_declaration()),
            Token::LBrace => Statement::Block(self.block()),
            token if starts_expression(token) => self.expression_statement(),
            _ => {
                self.unexpected("statement");
                return None;
            }
        };
        Some(statement)
    }

    fn if_statement(&mut self) -> IfStatement {
        let mut builder = NodeBuilder::new(NodeKind::IfStatement);
        self.bump_into(&mut builder);

        // `if x {` still parses, the condition just has no parentheses
        if !self.at(Token::LParen) && self.peek().is_some_and(starts_expression) {
            self.report_missing(Token::LParen);
        }
        let condition = self.expression();
        builder.child(condition.range());

        let consequence = self.branch(&mut builder);
        let mut alternative = None;
        if !self.is_recovering() && self.eat(Token::Else, &mut builder) {
            alternative = Some(self.branch(&mut builder));
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        IfStatement {
            condition,
            consequence: Box::new(consequence),
            alternative: alternative.map(Box::new),
            anonymous,
            range,
        }
    }

    /// Consequence or alternative of an `if`: a block, optionally followed by `;`, or a
    /// single statement
    fn branch(&mut self, builder: &mut NodeBuilder) -> Statement {
        if self.is_recovering() {
            return Statement::Error(ErrorNode::missing(self.missing_range()));
        }

        if self.at(Token::LBrace) {
            let block = self.block();
            builder.child(&block.range);
            self.eat(Token::Semicolon, builder);
            return Statement::Block(block);
        }

        match self.statement() {
            Some(statement) => {
                builder.child(statement.range());
                statement
            }
            None => Statement::Error(ErrorNode::missing(self.missing_range())),
        }
    }

    fn return_statement(&mut self) -> ReturnStatement {
        let mut builder = NodeBuilder::new(NodeKind::ReturnStatement);
        self.bump_into(&mut builder);

        let value = match self.peek() {
            Some(token) if starts_expression(token) => {
                let value = self.expression();
                builder.child(value.range());
                Some(value)
            }
            _ => None,
        };
        if !self.is_recovering() {
            self.expect_terminator(&mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        ReturnStatement {
            value,
            anonymous,
            range,
        }
    }

    /// `expr ;` or `lvalue op expr ;`
    fn expression_statement(&mut self) -> Statement {
        let expression = self.expression();

        if !self.is_recovering() && self.peek().is_some_and(|t| t.is_assignment_operator()) {
            return Statement::Assignment(self.assignment(expression));
        }

        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        builder.child(expression.range());
        if !self.is_recovering() {
            self.expect_terminator(&mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        Statement::Expression(ExpressionStatement {
            expression,
            anonymous,
            range,
        })
    }

    /// The rest of an assignment whose target is already parsed. The current token is the
    /// assignment operator, or the point where one is missing.
    pub(super) fn assignment(&mut self, left: Expression) -> AssignmentStatement {
        let mut builder = NodeBuilder::new(NodeKind::AssignmentStatement);
        builder.child(left.range());

        if !left.is_lvalue() && !left.is_error() {
            self.report_invalid_assignment_target(left.range());
        }

        let operator = self.peek().and_then(AssignmentOperator::from_token);
        let (operator, right) = match operator {
            Some(operator) => {
                self.bump_into(&mut builder);
                let right = self.expression();
                builder.child(right.range());
                (operator, right)
            }
            None => {
                self.fail(|range, found| Diagnostic::expected(range, &[Token::Assign], found));
                let right = Expression::Error(ErrorNode::missing(self.missing_range()));
                builder.child(right.range());
                (AssignmentOperator::Assign, right)
            }
        };
        if !self.is_recovering() {
            self.expect_terminator(&mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        AssignmentStatement {
            left,
            operator,
            right,
            anonymous,
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::ast::diagnostics::DiagnosticCode;
    use crate::daedalus::lexing::lex;

    fn parse_block(source: &str) -> (Block, Vec<Diagnostic>) {
        let mut parser = Parser::new(source, lex(source).tokens);
        let block = parser.block();
        (block, parser.into_diagnostics())
    }

    #[test]
    fn test_statement_kinds() {
        let source = "{ x = 1; f(); var int y; return y; { } if (x) y = 2; }";
        let (block, diagnostics) = parse_block(source);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let kinds: Vec<&str> = block
            .statements
            .iter()
            .map(|s| match s {
                Statement::Assignment(_) => "assignment",
                Statement::Expression(_) => "expression",
                Statement::If(_) => "if",
                Statement::Return(_) => "return",
                Statement::Variable(_) => "variable",
                Statement::Block(_) => "block",
                Statement::Error(_) => "error",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["assignment", "expression", "variable", "return", "block", "if"]
        );
        assert_eq!(block.range.span, 0..source.len());
    }

    #[test]
    fn test_compound_assignment() {
        let (block, _) = parse_block("{ hp -= 10; }");
        let Statement::Assignment(assignment) = &block.statements[0] else {
            panic!("expected assignment");
        };
        assert_eq!(assignment.operator, AssignmentOperator::SubtractAssign);
    }

    #[test]
    fn test_invalid_assignment_target_still_builds() {
        let (block, diagnostics) = parse_block("{ f() = 1; }");
        assert!(matches!(block.statements[0], Statement::Assignment(_)));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidAssignmentTarget);
        assert_eq!(diagnostics[0].range.span, 2..5);
    }

    #[test]
    fn test_dangling_else_binds_to_inner_if() {
        let (block, diagnostics) = parse_block("{ if (a) if (b) x(); else y(); }");
        assert!(diagnostics.is_empty());
        let Statement::If(outer) = &block.statements[0] else {
            panic!("expected if");
        };
        assert!(outer.alternative.is_none());
        let Statement::If(inner) = outer.consequence.as_ref() else {
            panic!("expected nested if");
        };
        assert!(inner.alternative.is_some());
    }

    #[test]
    fn test_else_if_chain_with_semicolons() {
        let source = "{ if (a) { x(); } else if (b) { y(); } else { z(); }; }";
        let (block, diagnostics) = parse_block(source);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(block.statements.len(), 1);
        let Statement::If(outer) = &block.statements[0] else {
            panic!("expected if");
        };
        let Some(alternative) = &outer.alternative else {
            panic!("expected alternative");
        };
        assert!(matches!(alternative.as_ref(), Statement::If(_)));
        assert_eq!(outer.range.text(source), "if (a) { x(); } else if (b) { y(); } else { z(); };");
    }

    #[test]
    fn test_missing_semicolon_on_next_line() {
        let (block, diagnostics) = parse_block("{\n  x = 1\n  y = 2;\n}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.span, 9..9);
        assert_eq!(block.statements.len(), 2);
        assert!(block
            .statements
            .iter()
            .all(|s| matches!(s, Statement::Assignment(_))));
    }

    #[test]
    fn test_missing_semicolon_before_statement_on_same_line() {
        let source = "{ x = 1 y = 2; z(); }";
        let (block, diagnostics) = parse_block(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.span, 7..7);
        assert_eq!(block.statements.len(), 3);
        assert_eq!(block.statements[0].range().text(source), "x = 1");
        assert_eq!(block.statements[1].range().text(source), "y = 2;");
        assert!(matches!(block.statements[1], Statement::Assignment(_)));
        assert!(matches!(block.statements[2], Statement::Expression(_)));
    }

    #[test]
    fn test_missing_semicolon_before_keyword_statement() {
        let (block, diagnostics) = parse_block("{ f() return; if (a) g() h(); }");
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(block.statements.len(), 4);
        assert!(matches!(block.statements[1], Statement::Return(_)));
        assert!(matches!(block.statements[3], Statement::Expression(_)));
    }

    #[test]
    fn test_garbage_is_skipped_into_error_node() {
        let source = "{ x = 1 2 3; y = 4; }";
        let (block, diagnostics) = parse_block(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(block.statements.len(), 3);
        let Statement::Error(error) = &block.statements[1] else {
            panic!("expected error node");
        };
        assert_eq!(error.range.text(source), "2 3;");
        assert!(matches!(block.statements[2], Statement::Assignment(_)));
    }

    #[test]
    fn test_lone_semicolon_is_an_error() {
        let (block, diagnostics) = parse_block("{ ; }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "expected statement, found `;`");
        assert!(matches!(block.statements[0], Statement::Error(_)));
    }

    #[test]
    fn test_unclosed_block_stops_at_top_level_keyword() {
        let source = "{ x = 1;\nfunc void f() {}";
        let mut parser = Parser::new(source, lex(source).tokens);
        let block = parser.block();
        assert_eq!(block.statements.len(), 1);
        assert_eq!(parser.peek(), Some(Token::Func));
        assert_eq!(parser.into_diagnostics().len(), 1);
    }

    #[test]
    fn test_condition_without_parentheses() {
        let (block, diagnostics) = parse_block("{ if x { y(); } z(); }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "expected `(`, found identifier");
        assert_eq!(diagnostics[0].range.span, 4..4);
        assert_eq!(block.statements.len(), 2);
        let Statement::If(statement) = &block.statements[0] else {
            panic!("expected if");
        };
        assert!(matches!(statement.condition, Expression::Identifier(_)));
        assert!(matches!(statement.consequence.as_ref(), Statement::Block(_)));
    }

    #[test]
    fn test_condition_starting_with_parentheses() {
        let (_, diagnostics) = parse_block("{ if (a) || (b) { y(); } }");
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }

    #[test]
    fn test_return_without_value() {
        let (block, diagnostics) = parse_block("{ return; }");
        assert!(diagnostics.is_empty());
        let Statement::Return(ret) = &block.statements[0] else {
            panic!("expected return");
        };
        assert!(ret.value.is_none());
    }
}
