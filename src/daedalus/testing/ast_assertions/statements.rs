//! Statement and block assertions

use super::declarations::VariableAssertion;
use super::expressions::{ErrorAssertion, ExpressionAssertion};
use super::{check_index, summarize};
use crate::daedalus::ast::{
    AssignmentOperator, AssignmentStatement, AstNode, Block, IfStatement, ReturnStatement,
    Statement,
};

pub struct BlockAssertion<'a> {
    pub(crate) block: &'a Block,
    pub(crate) context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.block.statements.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} statements, found {} statements: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.block.statements.iter().map(|s| s.syntax()))
        );
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        let statements = &self.block.statements;
        check_index(index, statements.len(), "statement", &self.context);
        assertion(StatementAssertion {
            statement: &statements[index],
            context: format!("{}.statements[{}]", self.context, index),
        });
        self
    }

    /// The block stands in for a body absent from the source
    pub fn missing(self) -> Self {
        assert!(
            self.block.is_missing(),
            "{}: Expected a missing block",
            self.context
        );
        self
    }
}

pub struct StatementAssertion<'a> {
    pub(crate) statement: &'a Statement,
    pub(crate) context: String,
}

impl<'a> StatementAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.statement.node_type()
        )
    }

    pub fn assert_assignment(self) -> AssignmentAssertion<'a> {
        match self.statement {
            Statement::Assignment(assignment) => AssignmentAssertion {
                assignment,
                context: self.context,
            },
            _ => self.mismatch("assignment_statement"),
        }
    }

    /// Unwraps an expression statement down to its expression
    pub fn assert_expression(self) -> ExpressionAssertion<'a> {
        match self.statement {
            Statement::Expression(statement) => ExpressionAssertion {
                expression: &statement.expression,
                context: format!("{}.expression", self.context),
            },
            _ => self.mismatch("expression_statement"),
        }
    }

    pub fn assert_if(self) -> IfAssertion<'a> {
        match self.statement {
            Statement::If(statement) => IfAssertion {
                statement,
                context: self.context,
            },
            _ => self.mismatch("if_statement"),
        }
    }

    pub fn assert_return(self) -> ReturnAssertion<'a> {
        match self.statement {
            Statement::Return(statement) => ReturnAssertion {
                statement,
                context: self.context,
            },
            _ => self.mismatch("return_statement"),
        }
    }

    pub fn assert_variable(self) -> VariableAssertion<'a> {
        match self.statement {
            Statement::Variable(variable) => VariableAssertion {
                variable,
                context: self.context,
            },
            _ => self.mismatch("variable_declaration"),
        }
    }

    pub fn assert_block(self) -> BlockAssertion<'a> {
        match self.statement {
            Statement::Block(block) => BlockAssertion {
                block,
                context: self.context,
            },
            _ => self.mismatch("block"),
        }
    }

    pub fn assert_error(self) -> ErrorAssertion<'a> {
        match self.statement {
            Statement::Error(error) => ErrorAssertion {
                error,
                context: self.context,
            },
            _ => self.mismatch("ERROR"),
        }
    }
}

pub struct AssignmentAssertion<'a> {
    pub(crate) assignment: &'a AssignmentStatement,
    pub(crate) context: String,
}

impl<'a> AssignmentAssertion<'a> {
    pub fn operator(self, expected: AssignmentOperator) -> Self {
        assert_eq!(
            self.assignment.operator,
            expected,
            "{}: Expected operator {}, found {}",
            self.context,
            expected.as_str(),
            self.assignment.operator.as_str()
        );
        self
    }

    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expression: &self.assignment.left,
            context: format!("{}.left", self.context),
        });
        self
    }

    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expression: &self.assignment.right,
            context: format!("{}.right", self.context),
        });
        self
    }
}

pub struct IfAssertion<'a> {
    pub(crate) statement: &'a IfStatement,
    pub(crate) context: String,
}

impl<'a> IfAssertion<'a> {
    pub fn condition<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expression: &self.statement.condition,
            context: format!("{}.condition", self.context),
        });
        self
    }

    pub fn consequence<F>(self, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assertion(StatementAssertion {
            statement: &self.statement.consequence,
            context: format!("{}.consequence", self.context),
        });
        self
    }

    pub fn alternative<F>(self, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        let alternative = self
            .statement
            .alternative
            .as_deref()
            .unwrap_or_else(|| panic!("{}: Expected an else branch", self.context));
        assertion(StatementAssertion {
            statement: alternative,
            context: format!("{}.alternative", self.context),
        });
        self
    }

    pub fn no_alternative(self) -> Self {
        assert!(
            self.statement.alternative.is_none(),
            "{}: Expected no else branch",
            self.context
        );
        self
    }
}

pub struct ReturnAssertion<'a> {
    pub(crate) statement: &'a ReturnStatement,
    pub(crate) context: String,
}

impl<'a> ReturnAssertion<'a> {
    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let value = self
            .statement
            .value
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a return value", self.context));
        assertion(ExpressionAssertion {
            expression: value,
            context: format!("{}.value", self.context),
        });
        self
    }

    pub fn no_value(self) -> Self {
        assert!(
            self.statement.value.is_none(),
            "{}: Expected a bare return",
            self.context
        );
        self
    }
}
