//! Expression assertions

use super::check_index;
use super::declarations::assert_name;
use crate::daedalus::ast::{
    ArrayAccess, ArrayInitializer, AstNode, BinaryExpression, CallExpression, ErrorNode,
    Expression, MemberAccess, UnaryExpression,
};
use crate::daedalus::formats::node_to_sexp;
use crate::daedalus::testing::matchers::TextMatch;

pub struct ExpressionAssertion<'a> {
    pub(crate) expression: &'a Expression,
    pub(crate) context: String,
}

impl<'a> ExpressionAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.expression.node_type()
        )
    }

    /// Compare the expression against its S-expression rendering
    pub fn sexp(self, expected: &str) -> Self {
        let actual = node_to_sexp(self.expression.syntax());
        assert_eq!(actual, expected, "{}: S-expression mismatch", self.context);
        self
    }

    pub fn identifier(self, expected: &str) -> Self {
        match self.expression {
            Expression::Identifier(identifier) => {
                assert_name(identifier, expected, &self.context);
                self
            }
            _ => self.mismatch("identifier"),
        }
    }

    /// Number literal, compared by its source text
    pub fn number(self, expected: &str) -> Self {
        match self.expression {
            Expression::Number(number) => {
                TextMatch::Exact(expected.to_string()).assert(&number.text, &self.context);
                self
            }
            _ => self.mismatch("number"),
        }
    }

    /// String literal, compared by its decoded value
    pub fn string(self, expected: &str) -> Self {
        match self.expression {
            Expression::String(string) => {
                TextMatch::Exact(expected.to_string()).assert(&string.value(), &self.context);
                self
            }
            _ => self.mismatch("string"),
        }
    }

    pub fn boolean(self, expected: bool) -> Self {
        match self.expression {
            Expression::Boolean(boolean) => {
                assert_eq!(
                    boolean.value, expected,
                    "{}: Expected {}, found {}",
                    self.context, expected, boolean.value
                );
                self
            }
            _ => self.mismatch("boolean"),
        }
    }

    /// An empty error node standing in for an expression absent from the source
    pub fn missing(self) -> Self {
        match self.expression {
            Expression::Error(error) if error.is_missing() => self,
            _ => self.mismatch("a missing expression"),
        }
    }

    pub fn assert_error(self) -> ErrorAssertion<'a> {
        match self.expression {
            Expression::Error(error) => ErrorAssertion {
                error,
                context: self.context,
            },
            _ => self.mismatch("ERROR"),
        }
    }

    pub fn assert_binary(self, operator: &str) -> BinaryAssertion<'a> {
        match self.expression {
            Expression::Binary(binary) => {
                TextMatch::Exact(operator.to_string())
                    .assert(binary.operator.as_str(), &format!("{}.operator", self.context));
                BinaryAssertion {
                    binary,
                    context: self.context,
                }
            }
            _ => self.mismatch("binary_expression"),
        }
    }

    pub fn assert_unary(self, operator: &str) -> UnaryAssertion<'a> {
        match self.expression {
            Expression::Unary(unary) => {
                TextMatch::Exact(operator.to_string())
                    .assert(unary.operator.as_str(), &format!("{}.operator", self.context));
                UnaryAssertion {
                    unary,
                    context: self.context,
                }
            }
            _ => self.mismatch("unary_expression"),
        }
    }

    pub fn assert_call(self) -> CallAssertion<'a> {
        match self.expression {
            Expression::Call(call) => CallAssertion {
                call,
                context: self.context,
            },
            _ => self.mismatch("call_expression"),
        }
    }

    pub fn assert_member_access(self) -> MemberAccessAssertion<'a> {
        match self.expression {
            Expression::MemberAccess(access) => MemberAccessAssertion {
                access,
                context: self.context,
            },
            _ => self.mismatch("member_access"),
        }
    }

    pub fn assert_array_access(self) -> ArrayAccessAssertion<'a> {
        match self.expression {
            Expression::ArrayAccess(access) => ArrayAccessAssertion {
                access,
                context: self.context,
            },
            _ => self.mismatch("array_access"),
        }
    }

    /// Unwraps `( ... )` down to the inner expression
    pub fn assert_parenthesized(self) -> ExpressionAssertion<'a> {
        match self.expression {
            Expression::Parenthesized(parenthesized) => ExpressionAssertion {
                expression: &parenthesized.expression,
                context: format!("{}.expression", self.context),
            },
            _ => self.mismatch("parenthesized_expression"),
        }
    }

    pub fn assert_initializer(self) -> InitializerAssertion<'a> {
        match self.expression {
            Expression::ArrayInitializer(initializer) => InitializerAssertion {
                initializer,
                context: self.context,
            },
            _ => self.mismatch("array_initializer"),
        }
    }
}

fn descend<'a, F>(expression: &'a Expression, context: String, assertion: F)
where
    F: FnOnce(ExpressionAssertion<'a>),
{
    assertion(ExpressionAssertion {
        expression,
        context,
    });
}

pub struct BinaryAssertion<'a> {
    pub(crate) binary: &'a BinaryExpression,
    pub(crate) context: String,
}

impl<'a> BinaryAssertion<'a> {
    pub fn left<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.binary.left, format!("{}.left", self.context), assertion);
        self
    }

    pub fn right<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.binary.right, format!("{}.right", self.context), assertion);
        self
    }
}

pub struct UnaryAssertion<'a> {
    pub(crate) unary: &'a UnaryExpression,
    pub(crate) context: String,
}

impl<'a> UnaryAssertion<'a> {
    pub fn operand<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.unary.operand, format!("{}.operand", self.context), assertion);
        self
    }
}

pub struct CallAssertion<'a> {
    pub(crate) call: &'a CallExpression,
    pub(crate) context: String,
}

impl<'a> CallAssertion<'a> {
    /// Shorthand for a call whose callee is a plain identifier
    pub fn callee(self, expected: &str) -> Self {
        match &*self.call.function {
            Expression::Identifier(identifier) => {
                assert_name(identifier, expected, &format!("{}.function", self.context))
            }
            other => panic!(
                "{}.function: Expected identifier, found {}",
                self.context,
                other.node_type()
            ),
        }
        self
    }

    pub fn function<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.call.function, format!("{}.function", self.context), assertion);
        self
    }

    pub fn argument_count(self, expected: usize) -> Self {
        let actual = self.call.arguments.arguments.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} arguments, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn argument<F: FnOnce(ExpressionAssertion<'a>)>(self, index: usize, assertion: F) -> Self {
        let arguments = &self.call.arguments.arguments;
        check_index(index, arguments.len(), "argument", &self.context);
        descend(
            &arguments[index],
            format!("{}.arguments[{}]", self.context, index),
            assertion,
        );
        self
    }
}

pub struct MemberAccessAssertion<'a> {
    pub(crate) access: &'a MemberAccess,
    pub(crate) context: String,
}

impl<'a> MemberAccessAssertion<'a> {
    pub fn member(self, expected: &str) -> Self {
        assert_name(&self.access.member, expected, &format!("{}.member", self.context));
        self
    }

    pub fn object<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.access.object, format!("{}.object", self.context), assertion);
        self
    }
}

pub struct ArrayAccessAssertion<'a> {
    pub(crate) access: &'a ArrayAccess,
    pub(crate) context: String,
}

impl<'a> ArrayAccessAssertion<'a> {
    pub fn array<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.access.array, format!("{}.array", self.context), assertion);
        self
    }

    pub fn index<F: FnOnce(ExpressionAssertion<'a>)>(self, assertion: F) -> Self {
        descend(&self.access.index, format!("{}.index", self.context), assertion);
        self
    }
}

pub struct InitializerAssertion<'a> {
    pub(crate) initializer: &'a ArrayInitializer,
    pub(crate) context: String,
}

impl<'a> InitializerAssertion<'a> {
    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.initializer.elements.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} elements, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn element<F: FnOnce(ExpressionAssertion<'a>)>(self, index: usize, assertion: F) -> Self {
        let elements = &self.initializer.elements;
        check_index(index, elements.len(), "element", &self.context);
        descend(
            &elements[index],
            format!("{}.elements[{}]", self.context, index),
            assertion,
        );
        self
    }
}

/// Error nodes, either holding skipped tokens or standing in for a missing node
pub struct ErrorAssertion<'a> {
    pub(crate) error: &'a ErrorNode,
    pub(crate) context: String,
}

impl<'a> ErrorAssertion<'a> {
    pub fn skipped_count(self, expected: usize) -> Self {
        let actual = self.error.skipped.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} skipped tokens, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Compare the source text covered by the error node
    pub fn text(self, source: &str, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.error.range.text(source), &self.context);
        self
    }

    pub fn missing(self) -> Self {
        assert!(
            self.error.is_missing(),
            "{}: Expected a missing node, found {} skipped tokens",
            self.context,
            self.error.skipped.len()
        );
        self
    }
}
