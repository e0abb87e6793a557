//! Declaration assertions

use super::check_index;
use super::expressions::{ErrorAssertion, ExpressionAssertion};
use super::statements::{AssignmentAssertion, BlockAssertion};
use crate::daedalus::ast::{
    AstNode, ClassDeclaration, ClassMember, Declaration, FunctionDeclaration, Identifier,
    InstanceDeclaration, Parameter, PrototypeDeclaration, TypeRef, VariableDeclaration,
    VariableKind,
};
use crate::daedalus::testing::matchers::TextMatch;

pub(super) fn assert_name(identifier: &Identifier, expected: &str, context: &str) {
    TextMatch::Exact(expected.to_string()).assert(&identifier.name, &format!("{}.name", context));
}

pub(super) fn assert_type(type_ref: &TypeRef, expected: &str, context: &str) {
    TextMatch::Exact(expected.to_string()).assert(type_ref.name(), &format!("{}.type", context));
}

pub struct DeclarationAssertion<'a> {
    pub(crate) declaration: &'a Declaration,
    pub(crate) context: String,
}

impl<'a> DeclarationAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.declaration.node_type()
        )
    }

    pub fn assert_instance(self) -> InstanceAssertion<'a> {
        match self.declaration {
            Declaration::Instance(instance) => InstanceAssertion {
                instance,
                context: self.context,
            },
            _ => self.mismatch("instance_declaration"),
        }
    }

    pub fn assert_prototype(self) -> PrototypeAssertion<'a> {
        match self.declaration {
            Declaration::Prototype(prototype) => PrototypeAssertion {
                prototype,
                context: self.context,
            },
            _ => self.mismatch("prototype_declaration"),
        }
    }

    pub fn assert_function(self) -> FunctionAssertion<'a> {
        match self.declaration {
            Declaration::Function(function) => FunctionAssertion {
                function,
                context: self.context,
            },
            _ => self.mismatch("function_declaration"),
        }
    }

    pub fn assert_variable(self) -> VariableAssertion<'a> {
        match self.declaration {
            Declaration::Variable(variable) => VariableAssertion {
                variable,
                context: self.context,
            },
            _ => self.mismatch("variable_declaration"),
        }
    }

    pub fn assert_class(self) -> ClassAssertion<'a> {
        match self.declaration {
            Declaration::Class(class) => ClassAssertion {
                class,
                context: self.context,
            },
            _ => self.mismatch("class_declaration"),
        }
    }

    pub fn assert_error(self) -> ErrorAssertion<'a> {
        match self.declaration {
            Declaration::Error(error) => ErrorAssertion {
                error,
                context: self.context,
            },
            _ => self.mismatch("ERROR"),
        }
    }
}

pub struct InstanceAssertion<'a> {
    pub(crate) instance: &'a InstanceDeclaration,
    pub(crate) context: String,
}

impl<'a> InstanceAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_name(&self.instance.name, expected, &self.context);
        self
    }

    pub fn parent(self, expected: &str) -> Self {
        match &self.instance.parent {
            Some(parent) => assert_name(parent, expected, &format!("{}.parent", self.context)),
            None => panic!(
                "{}: Expected parent '{}', found no parent",
                self.context, expected
            ),
        }
        self
    }

    pub fn no_parent(self) -> Self {
        assert!(
            self.instance.parent.is_none(),
            "{}: Expected no parent, found '{}'",
            self.context,
            self.instance.parent.as_ref().map_or("", |p| p.name.as_str())
        );
        self
    }

    /// `instance A(B);` without a body
    pub fn forward(self) -> Self {
        assert!(
            self.instance.is_forward(),
            "{}: Expected a forward declaration, found a body",
            self.context
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let body = self.instance.body.as_ref().unwrap_or_else(|| {
            panic!("{}: Expected a body, found a forward declaration", self.context)
        });
        assertion(BlockAssertion {
            block: body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

pub struct PrototypeAssertion<'a> {
    pub(crate) prototype: &'a PrototypeDeclaration,
    pub(crate) context: String,
}

impl<'a> PrototypeAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_name(&self.prototype.name, expected, &self.context);
        self
    }

    pub fn parent(self, expected: &str) -> Self {
        assert_name(
            &self.prototype.parent,
            expected,
            &format!("{}.parent", self.context),
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion {
            block: &self.prototype.body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

pub struct FunctionAssertion<'a> {
    pub(crate) function: &'a FunctionDeclaration,
    pub(crate) context: String,
}

impl<'a> FunctionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_name(&self.function.name, expected, &self.context);
        self
    }

    pub fn return_type(self, expected: &str) -> Self {
        assert_type(
            &self.function.return_type,
            expected,
            &format!("{}.return", self.context),
        );
        self
    }

    pub fn parameter_count(self, expected: usize) -> Self {
        let actual = self.function.parameters.parameters.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} parameters, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn parameter<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ParameterAssertion<'a>),
    {
        let parameters = &self.function.parameters.parameters;
        check_index(index, parameters.len(), "parameter", &self.context);
        assertion(ParameterAssertion {
            parameter: &parameters[index],
            context: format!("{}.parameters[{}]", self.context, index),
        });
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion {
            block: &self.function.body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

pub struct ParameterAssertion<'a> {
    pub(crate) parameter: &'a Parameter,
    pub(crate) context: String,
}

impl<'a> ParameterAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_name(&self.parameter.name, expected, &self.context);
        self
    }

    pub fn type_name(self, expected: &str) -> Self {
        assert_type(&self.parameter.type_ref, expected, &self.context);
        self
    }

    pub fn qualifier(self, expected: VariableKind) -> Self {
        assert_eq!(
            self.parameter.qualifier,
            Some(expected),
            "{}: Expected qualifier {}",
            self.context,
            expected.as_str()
        );
        self
    }
}

pub struct VariableAssertion<'a> {
    pub(crate) variable: &'a VariableDeclaration,
    pub(crate) context: String,
}

impl<'a> VariableAssertion<'a> {
    fn kind(self, expected: VariableKind) -> Self {
        assert_eq!(
            self.variable.kind,
            expected,
            "{}: Expected a {} declaration, found {}",
            self.context,
            expected.as_str(),
            self.variable.kind.as_str()
        );
        self
    }

    pub fn is_var(self) -> Self {
        self.kind(VariableKind::Var)
    }

    pub fn is_const(self) -> Self {
        self.kind(VariableKind::Const)
    }

    pub fn name(self, expected: &str) -> Self {
        assert_name(&self.variable.name, expected, &self.context);
        self
    }

    pub fn type_name(self, expected: &str) -> Self {
        assert_type(&self.variable.type_ref, expected, &self.context);
        self
    }

    pub fn array(self) -> Self {
        assert!(
            self.variable.is_array(),
            "{}: Expected an array declaration",
            self.context
        );
        self
    }

    pub fn size<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let size = self
            .variable
            .size
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected an array size", self.context));
        assertion(ExpressionAssertion {
            expression: size,
            context: format!("{}.size", self.context),
        });
        self
    }

    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let value = self
            .variable
            .value
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected an initializer", self.context));
        assertion(ExpressionAssertion {
            expression: value,
            context: format!("{}.value", self.context),
        });
        self
    }

    pub fn no_value(self) -> Self {
        assert!(
            self.variable.value.is_none(),
            "{}: Expected no initializer",
            self.context
        );
        self
    }
}

pub struct ClassAssertion<'a> {
    pub(crate) class: &'a ClassDeclaration,
    pub(crate) context: String,
}

impl<'a> ClassAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_name(&self.class.name, expected, &self.context);
        self
    }

    pub fn member_count(self, expected: usize) -> Self {
        let actual = self.class.body.members.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} members, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn member<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ClassMemberAssertion<'a>),
    {
        let members = &self.class.body.members;
        check_index(index, members.len(), "member", &self.context);
        assertion(ClassMemberAssertion {
            member: &members[index],
            context: format!("{}.members[{}]", self.context, index),
        });
        self
    }
}

pub struct ClassMemberAssertion<'a> {
    pub(crate) member: &'a ClassMember,
    pub(crate) context: String,
}

impl<'a> ClassMemberAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.member.node_type()
        )
    }

    pub fn assert_variable(self) -> VariableAssertion<'a> {
        match self.member {
            ClassMember::Variable(variable) => VariableAssertion {
                variable,
                context: self.context,
            },
            _ => self.mismatch("variable_declaration"),
        }
    }

    pub fn assert_assignment(self) -> AssignmentAssertion<'a> {
        match self.member {
            ClassMember::Assignment(assignment) => AssignmentAssertion {
                assignment,
                context: self.context,
            },
            _ => self.mismatch("assignment_statement"),
        }
    }

    pub fn assert_error(self) -> ErrorAssertion<'a> {
        match self.member {
            ClassMember::Error(error) => ErrorAssertion {
                error,
                context: self.context,
            },
            _ => self.mismatch("ERROR"),
        }
    }
}
