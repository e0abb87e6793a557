//! Uniform, name based view of the tree
//!
//!     The typed structs in [elements](super::elements) are convenient when the shape of a
//!     node is known. Tooling that walks arbitrary trees (formatters, highlighters, the output
//!     formats in this crate) uses [SyntaxNode] instead: a borrowed, `Copy` handle that
//!     exposes every node through the same small interface:
//!
//!         - `kind()`: the production, see [NodeKind].
//!         - `fields()`: named children in source order. List fields repeat their name.
//!         - `field(name)`: first child stored under a field name, `None` when absent.
//!         - `anonymous()`: keywords, punctuation and operators owned by the node.
//!
//! Field Schema
//!
//!     Every kind has a fixed set of field names, see [NodeKind::field_names]. Optional parts
//!     that are absent in the source simply do not appear: an `if` without `else` still has
//!     `alternative` in its schema, but `field(FieldName::Alternative)` returns `None`.
//!
//! Names
//!
//!     Kind and field names follow the conventions of tree-sitter grammars (`if_statement`,
//!     `return_type`, `ERROR`) so that queries written against those read naturally.

use super::elements::*;
use super::range::Range;
use super::traits::Visitor;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Program,
    InstanceDeclaration,
    PrototypeDeclaration,
    FunctionDeclaration,
    ParameterList,
    Parameter,
    VariableDeclaration,
    ClassDeclaration,
    ClassBody,
    Block,
    AssignmentStatement,
    ExpressionStatement,
    IfStatement,
    ReturnStatement,
    BinaryExpression,
    UnaryExpression,
    ArrayAccess,
    MemberAccess,
    CallExpression,
    ArgumentList,
    ParenthesizedExpression,
    ArrayInitializer,
    Identifier,
    Type,
    Number,
    String,
    Boolean,
    #[serde(rename = "ERROR")]
    Error,
}

impl NodeKind {
    pub const ALL: [NodeKind; 28] = [
        NodeKind::Program,
        NodeKind::InstanceDeclaration,
        NodeKind::PrototypeDeclaration,
        NodeKind::FunctionDeclaration,
        NodeKind::ParameterList,
        NodeKind::Parameter,
        NodeKind::VariableDeclaration,
        NodeKind::ClassDeclaration,
        NodeKind::ClassBody,
        NodeKind::Block,
        NodeKind::AssignmentStatement,
        NodeKind::ExpressionStatement,
        NodeKind::IfStatement,
        NodeKind::ReturnStatement,
        NodeKind::BinaryExpression,
        NodeKind::UnaryExpression,
        NodeKind::ArrayAccess,
        NodeKind::MemberAccess,
        NodeKind::CallExpression,
        NodeKind::ArgumentList,
        NodeKind::ParenthesizedExpression,
        NodeKind::ArrayInitializer,
        NodeKind::Identifier,
        NodeKind::Type,
        NodeKind::Number,
        NodeKind::String,
        NodeKind::Boolean,
        NodeKind::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::InstanceDeclaration => "instance_declaration",
            NodeKind::PrototypeDeclaration => "prototype_declaration",
            NodeKind::FunctionDeclaration => "function_declaration",
            NodeKind::ParameterList => "parameter_list",
            NodeKind::Parameter => "parameter",
            NodeKind::VariableDeclaration => "variable_declaration",
            NodeKind::ClassDeclaration => "class_declaration",
            NodeKind::ClassBody => "class_body",
            NodeKind::Block => "block",
            NodeKind::AssignmentStatement => "assignment_statement",
            NodeKind::ExpressionStatement => "expression_statement",
            NodeKind::IfStatement => "if_statement",
            NodeKind::ReturnStatement => "return_statement",
            NodeKind::BinaryExpression => "binary_expression",
            NodeKind::UnaryExpression => "unary_expression",
            NodeKind::ArrayAccess => "array_access",
            NodeKind::MemberAccess => "member_access",
            NodeKind::CallExpression => "call_expression",
            NodeKind::ArgumentList => "argument_list",
            NodeKind::ParenthesizedExpression => "parenthesized_expression",
            NodeKind::ArrayInitializer => "array_initializer",
            NodeKind::Identifier => "identifier",
            NodeKind::Type => "type",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Boolean => "boolean",
            NodeKind::Error => "ERROR",
        }
    }

    /// The fixed field schema of this kind, in source order
    pub fn field_names(&self) -> &'static [FieldName] {
        use FieldName as F;
        match self {
            NodeKind::Program => &[F::Declarations],
            NodeKind::InstanceDeclaration => &[F::Name, F::Parent, F::Body],
            NodeKind::PrototypeDeclaration => &[F::Name, F::Parent, F::Body],
            NodeKind::FunctionDeclaration => &[F::ReturnType, F::Name, F::Parameters, F::Body],
            NodeKind::ParameterList => &[F::Parameters],
            NodeKind::Parameter => &[F::Type, F::Name],
            NodeKind::VariableDeclaration => &[F::Type, F::Name, F::Size, F::Value],
            NodeKind::ClassDeclaration => &[F::Name, F::Body],
            NodeKind::ClassBody => &[F::Members],
            NodeKind::Block => &[F::Statements],
            NodeKind::AssignmentStatement => &[F::Left, F::Right],
            NodeKind::ExpressionStatement => &[F::Expression],
            NodeKind::IfStatement => &[F::Condition, F::Consequence, F::Alternative],
            NodeKind::ReturnStatement => &[F::Value],
            NodeKind::BinaryExpression => &[F::Left, F::Right],
            NodeKind::UnaryExpression => &[F::Operand],
            NodeKind::ArrayAccess => &[F::Array, F::Index],
            NodeKind::MemberAccess => &[F::Object, F::Member],
            NodeKind::CallExpression => &[F::Function, F::Arguments],
            NodeKind::ArgumentList => &[F::Arguments],
            NodeKind::ParenthesizedExpression => &[F::Expression],
            NodeKind::ArrayInitializer => &[F::Elements],
            NodeKind::Identifier
            | NodeKind::Type
            | NodeKind::Number
            | NodeKind::String
            | NodeKind::Boolean
            | NodeKind::Error => &[],
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::InstanceDeclaration
                | NodeKind::PrototypeDeclaration
                | NodeKind::FunctionDeclaration
                | NodeKind::VariableDeclaration
                | NodeKind::ClassDeclaration
        )
    }

    /// Single-token kinds
    pub fn is_leaf(&self) -> bool {
        self.field_names().is_empty() && *self != NodeKind::Error
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Declarations,
    Name,
    Parent,
    Body,
    ReturnType,
    Parameters,
    Type,
    Size,
    Value,
    Members,
    Statements,
    Left,
    Right,
    Expression,
    Condition,
    Consequence,
    Alternative,
    Operand,
    Array,
    Index,
    Object,
    Member,
    Function,
    Arguments,
    Elements,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Declarations => "declarations",
            FieldName::Name => "name",
            FieldName::Parent => "parent",
            FieldName::Body => "body",
            FieldName::ReturnType => "return_type",
            FieldName::Parameters => "parameters",
            FieldName::Type => "type",
            FieldName::Size => "size",
            FieldName::Value => "value",
            FieldName::Members => "members",
            FieldName::Statements => "statements",
            FieldName::Left => "left",
            FieldName::Right => "right",
            FieldName::Expression => "expression",
            FieldName::Condition => "condition",
            FieldName::Consequence => "consequence",
            FieldName::Alternative => "alternative",
            FieldName::Operand => "operand",
            FieldName::Array => "array",
            FieldName::Index => "index",
            FieldName::Object => "object",
            FieldName::Member => "member",
            FieldName::Function => "function",
            FieldName::Arguments => "arguments",
            FieldName::Elements => "elements",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed handle to any node of the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyntaxNode<'a> {
    Program(&'a Program),
    Instance(&'a InstanceDeclaration),
    Prototype(&'a PrototypeDeclaration),
    Function(&'a FunctionDeclaration),
    ParameterList(&'a ParameterList),
    Parameter(&'a Parameter),
    Variable(&'a VariableDeclaration),
    Class(&'a ClassDeclaration),
    ClassBody(&'a ClassBody),
    Block(&'a Block),
    Assignment(&'a AssignmentStatement),
    ExpressionStatement(&'a ExpressionStatement),
    If(&'a IfStatement),
    Return(&'a ReturnStatement),
    Binary(&'a BinaryExpression),
    Unary(&'a UnaryExpression),
    ArrayAccess(&'a ArrayAccess),
    MemberAccess(&'a MemberAccess),
    Call(&'a CallExpression),
    ArgumentList(&'a ArgumentList),
    Parenthesized(&'a ParenthesizedExpression),
    ArrayInitializer(&'a ArrayInitializer),
    Identifier(&'a Identifier),
    Type(&'a TypeRef),
    Number(&'a NumberLiteral),
    String(&'a StringLiteral),
    Boolean(&'a BooleanLiteral),
    Error(&'a ErrorNode),
}

impl<'a> SyntaxNode<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Program(_) => NodeKind::Program,
            SyntaxNode::Instance(_) => NodeKind::InstanceDeclaration,
            SyntaxNode::Prototype(_) => NodeKind::PrototypeDeclaration,
            SyntaxNode::Function(_) => NodeKind::FunctionDeclaration,
            SyntaxNode::ParameterList(_) => NodeKind::ParameterList,
            SyntaxNode::Parameter(_) => NodeKind::Parameter,
            SyntaxNode::Variable(_) => NodeKind::VariableDeclaration,
            SyntaxNode::Class(_) => NodeKind::ClassDeclaration,
            SyntaxNode::ClassBody(_) => NodeKind::ClassBody,
            SyntaxNode::Block(_) => NodeKind::Block,
            SyntaxNode::Assignment(_) => NodeKind::AssignmentStatement,
            SyntaxNode::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            SyntaxNode::If(_) => NodeKind::IfStatement,
            SyntaxNode::Return(_) => NodeKind::ReturnStatement,
            SyntaxNode::Binary(_) => NodeKind::BinaryExpression,
            SyntaxNode::Unary(_) => NodeKind::UnaryExpression,
            SyntaxNode::ArrayAccess(_) => NodeKind::ArrayAccess,
            SyntaxNode::MemberAccess(_) => NodeKind::MemberAccess,
            SyntaxNode::Call(_) => NodeKind::CallExpression,
            SyntaxNode::ArgumentList(_) => NodeKind::ArgumentList,
            SyntaxNode::Parenthesized(_) => NodeKind::ParenthesizedExpression,
            SyntaxNode::ArrayInitializer(_) => NodeKind::ArrayInitializer,
            SyntaxNode::Identifier(_) => NodeKind::Identifier,
            SyntaxNode::Type(_) => NodeKind::Type,
            SyntaxNode::Number(_) => NodeKind::Number,
            SyntaxNode::String(_) => NodeKind::String,
            SyntaxNode::Boolean(_) => NodeKind::Boolean,
            SyntaxNode::Error(_) => NodeKind::Error,
        }
    }

    pub fn range(&self) -> &'a Range {
        match *self {
            SyntaxNode::Program(n) => &n.range,
            SyntaxNode::Instance(n) => &n.range,
            SyntaxNode::Prototype(n) => &n.range,
            SyntaxNode::Function(n) => &n.range,
            SyntaxNode::ParameterList(n) => &n.range,
            SyntaxNode::Parameter(n) => &n.range,
            SyntaxNode::Variable(n) => &n.range,
            SyntaxNode::Class(n) => &n.range,
            SyntaxNode::ClassBody(n) => &n.range,
            SyntaxNode::Block(n) => &n.range,
            SyntaxNode::Assignment(n) => &n.range,
            SyntaxNode::ExpressionStatement(n) => &n.range,
            SyntaxNode::If(n) => &n.range,
            SyntaxNode::Return(n) => &n.range,
            SyntaxNode::Binary(n) => &n.range,
            SyntaxNode::Unary(n) => &n.range,
            SyntaxNode::ArrayAccess(n) => &n.range,
            SyntaxNode::MemberAccess(n) => &n.range,
            SyntaxNode::Call(n) => &n.range,
            SyntaxNode::ArgumentList(n) => &n.range,
            SyntaxNode::Parenthesized(n) => &n.range,
            SyntaxNode::ArrayInitializer(n) => &n.range,
            SyntaxNode::Identifier(n) => &n.range,
            SyntaxNode::Type(n) => &n.range,
            SyntaxNode::Number(n) => &n.range,
            SyntaxNode::String(n) => &n.range,
            SyntaxNode::Boolean(n) => &n.range,
            SyntaxNode::Error(n) => &n.range,
        }
    }

    /// Keywords, punctuation and operators owned by this node. For error nodes these are the
    /// skipped tokens.
    pub fn anonymous(&self) -> &'a [Anonymous] {
        match *self {
            SyntaxNode::Program(_) => &[],
            SyntaxNode::Instance(n) => &n.anonymous,
            SyntaxNode::Prototype(n) => &n.anonymous,
            SyntaxNode::Function(n) => &n.anonymous,
            SyntaxNode::ParameterList(n) => &n.anonymous,
            SyntaxNode::Parameter(n) => &n.anonymous,
            SyntaxNode::Variable(n) => &n.anonymous,
            SyntaxNode::Class(n) => &n.anonymous,
            SyntaxNode::ClassBody(n) => &n.anonymous,
            SyntaxNode::Block(n) => &n.anonymous,
            SyntaxNode::Assignment(n) => &n.anonymous,
            SyntaxNode::ExpressionStatement(n) => &n.anonymous,
            SyntaxNode::If(n) => &n.anonymous,
            SyntaxNode::Return(n) => &n.anonymous,
            SyntaxNode::Binary(n) => &n.anonymous,
            SyntaxNode::Unary(n) => &n.anonymous,
            SyntaxNode::ArrayAccess(n) => &n.anonymous,
            SyntaxNode::MemberAccess(n) => &n.anonymous,
            SyntaxNode::Call(n) => &n.anonymous,
            SyntaxNode::ArgumentList(n) => &n.anonymous,
            SyntaxNode::Parenthesized(n) => &n.anonymous,
            SyntaxNode::ArrayInitializer(n) => &n.anonymous,
            SyntaxNode::Error(n) => &n.skipped,
            SyntaxNode::Identifier(_)
            | SyntaxNode::Type(_)
            | SyntaxNode::Number(_)
            | SyntaxNode::String(_)
            | SyntaxNode::Boolean(_) => &[],
        }
    }

    /// Named children in source order
    pub fn fields(&self) -> Vec<(FieldName, SyntaxNode<'a>)> {
        use FieldName as F;
        let mut fields: Vec<(FieldName, SyntaxNode<'a>)> = Vec::new();

        match *self {
            SyntaxNode::Program(n) => {
                fields.extend(
                    n.declarations
                        .iter()
                        .map(|d| (F::Declarations, SyntaxNode::from(d))),
                );
            }
            SyntaxNode::Instance(n) => {
                fields.push((F::Name, SyntaxNode::Identifier(&n.name)));
                if let Some(parent) = &n.parent {
                    fields.push((F::Parent, SyntaxNode::Identifier(parent)));
                }
                if let Some(body) = &n.body {
                    fields.push((F::Body, SyntaxNode::Block(body)));
                }
            }
            SyntaxNode::Prototype(n) => {
                fields.push((F::Name, SyntaxNode::Identifier(&n.name)));
                fields.push((F::Parent, SyntaxNode::Identifier(&n.parent)));
                fields.push((F::Body, SyntaxNode::Block(&n.body)));
            }
            SyntaxNode::Function(n) => {
                fields.push((F::ReturnType, SyntaxNode::Type(&n.return_type)));
                fields.push((F::Name, SyntaxNode::Identifier(&n.name)));
                fields.push((F::Parameters, SyntaxNode::ParameterList(&n.parameters)));
                fields.push((F::Body, SyntaxNode::Block(&n.body)));
            }
            SyntaxNode::ParameterList(n) => {
                fields.extend(
                    n.parameters
                        .iter()
                        .map(|p| (F::Parameters, SyntaxNode::Parameter(p))),
                );
            }
            SyntaxNode::Parameter(n) => {
                fields.push((F::Type, SyntaxNode::Type(&n.type_ref)));
                fields.push((F::Name, SyntaxNode::Identifier(&n.name)));
            }
            SyntaxNode::Variable(n) => {
                fields.push((F::Type, SyntaxNode::Type(&n.type_ref)));
                fields.push((F::Name, SyntaxNode::Identifier(&n.name)));
                if let Some(size) = &n.size {
                    fields.push((F::Size, SyntaxNode::from(size)));
                }
                if let Some(value) = &n.value {
                    fields.push((F::Value, SyntaxNode::from(value)));
                }
            }
            SyntaxNode::Class(n) => {
                fields.push((F::Name, SyntaxNode::Identifier(&n.name)));
                fields.push((F::Body, SyntaxNode::ClassBody(&n.body)));
            }
            SyntaxNode::ClassBody(n) => {
                fields.extend(
                    n.members
                        .iter()
                        .map(|m| (F::Members, SyntaxNode::from(m))),
                );
            }
            SyntaxNode::Block(n) => {
                fields.extend(
                    n.statements
                        .iter()
                        .map(|s| (F::Statements, SyntaxNode::from(s))),
                );
            }
            SyntaxNode::Assignment(n) => {
                fields.push((F::Left, SyntaxNode::from(&n.left)));
                fields.push((F::Right, SyntaxNode::from(&n.right)));
            }
            SyntaxNode::ExpressionStatement(n) => {
                fields.push((F::Expression, SyntaxNode::from(&n.expression)));
            }
            SyntaxNode::If(n) => {
                fields.push((F::Condition, SyntaxNode::from(&n.condition)));
                fields.push((F::Consequence, SyntaxNode::from(&*n.consequence)));
                if let Some(alternative) = &n.alternative {
                    fields.push((F::Alternative, SyntaxNode::from(&**alternative)));
                }
            }
            SyntaxNode::Return(n) => {
                if let Some(value) = &n.value {
                    fields.push((F::Value, SyntaxNode::from(value)));
                }
            }
            SyntaxNode::Binary(n) => {
                fields.push((F::Left, SyntaxNode::from(&*n.left)));
                fields.push((F::Right, SyntaxNode::from(&*n.right)));
            }
            SyntaxNode::Unary(n) => {
                fields.push((F::Operand, SyntaxNode::from(&*n.operand)));
            }
            SyntaxNode::ArrayAccess(n) => {
                fields.push((F::Array, SyntaxNode::from(&*n.array)));
                fields.push((F::Index, SyntaxNode::from(&*n.index)));
            }
            SyntaxNode::MemberAccess(n) => {
                fields.push((F::Object, SyntaxNode::from(&*n.object)));
                fields.push((F::Member, SyntaxNode::Identifier(&n.member)));
            }
            SyntaxNode::Call(n) => {
                fields.push((F::Function, SyntaxNode::from(&*n.function)));
                fields.push((F::Arguments, SyntaxNode::ArgumentList(&n.arguments)));
            }
            SyntaxNode::ArgumentList(n) => {
                fields.extend(
                    n.arguments
                        .iter()
                        .map(|a| (F::Arguments, SyntaxNode::from(a))),
                );
            }
            SyntaxNode::Parenthesized(n) => {
                fields.push((F::Expression, SyntaxNode::from(&*n.expression)));
            }
            SyntaxNode::ArrayInitializer(n) => {
                fields.extend(
                    n.elements
                        .iter()
                        .map(|e| (F::Elements, SyntaxNode::from(e))),
                );
            }
            SyntaxNode::Identifier(_)
            | SyntaxNode::Type(_)
            | SyntaxNode::Number(_)
            | SyntaxNode::String(_)
            | SyntaxNode::Boolean(_)
            | SyntaxNode::Error(_) => {}
        }

        fields
    }

    /// The first child stored under `name`, `None` when the field is absent
    pub fn field(&self, name: FieldName) -> Option<SyntaxNode<'a>> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, node)| node)
    }

    /// Every child stored under `name`, for list fields
    pub fn children_by_field(&self, name: FieldName) -> Vec<SyntaxNode<'a>> {
        self.fields()
            .into_iter()
            .filter(|(field, _)| *field == name)
            .map(|(_, node)| node)
            .collect()
    }

    pub fn named_children(&self) -> Vec<SyntaxNode<'a>> {
        self.fields().into_iter().map(|(_, node)| node).collect()
    }

    /// The exact source text of this node
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.range().text(source)
    }

    /// This node and everything below it, in pre-order
    pub fn descendants(&self) -> Vec<SyntaxNode<'a>> {
        let mut out = Vec::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            out.push(node);
            let mut children = node.named_children();
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// Walk the subtree depth first, calling `visit` on the way down and `leave` on the way
    /// up. Recursion depth follows the nesting of the tree.
    pub fn accept(&self, visitor: &mut dyn Visitor<'a>) {
        visitor.visit(*self);
        for child in self.named_children() {
            child.accept(visitor);
        }
        visitor.leave(*self);
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SyntaxNode::Error(_))
    }

    /// Empty stand-ins for mandatory children absent from the source
    pub fn is_missing(&self) -> bool {
        match self {
            SyntaxNode::Identifier(n) => n.is_missing(),
            SyntaxNode::Type(n) => n.is_missing(),
            SyntaxNode::Error(n) => n.is_missing(),
            SyntaxNode::Block(n) => n.is_missing(),
            SyntaxNode::ClassBody(n) => n.is_missing(),
            SyntaxNode::ParameterList(n) => n.is_missing(),
            SyntaxNode::ArgumentList(n) => n.is_missing(),
            _ => false,
        }
    }

    /// Whether this subtree contains error or missing nodes
    pub fn has_error(&self) -> bool {
        self.descendants()
            .iter()
            .any(|node| node.is_error() || node.is_missing())
    }

    /// Text carried by single-token nodes
    pub fn label(&self) -> Option<String> {
        match self {
            SyntaxNode::Identifier(n) => Some(n.name.clone()),
            SyntaxNode::Type(n) => Some(n.name().to_string()),
            SyntaxNode::Number(n) => Some(n.text.clone()),
            SyntaxNode::String(n) => Some(n.raw.clone()),
            SyntaxNode::Boolean(n) => Some(n.value.to_string()),
            _ => None,
        }
    }

    /// Operator of binary, unary and assignment nodes, the qualifier of variables
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            SyntaxNode::Binary(n) => Some(n.operator.as_str()),
            SyntaxNode::Unary(n) => Some(n.operator.as_str()),
            SyntaxNode::Assignment(n) => Some(n.operator.as_str()),
            SyntaxNode::Variable(n) => Some(n.kind.as_str()),
            SyntaxNode::Parameter(n) => n.qualifier.map(|q| q.as_str()),
            _ => None,
        }
    }
}

impl<'a> From<&'a Program> for SyntaxNode<'a> {
    fn from(program: &'a Program) -> Self {
        SyntaxNode::Program(program)
    }
}

impl<'a> From<&'a Declaration> for SyntaxNode<'a> {
    fn from(declaration: &'a Declaration) -> Self {
        match declaration {
            Declaration::Instance(n) => SyntaxNode::Instance(n),
            Declaration::Prototype(n) => SyntaxNode::Prototype(n),
            Declaration::Function(n) => SyntaxNode::Function(n),
            Declaration::Variable(n) => SyntaxNode::Variable(n),
            Declaration::Class(n) => SyntaxNode::Class(n),
            Declaration::Error(n) => SyntaxNode::Error(n),
        }
    }
}

impl<'a> From<&'a ClassMember> for SyntaxNode<'a> {
    fn from(member: &'a ClassMember) -> Self {
        match member {
            ClassMember::Variable(n) => SyntaxNode::Variable(n),
            ClassMember::Assignment(n) => SyntaxNode::Assignment(n),
            ClassMember::Error(n) => SyntaxNode::Error(n),
        }
    }
}

impl<'a> From<&'a Statement> for SyntaxNode<'a> {
    fn from(statement: &'a Statement) -> Self {
        match statement {
            Statement::Assignment(n) => SyntaxNode::Assignment(n),
            Statement::Expression(n) => SyntaxNode::ExpressionStatement(n),
            Statement::If(n) => SyntaxNode::If(n),
            Statement::Return(n) => SyntaxNode::Return(n),
            Statement::Variable(n) => SyntaxNode::Variable(n),
            Statement::Block(n) => SyntaxNode::Block(n),
            Statement::Error(n) => SyntaxNode::Error(n),
        }
    }
}

impl<'a> From<&'a Expression> for SyntaxNode<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::Binary(n) => SyntaxNode::Binary(n),
            Expression::Unary(n) => SyntaxNode::Unary(n),
            Expression::ArrayAccess(n) => SyntaxNode::ArrayAccess(n),
            Expression::MemberAccess(n) => SyntaxNode::MemberAccess(n),
            Expression::Call(n) => SyntaxNode::Call(n),
            Expression::Parenthesized(n) => SyntaxNode::Parenthesized(n),
            Expression::Boolean(n) => SyntaxNode::Boolean(n),
            Expression::Number(n) => SyntaxNode::Number(n),
            Expression::String(n) => SyntaxNode::String(n),
            Expression::Identifier(n) => SyntaxNode::Identifier(n),
            Expression::ArrayInitializer(n) => SyntaxNode::ArrayInitializer(n),
            Expression::Error(n) => SyntaxNode::Error(n),
        }
    }
}
