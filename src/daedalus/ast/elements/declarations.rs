//! Declaration nodes
//!
//!     The five top-level forms:
//!
//!         instance <name> [ ( <parent> ) ] <block> [;]
//!         instance <name> ( <parent> ) ;
//!         prototype <name> ( <parent> ) <block> [;]
//!         func <type> <name> ( <parameters> ) <block> [;]
//!         class <name> { <members> } [;]
//!         (const|var) <type> <name> [ [ <size> ] ] [ = <value> ] ;
//!
//!     Variable declarations also appear inside blocks and class bodies. The keyword, the
//!     parentheses and the optional trailing `;` are anonymous children.

use super::expressions::Expression;
use super::statements::{AssignmentStatement, Block};
use super::terminals::{Anonymous, ErrorNode, Identifier, TypeRef};
use crate::daedalus::ast::range::Range;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Declaration {
    Instance(InstanceDeclaration),
    Prototype(PrototypeDeclaration),
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
    Class(ClassDeclaration),
    Error(ErrorNode),
}

impl Declaration {
    pub fn range(&self) -> &Range {
        match self {
            Declaration::Instance(d) => &d.range,
            Declaration::Prototype(d) => &d.range,
            Declaration::Function(d) => &d.range,
            Declaration::Variable(d) => &d.range,
            Declaration::Class(d) => &d.range,
            Declaration::Error(d) => &d.range,
        }
    }

    /// The declared name, `None` for error nodes
    pub fn name(&self) -> Option<&Identifier> {
        match self {
            Declaration::Instance(d) => Some(&d.name),
            Declaration::Prototype(d) => Some(&d.name),
            Declaration::Function(d) => Some(&d.name),
            Declaration::Variable(d) => Some(&d.name),
            Declaration::Class(d) => Some(&d.name),
            Declaration::Error(_) => None,
        }
    }
}

/// An instance, with or without a body. `instance X(Y);` is the forward form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceDeclaration {
    pub name: Identifier,
    pub parent: Option<Identifier>,
    pub body: Option<Block>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

impl InstanceDeclaration {
    pub fn is_forward(&self) -> bool {
        self.body.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrototypeDeclaration {
    pub name: Identifier,
    pub parent: Identifier,
    pub body: Block,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    pub return_type: TypeRef,
    pub name: Identifier,
    pub parameters: ParameterList,
    pub body: Block,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

/// `( p1, p2 )`. The parentheses belong to the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterList {
    pub parameters: Vec<Parameter>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

impl ParameterList {
    /// Stand-in for a parameter list absent from the source
    pub fn missing(range: Range) -> Self {
        Self {
            parameters: Vec::new(),
            anonymous: Vec::new(),
            range,
        }
    }

    /// A missing parameter list owns no tokens at all, not even its delimiters
    pub fn is_missing(&self) -> bool {
        self.anonymous.is_empty() && self.parameters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// `var` or `const` written in front of the type
    pub qualifier: Option<VariableKind>,
    pub type_ref: TypeRef,
    pub name: Identifier,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Const,
    Var,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Const => "const",
            VariableKind::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub type_ref: TypeRef,
    pub name: Identifier,
    /// Array size between `[` and `]`
    pub size: Option<Expression>,
    /// Initializer after `=`, possibly an array initializer
    pub value: Option<Expression>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

impl VariableDeclaration {
    pub fn is_array(&self) -> bool {
        self.size.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    pub name: Identifier,
    pub body: ClassBody,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassBody {
    pub members: Vec<ClassMember>,
    pub anonymous: Vec<Anonymous>,
    pub range: Range,
}

impl ClassBody {
    /// Stand-in for a class body absent from the source
    pub fn missing(range: Range) -> Self {
        Self {
            members: Vec::new(),
            anonymous: Vec::new(),
            range,
        }
    }

    /// A missing class body owns no tokens at all, not even its delimiters
    pub fn is_missing(&self) -> bool {
        self.anonymous.is_empty() && self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassMember {
    Variable(VariableDeclaration),
    Assignment(AssignmentStatement),
    Error(ErrorNode),
}

impl ClassMember {
    pub fn range(&self) -> &Range {
        match self {
            ClassMember::Variable(m) => &m.range,
            ClassMember::Assignment(m) => &m.range,
            ClassMember::Error(m) => &m.range,
        }
    }
}
