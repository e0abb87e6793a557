//! Terminal nodes
//!
//!     Single-token nodes (identifiers, types, literals) plus the two kinds of filler the
//!     parser can put into the tree: anonymous tokens and error nodes.
//!
//!     A mandatory child that is absent from the source is still present in the tree, as an
//!     empty node anchored at the end of the preceding token. Identifiers use an empty name,
//!     types use [TypeKind::Missing] and expressions use an empty [ErrorNode]. A missing node
//!     always goes together with a diagnostic.

use crate::daedalus::ast::range::Range;
use crate::daedalus::lexing::escapes;
use crate::daedalus::token::{is_terminated_string, Token};
use serde::Serialize;

/// A keyword, punctuation or operator token kept for span accuracy but not part of the
/// named-field view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anonymous {
    pub token: Token,
    pub range: Range,
}

impl Anonymous {
    pub fn new(token: Token, range: Range) -> Self {
        Self { token, range }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub range: Range,
}

impl Identifier {
    pub fn new(name: impl Into<String>, range: Range) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    pub fn missing(range: Range) -> Self {
        Self::new(String::new(), range)
    }

    pub fn is_missing(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TypeKind {
    Void,
    Int,
    Float,
    String,
    /// A class name used as a type
    Named(String),
    Missing,
}

/// The type of a variable, parameter or function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRef {
    pub kind: TypeKind,
    pub range: Range,
}

impl TypeRef {
    pub fn new(kind: TypeKind, range: Range) -> Self {
        Self { kind, range }
    }

    pub fn missing(range: Range) -> Self {
        Self::new(TypeKind::Missing, range)
    }

    /// Builtin types for a type keyword token
    pub fn builtin(token: Token) -> Option<TypeKind> {
        match token {
            Token::Void => Some(TypeKind::Void),
            Token::Int => Some(TypeKind::Int),
            Token::Float => Some(TypeKind::Float),
            Token::StringType => Some(TypeKind::String),
            _ => None,
        }
    }

    /// Builtins are reported in lowercase whatever their spelling in the source.
    pub fn name(&self) -> &str {
        match &self.kind {
            TypeKind::Void => "void",
            TypeKind::Int => "int",
            TypeKind::Float => "float",
            TypeKind::String => "string",
            TypeKind::Named(name) => name,
            TypeKind::Missing => "",
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self.kind, TypeKind::Named(_) | TypeKind::Missing)
    }

    pub fn is_missing(&self) -> bool {
        self.kind == TypeKind::Missing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub text: String,
    pub range: Range,
}

impl NumberLiteral {
    pub fn is_float(&self) -> bool {
        self.text.contains('.')
    }

    /// The integer value. `None` for floats and integers that overflow `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        if self.is_float() {
            return None;
        }
        self.text.parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    /// Source text including the quotes
    pub raw: String,
    pub range: Range,
}

impl StringLiteral {
    /// The decoded value with escapes resolved
    pub fn value(&self) -> String {
        escapes::decode(&self.raw)
    }

    pub fn is_terminated(&self) -> bool {
        is_terminated_string(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub range: Range,
}

/// Tokens skipped during recovery, or an empty stand-in for a missing mandatory node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNode {
    pub skipped: Vec<Anonymous>,
    pub range: Range,
}

impl ErrorNode {
    pub fn missing(range: Range) -> Self {
        Self {
            skipped: Vec::new(),
            range,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.skipped.is_empty()
    }
}
