//! Typed node definitions
//!
//!     Each grammar production has its own struct. Every node stores its exact source range,
//!     and every node that is more than a single token also stores its anonymous children
//!     (keywords, punctuation, operators) in source order.
//!
//!     Node groups:
//!         - [program](program): the root.
//!         - [declarations](declarations): instance, prototype, function, variable, class.
//!         - [statements](statements): block contents.
//!         - [expressions](expressions): operators, postfix chains and primaries.
//!         - [terminals](terminals): identifiers, types, literals and error nodes.
//!
//!     The closed enums ([Declaration], [Statement], [Expression], [ClassMember]) all have
//!     an `Error` variant, which is where recovery puts skipped tokens.
//!
//!     Uniform, name based navigation over these types lives in
//!     [syntax](crate::daedalus::ast::syntax).

pub mod declarations;
pub mod expressions;
pub mod program;
pub mod statements;
pub mod terminals;

pub use declarations::{
    ClassBody, ClassDeclaration, ClassMember, Declaration, FunctionDeclaration,
    InstanceDeclaration, Parameter, ParameterList, PrototypeDeclaration, VariableDeclaration,
    VariableKind,
};
pub use expressions::{
    ArgumentList, ArrayAccess, ArrayInitializer, BinaryExpression, BinaryOperator,
    CallExpression, Expression, MemberAccess, ParenthesizedExpression, UnaryExpression,
    UnaryOperator,
};
pub use program::Program;
pub use statements::{
    AssignmentOperator, AssignmentStatement, Block, ExpressionStatement, IfStatement,
    ReturnStatement, Statement,
};
pub use terminals::{
    Anonymous, BooleanLiteral, ErrorNode, Identifier, NumberLiteral, StringLiteral, TypeKind,
    TypeRef,
};
