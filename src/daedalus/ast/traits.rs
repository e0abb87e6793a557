//! AST traits - Common interfaces for uniform node access
//!
//! Every typed node can be turned into a [SyntaxNode], and everything else (type name,
//! label, range, visiting) is derived from that.

use super::elements::*;
use super::range::{Position, Range};
use super::syntax::SyntaxNode;

/// Visitor trait for traversing the tree
///
/// `visit` is called before a node's children, `leave` after them. Both default to doing
/// nothing, so implementors only override what they need.
///
/// # Example
///
/// ```ignore
/// struct CallCounter(usize);
///
/// impl<'a> Visitor<'a> for CallCounter {
///     fn visit(&mut self, node: SyntaxNode<'a>) {
///         if node.kind() == NodeKind::CallExpression {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut counter = CallCounter(0);
/// program.accept(&mut counter);
/// ```
pub trait Visitor<'a> {
    fn visit(&mut self, _node: SyntaxNode<'a>) {}
    fn leave(&mut self, _node: SyntaxNode<'a>) {}
}

/// Common interface for all tree nodes
pub trait AstNode {
    fn syntax(&self) -> SyntaxNode<'_>;

    fn node_type(&self) -> &'static str {
        self.syntax().kind().as_str()
    }

    fn display_label(&self) -> String {
        let node = self.syntax();
        match (node.label(), node.operator()) {
            (Some(label), _) => label,
            (None, Some(operator)) => operator.to_string(),
            (None, None) => node.kind().to_string(),
        }
    }

    fn range(&self) -> &Range {
        self.syntax().range()
    }

    fn start_position(&self) -> Position {
        self.range().start
    }

    /// Accept a visitor for traversing this node and its children
    fn accept<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        self.syntax().accept(visitor)
    }
}

macro_rules! ast_node {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AstNode for $ty {
                fn syntax(&self) -> SyntaxNode<'_> {
                    SyntaxNode::$variant(self)
                }
            }
        )*
    };
}

ast_node! {
    Program => Program,
    InstanceDeclaration => Instance,
    PrototypeDeclaration => Prototype,
    FunctionDeclaration => Function,
    ParameterList => ParameterList,
    Parameter => Parameter,
    VariableDeclaration => Variable,
    ClassDeclaration => Class,
    ClassBody => ClassBody,
    Block => Block,
    AssignmentStatement => Assignment,
    ExpressionStatement => ExpressionStatement,
    IfStatement => If,
    ReturnStatement => Return,
    BinaryExpression => Binary,
    UnaryExpression => Unary,
    ArrayAccess => ArrayAccess,
    MemberAccess => MemberAccess,
    CallExpression => Call,
    ArgumentList => ArgumentList,
    ParenthesizedExpression => Parenthesized,
    ArrayInitializer => ArrayInitializer,
    Identifier => Identifier,
    TypeRef => Type,
    NumberLiteral => Number,
    StringLiteral => String,
    BooleanLiteral => Boolean,
    ErrorNode => Error,
}

impl AstNode for Declaration {
    fn syntax(&self) -> SyntaxNode<'_> {
        SyntaxNode::from(self)
    }
}

impl AstNode for ClassMember {
    fn syntax(&self) -> SyntaxNode<'_> {
        SyntaxNode::from(self)
    }
}

impl AstNode for Statement {
    fn syntax(&self) -> SyntaxNode<'_> {
        SyntaxNode::from(self)
    }
}

impl AstNode for Expression {
    fn syntax(&self) -> SyntaxNode<'_> {
        SyntaxNode::from(self)
    }
}
