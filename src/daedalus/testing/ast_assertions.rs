//! Fluent assertion API for the syntax tree
//!
//!     Tests that walk the tree by hand are long, fragile and tend to stop at counting
//!     children. The assertions here check kinds, names, operators and nesting, and every
//!     failure message names the path to the offending node (`declarations[0].body.statements[2]`).
//!     When the tree layout changes, only this module has to follow.
//!
//!     Each assertion consumes and returns itself so checks chain. Descending into a child
//!     takes a closure receiving the child's assertion:
//!
//!         assert_program(&program)
//!             .declaration(0, |d| {
//!                 d.assert_function()
//!                     .return_type("void")
//!                     .name("Startup")
//!                     .body(|b| {
//!                         b.statement(0, |s| {
//!                             s.assert_expression().assert_call().callee("Wld_InsertNpc");
//!                         });
//!                     });
//!             });
//!
//!     `assert_*` methods on the sum types (declarations, statements, expressions, class
//!     members) panic unless the node is of the named kind.

mod declarations;
mod diagnostics;
mod expressions;
mod program;
mod statements;

pub use declarations::{
    ClassAssertion, ClassMemberAssertion, DeclarationAssertion, FunctionAssertion,
    InstanceAssertion, ParameterAssertion, PrototypeAssertion, VariableAssertion,
};
pub use diagnostics::{DiagnosticAssertion, DiagnosticsAssertion};
pub use expressions::{
    ArrayAccessAssertion, BinaryAssertion, CallAssertion, ErrorAssertion, ExpressionAssertion,
    InitializerAssertion, MemberAccessAssertion, UnaryAssertion,
};
pub use program::ProgramAssertion;
pub use statements::{
    AssignmentAssertion, BlockAssertion, IfAssertion, ReturnAssertion, StatementAssertion,
};

use crate::daedalus::ast::{Diagnostic, Program, SyntaxNode};

pub fn assert_program(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

pub fn assert_diagnostics(diagnostics: &[Diagnostic]) -> DiagnosticsAssertion<'_> {
    DiagnosticsAssertion { diagnostics }
}

// Shared helpers

pub(super) fn summarize<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = SyntaxNode<'a>>,
{
    nodes
        .into_iter()
        .map(|node| node.kind().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn check_index(index: usize, len: usize, what: &str, context: &str) {
    assert!(
        index < len,
        "{}: {} index {} out of bounds ({} has {})",
        context,
        what,
        index,
        context,
        len
    );
}
