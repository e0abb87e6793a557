//! S-expression output in the style of tree-sitter
//!
//!     Only named nodes are printed. A child stored under a field is prefixed with the field
//!     name, children of list fields are printed without one. Nodes standing in for missing
//!     input print as `(MISSING kind)`:
//!
//!         (program (variable_declaration type: (type) name: (identifier)))

use super::registry::{FormatError, Formatter};
use crate::daedalus::ast::elements::Program;
use crate::daedalus::ast::syntax::{NodeKind, SyntaxNode};

pub fn to_sexp(program: &Program) -> String {
    node_to_sexp(SyntaxNode::from(program))
}

pub fn node_to_sexp(node: SyntaxNode<'_>) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Kinds whose only field is a list
fn is_list(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Program
            | NodeKind::Block
            | NodeKind::ClassBody
            | NodeKind::ParameterList
            | NodeKind::ArgumentList
            | NodeKind::ArrayInitializer
    )
}

fn write_node(node: SyntaxNode<'_>, out: &mut String) {
    out.push('(');
    if node.is_missing() {
        out.push_str("MISSING ");
    }
    out.push_str(node.kind().as_str());

    let list = is_list(node.kind());
    for (field, child) in node.fields() {
        out.push(' ');
        if !list {
            out.push_str(field.as_str());
            out.push_str(": ");
        }
        write_node(child, out);
    }
    out.push(')');
}

pub struct SexpFormatter;

impl Formatter for SexpFormatter {
    fn name(&self) -> &str {
        "sexp"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(to_sexp(program))
    }

    fn description(&self) -> &str {
        "Tree-sitter style S-expression with field names"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::parsing::parse;

    #[test]
    fn test_variable_declaration() {
        let program = parse("var int x;").program;
        insta::assert_snapshot!(
            to_sexp(&program),
            @"(program (variable_declaration type: (type) name: (identifier)))"
        );
    }

    #[test]
    fn test_function_with_call() {
        let program = parse("func void f(var int a) { g(a, 1); };").program;
        insta::assert_snapshot!(
            to_sexp(&program),
            @"(program (function_declaration return_type: (type) name: (identifier) parameters: (parameter_list (parameter type: (type) name: (identifier))) body: (block (expression_statement expression: (call_expression function: (identifier) arguments: (argument_list (identifier) (number)))))))"
        );
    }

    #[test]
    fn test_missing_nodes() {
        let program = parse("const int A = ;").program;
        assert_eq!(
            to_sexp(&program),
            "(program (variable_declaration type: (type) name: (identifier) value: (MISSING ERROR)))"
        );
    }
}
