//! Treeviz formatter
//!
//! Treeviz is a one line per node view of the tree, quick to scan by eye. Nesting is shown
//! with box drawing connectors, two columns per level:
//!
//! <prefix><connector> <icon> <field>: <kind> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//!   ⧉ program
//!   └─ ƒ declarations: function_declaration
//!     ├─ τ return_type: type void
//!     ├─ ◦ name: identifier main
//!     ├─ ⋯ parameters: parameter_list
//!     └─ ▢ body: block
//!       └─ ↩ statements: return_statement
//!
//! Icons
//!     Declarations:
//!         Instance: ◆
//!         Prototype: ◇
//!         Function: ƒ
//!         Class: ▣
//!         Variable: ν
//!     Statements:
//!         Block: ▢
//!         Assignment: ≔
//!         If: ⑂
//!         Return: ↩
//!     Expressions:
//!         Binary and unary: ±
//!         Call: ⊕
//!         Literal: ◌
//!     Other:
//!         Identifier: ◦
//!         Type: τ
//!         Lists: ⋯
//!         Error: ✗

use super::registry::{FormatError, Formatter};
use crate::daedalus::ast::elements::Program;
use crate::daedalus::ast::syntax::{FieldName, NodeKind, SyntaxNode};
use std::collections::HashMap;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Program => "⧉",
        NodeKind::InstanceDeclaration => "◆",
        NodeKind::PrototypeDeclaration => "◇",
        NodeKind::FunctionDeclaration => "ƒ",
        NodeKind::ClassDeclaration => "▣",
        NodeKind::VariableDeclaration => "ν",
        NodeKind::Block | NodeKind::ClassBody => "▢",
        NodeKind::AssignmentStatement => "≔",
        NodeKind::IfStatement => "⑂",
        NodeKind::ReturnStatement => "↩",
        NodeKind::BinaryExpression | NodeKind::UnaryExpression => "±",
        NodeKind::CallExpression => "⊕",
        NodeKind::Number | NodeKind::String | NodeKind::Boolean => "◌",
        NodeKind::Identifier => "◦",
        NodeKind::Type => "τ",
        NodeKind::ParameterList | NodeKind::ArgumentList | NodeKind::ArrayInitializer => "⋯",
        NodeKind::Error => "✗",
        _ => "○",
    }
}

fn describe(node: SyntaxNode<'_>, field: Option<FieldName>) -> String {
    let mut text = String::new();
    if let Some(field) = field {
        text.push_str(field.as_str());
        text.push_str(": ");
    }
    text.push_str(node.kind().as_str());

    let label = node
        .label()
        .or_else(|| node.operator().map(str::to_string))
        .unwrap_or_default();
    if !label.is_empty() {
        text.push(' ');
        text.push_str(&truncate(&label, 30));
    }
    if node.is_missing() {
        text.push_str(" (missing)");
    }
    text
}

fn format_node(
    node: SyntaxNode<'_>,
    field: FieldName,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum_prefix = if show_linum {
        format!("{:02} ", node.range().start.line + 1)
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum_prefix,
        prefix,
        connector,
        get_icon(node.kind()),
        describe(node, Some(field))
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node, &child_prefix, show_linum, output);
}

fn format_children(node: SyntaxNode<'_>, prefix: &str, show_linum: bool, output: &mut String) {
    let children = node.fields();
    let count = children.len();
    for (i, (field, child)) in children.into_iter().enumerate() {
        format_node(child, field, prefix, i == count - 1, show_linum, output);
    }
}

pub fn to_treeviz(program: &Program) -> String {
    to_treeviz_with_params(program, &HashMap::new())
}

/// Recognized params: `show-linum` (1-based line numbers in front of every child line)
pub fn to_treeviz_with_params(program: &Program, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let root = SyntaxNode::from(program);
    let mut output = format!("{} {}\n", get_icon(root.kind()), describe(root, None));
    format_children(root, "", show_linum, &mut output);
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(to_treeviz(program))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::parsing::parse;

    #[test]
    fn test_function_tree() {
        let program = parse("func void main() { return; };").program;
        let expected = "\
⧉ program
└─ ƒ declarations: function_declaration
  ├─ τ return_type: type void
  ├─ ◦ name: identifier main
  ├─ ⋯ parameters: parameter_list
  └─ ▢ body: block
    └─ ↩ statements: return_statement
";
        assert_eq!(to_treeviz(&program), expected);
    }

    #[test]
    fn test_operators_and_nesting_connectors() {
        let program = parse("const int A = 1 + 2;\nvar int b;").program;
        let expected = "\
⧉ program
├─ ν declarations: variable_declaration const
│ ├─ τ type: type int
│ ├─ ◦ name: identifier A
│ └─ ± value: binary_expression +
│   ├─ ◌ left: number 1
│   └─ ◌ right: number 2
└─ ν declarations: variable_declaration var
  ├─ τ type: type int
  └─ ◦ name: identifier b
";
        assert_eq!(to_treeviz(&program), expected);
    }

    #[test]
    fn test_line_numbers_and_truncation() {
        let source = format!("var string s = \"{}\";", "x".repeat(40));
        let program = parse(&source).program;
        let mut params = HashMap::new();
        params.insert("show-linum".to_string(), "true".to_string());
        let output = to_treeviz_with_params(&program, &params);
        assert!(output.lines().nth(1).unwrap().starts_with("01 └─ ν"));
        assert!(output.contains(&format!("value: string \"{}...\n", "x".repeat(29))));
    }

    #[test]
    fn test_missing_nodes_are_marked() {
        let program = parse("var int ;").program;
        assert!(to_treeviz(&program).contains("◦ name: identifier (missing)"));
    }
}
