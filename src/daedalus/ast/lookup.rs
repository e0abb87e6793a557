//! Position based lookup
//!
//!     Editors ask "what is under the cursor". Ranges are treated as half open here
//!     (`start <= position < end`) so that the boundary between two adjacent nodes belongs to
//!     the second one. Empty nodes (missing children) never match. The program itself matches
//!     up to and including the end of the source.

use super::elements::Program;
use super::error::PositionLookupError;
use super::range::Position;
use super::syntax::SyntaxNode;

/// Parse a position string in the format "line:column"
pub fn parse_position(position: &str) -> Result<Position, PositionLookupError> {
    let (line, column) = position.split_once(':').ok_or_else(|| {
        PositionLookupError::InvalidPositionFormat("expected format line:column".to_string())
    })?;

    let line = line.trim().parse::<usize>().map_err(|_| {
        PositionLookupError::InvalidPositionFormat(format!("invalid line number: {}", line))
    })?;
    let column = column.trim().parse::<usize>().map_err(|_| {
        PositionLookupError::InvalidPositionFormat(format!("invalid column number: {}", column))
    })?;

    Ok(Position::new(line, column))
}

/// Every node containing `position`, from the program down to the deepest one
pub fn nodes_at_position(program: &Program, position: Position) -> Vec<SyntaxNode<'_>> {
    if position < program.range.start || position > program.range.end {
        return Vec::new();
    }

    let mut path = vec![SyntaxNode::Program(program)];
    let mut current = SyntaxNode::Program(program);
    while let Some(child) = current
        .named_children()
        .into_iter()
        .find(|child| child.range().covers(position))
    {
        path.push(child);
        current = child;
    }
    path
}

/// The deepest node containing `position`
pub fn node_at_position(
    program: &Program,
    position: Position,
) -> Result<SyntaxNode<'_>, PositionLookupError> {
    nodes_at_position(program, position)
        .pop()
        .ok_or(PositionLookupError::NotFound {
            line: position.line,
            column: position.column,
        })
}

/// One line per node on the path to `position`: `- kind: label`
pub fn format_at_position(program: &Program, position: Position) -> String {
    let nodes = nodes_at_position(program, position);
    if nodes.is_empty() {
        return "No AST nodes at this position".to_string();
    }
    nodes
        .iter()
        .map(|node| {
            let label = node
                .label()
                .or_else(|| node.operator().map(str::to_string))
                .unwrap_or_default();
            format!("- {}: {}", node.kind(), label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3:14"), Ok(Position::new(3, 14)));
        assert_eq!(parse_position(" 0 : 2 "), Ok(Position::new(0, 2)));
    }

    #[test]
    fn test_parse_position_errors() {
        assert!(matches!(
            parse_position("12"),
            Err(PositionLookupError::InvalidPositionFormat(_))
        ));
        assert_eq!(
            parse_position("a:1"),
            Err(PositionLookupError::InvalidPositionFormat(
                "invalid line number: a".to_string()
            ))
        );
    }
}
