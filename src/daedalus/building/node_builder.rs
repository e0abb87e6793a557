//! Node range and anonymous child accumulation

use super::location::span_of;
use crate::daedalus::ast::elements::Anonymous;
use crate::daedalus::ast::range::Range;
use crate::daedalus::ast::syntax::NodeKind;
use crate::daedalus::lexing::LexedToken;

/// Accumulates what one production consumed, in source order.
///
/// Empty ranges (missing children) are accepted anywhere the ordering allows but do not
/// stretch the node: a node's range runs from its first non-empty token or child to its last.
#[derive(Debug)]
pub struct NodeBuilder {
    kind: NodeKind,
    first: Option<Range>,
    last: Option<Range>,
    first_empty: Option<Range>,
    cursor: usize,
    anonymous: Vec<Anonymous>,
}

impl NodeBuilder {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            first: None,
            last: None,
            first_empty: None,
            cursor: 0,
            anonymous: Vec::new(),
        }
    }

    /// Record one of the node's own tokens
    pub fn token(&mut self, token: &LexedToken) {
        self.extend(&token.range);
        self.anonymous
            .push(Anonymous::new(token.token, token.range.clone()));
    }

    /// Record a named child
    pub fn child(&mut self, range: &Range) {
        self.extend(range);
    }

    fn extend(&mut self, range: &Range) {
        assert!(
            range.span.start >= self.cursor,
            "{}: child at {} starts before the end of the previous one ({})",
            self.kind,
            range.span.start,
            self.cursor
        );
        self.cursor = range.span.end;

        if range.is_empty() {
            if self.first_empty.is_none() {
                self.first_empty = Some(range.clone());
            }
            return;
        }
        if self.first.is_none() {
            self.first = Some(range.clone());
        }
        self.last = Some(range.clone());
    }

    /// The node's range and anonymous children. `fallback` is used when nothing but empty
    /// ranges were recorded and there is no empty child to anchor on either.
    pub fn finish(self, fallback: Range) -> (Range, Vec<Anonymous>) {
        let range = match (&self.first, &self.last) {
            (Some(first), Some(last)) => span_of(first, last),
            _ => self.first_empty.unwrap_or(fallback),
        };
        (range, self.anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::ast::range::Position;
    use crate::daedalus::token::Token;

    fn range(start: usize, end: usize) -> Range {
        Range::new(
            start..end,
            Position::new(0, start),
            Position::new(0, end),
        )
    }

    #[test]
    fn test_range_spans_tokens_and_children() {
        let mut builder = NodeBuilder::new(NodeKind::ReturnStatement);
        builder.token(&LexedToken {
            token: Token::Return,
            range: range(0, 6),
        });
        builder.child(&range(7, 8));
        builder.token(&LexedToken {
            token: Token::Semicolon,
            range: range(8, 9),
        });

        let (node_range, anonymous) = builder.finish(range(0, 0));
        assert_eq!(node_range.span, 0..9);
        assert_eq!(anonymous.len(), 2);
        assert_eq!(anonymous[1].token, Token::Semicolon);
    }

    #[test]
    fn test_empty_children_do_not_stretch_the_node() {
        let mut builder = NodeBuilder::new(NodeKind::ExpressionStatement);
        builder.child(&range(0, 3));
        builder.child(&range(3, 3));
        let (node_range, _) = builder.finish(range(0, 0));
        assert_eq!(node_range.span, 0..3);
    }

    #[test]
    fn test_only_empty_children() {
        let mut builder = NodeBuilder::new(NodeKind::Parameter);
        builder.child(&range(4, 4));
        builder.child(&range(4, 4));
        let (node_range, _) = builder.finish(range(9, 9));
        assert_eq!(node_range.span, 4..4);
    }

    #[test]
    #[should_panic(expected = "starts before the end")]
    fn test_out_of_order_children_panic() {
        let mut builder = NodeBuilder::new(NodeKind::Block);
        builder.child(&range(5, 8));
        builder.child(&range(2, 3));
    }
}
