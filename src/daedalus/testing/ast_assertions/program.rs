//! Program-level assertions

use super::{check_index, declarations::DeclarationAssertion, summarize};
use crate::daedalus::ast::{AstNode, Program};
use crate::daedalus::formats::to_sexp;

pub struct ProgramAssertion<'a> {
    pub(crate) program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    /// Assert the number of top-level declarations, error nodes included
    pub fn declaration_count(self, expected: usize) -> Self {
        let actual = self.program.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} declarations, found {} declarations: [{}]",
            expected,
            actual,
            summarize(self.program.iter().map(|d| d.syntax()))
        );
        self
    }

    pub fn declaration<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DeclarationAssertion<'a>),
    {
        check_index(index, self.program.len(), "declaration", "program");
        assertion(DeclarationAssertion {
            declaration: &self.program.declarations[index],
            context: format!("declarations[{}]", index),
        });
        self
    }

    /// Assert that no node anywhere in the tree is an error or missing node
    pub fn no_errors(self) -> Self {
        let root = self.program.syntax();
        let offending: Vec<_> = root
            .descendants()
            .into_iter()
            .filter(|node| node.is_error() || node.is_missing())
            .map(|node| format!("{} at {}", node.kind().as_str(), node.range().start))
            .collect();
        assert!(
            offending.is_empty(),
            "Expected a tree without error nodes, found: [{}]",
            offending.join(", ")
        );
        self
    }

    /// Compare the whole tree against its S-expression rendering
    pub fn sexp(self, expected: &str) -> Self {
        let actual = to_sexp(self.program);
        assert_eq!(actual, expected, "program: S-expression mismatch");
        self
    }
}
