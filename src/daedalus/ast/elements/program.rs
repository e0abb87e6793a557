//! The root node

use super::declarations::Declaration;
use crate::daedalus::ast::range::Range;
use serde::Serialize;

/// A whole source file: top-level declarations in file order.
///
/// The program range always spans the complete source, leading and trailing trivia included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub range: Range,
}

impl Program {
    pub fn new(declarations: Vec<Declaration>, range: Range) -> Self {
        Self {
            declarations,
            range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
