//! Tree building utilities for the parser
//!
//!     The parser assembles nodes bottom-up. For every production it opens a [NodeBuilder],
//!     feeds it the production's own tokens and the ranges of its children in the order they
//!     were parsed, and finally asks it for the node's range and anonymous children.
//!
//!     Keeping this bookkeeping in one place is what guarantees the range invariants of the
//!     tree: a node spans exactly its tokens and children, and siblings never overlap. The
//!     builder asserts ordering as it goes; a violation is a parser bug and panics.
//!
//!     See [location](location) for the range arithmetic.

pub mod location;
pub mod node_builder;

pub use location::{missing_range, program_range, span_of};
pub use node_builder::NodeBuilder;
