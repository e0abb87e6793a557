//! Syntax tree definitions and utilities
//!
//!     This module provides the tree produced by the parser, the uniform [SyntaxNode] view
//!     over it, diagnostics, source positions and position-based lookups.
//!
//! Shape
//!
//!     A [Program] owns the top-level declarations in file order. Below that every production
//!     has a typed struct (see [elements]). Keywords, punctuation and operators are kept on
//!     each node as anonymous children, so a node's range is exactly the union of its named
//!     children and its own tokens, and slicing the source with a node's range gives back its
//!     text byte for byte.
//!
//! How Location Tracking Works
//!
//!     1. The lexer produces tokens paired with byte ranges into the source:
//!
//!         Source: "var int x;"
//!         Lexer:  (Var, 0..3) (Int, 4..7) (Identifier, 8..9) (Semicolon, 9..10)
//!
//!     2. Byte ranges are converted once to line:column positions using [LineIndex]
//!        (pre-computed line starts, binary search per conversion).
//!
//!     3. The parser builds nodes bottom-up. A node's range starts at its first token or
//!        child and ends at its last, see [building](crate::daedalus::building).
//!
//! Errors in the tree
//!
//!     Recovery puts skipped tokens into `ERROR` nodes, and absent mandatory children are
//!     represented by empty nodes (see [terminals](elements::terminals)). Every such node is
//!     accompanied by a [Diagnostic].

pub mod diagnostics;
pub mod elements;
pub mod error;
pub mod lookup;
pub mod range;
pub mod snapshot;
pub mod summary;
pub mod syntax;
pub mod traits;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSeverity};
pub use elements::*;
pub use error::{ParseError, PositionLookupError};
pub use lookup::{format_at_position, node_at_position, nodes_at_position, parse_position};
pub use range::{LineIndex, Position, Range};
pub use snapshot::{snapshot_from_program, snapshot_node, AstSnapshot};
pub use summary::{extract_declarations, DeclarationKind, DeclarationSummary};
pub use syntax::{FieldName, NodeKind, SyntaxNode};
pub use traits::{AstNode, Visitor};
