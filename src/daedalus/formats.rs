//! Output format implementations for the syntax tree
//!
//! This module contains the textual views of a parsed [Program](crate::daedalus::ast::Program):
//! - S-expressions in the style of tree-sitter (sexp)
//! - The treeviz one-line-per-node view (treeviz)
//! - JSON and YAML of the tree snapshot (serialized)
//!
//! All of them are registered by name in a [FormatRegistry].

pub mod registry;
pub mod serialized;
pub mod sexp;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{
    snapshot_from_json, snapshot_from_yaml, to_json, to_yaml, JsonFormatter, YamlFormatter,
};
pub use sexp::{node_to_sexp, to_sexp, SexpFormatter};
pub use treeviz::{to_treeviz, to_treeviz_with_params, TreevizFormatter};
