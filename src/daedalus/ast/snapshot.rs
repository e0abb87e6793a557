//! AST Snapshot - a normalized intermediate representation of the tree
//!
//! This module provides a canonical, format-agnostic representation of the tree suitable for
//! serialization to any output format (JSON, YAML, treeviz, S-expressions).
//!
//! The snapshot captures node kinds, labels, the field each child is stored under, and a few
//! attributes, so every serializer can focus on presentation without reimplementing
//! traversal. Without ranges, two snapshots compare equal exactly when the trees have the same
//! shape and content, which is what the idempotence checks rely on.

use super::elements::Program;
use super::syntax::SyntaxNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The kind of node (e.g., "if_statement", "identifier")
    pub node_type: String,

    /// Identifier names, literal text, operators; empty for plain structure
    pub label: String,

    /// The field this node is stored under in its parent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Additional attributes specific to the node type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            field: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_field(mut self, field: String) -> Self {
        self.field = Some(field);
        self
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this snapshot, itself included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::node_count).sum::<usize>()
    }
}

/// Snapshot of a whole program, ranges included
pub fn snapshot_from_program(program: &Program) -> AstSnapshot {
    snapshot_node(SyntaxNode::Program(program), true)
}

/// Snapshot of a node and all its descendants
///
/// With `include_ranges` every node gets a `range` attribute (`line:column..line:column`).
/// Leave it off to compare trees parsed from different offsets.
pub fn snapshot_node(node: SyntaxNode<'_>, include_ranges: bool) -> AstSnapshot {
    let label = node
        .label()
        .or_else(|| node.operator().map(str::to_string))
        .unwrap_or_default();
    let mut snapshot = AstSnapshot::new(node.kind().to_string(), label);

    if node.is_missing() {
        snapshot = snapshot.with_attribute("missing".to_string(), "true".to_string());
    }
    if let SyntaxNode::Error(error) = node {
        if !error.skipped.is_empty() {
            snapshot = snapshot
                .with_attribute("skipped".to_string(), error.skipped.len().to_string());
        }
    }
    if include_ranges {
        snapshot = snapshot.with_attribute("range".to_string(), node.range().to_string());
    }

    for (field, child) in node.fields() {
        snapshot = snapshot
            .with_child(snapshot_node(child, include_ranges).with_field(field.to_string()));
    }

    snapshot
}
