//! Declaration summaries
//!
//!     A flat listing of the top-level declarations of a program, for outlines, symbol pickers
//!     and quick indexes. Error nodes are skipped.

use super::elements::{Declaration, Program, VariableKind};
use super::range::Range;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Instance,
    Prototype,
    Function,
    Variable,
    Constant,
    Class,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Instance => "instance",
            DeclarationKind::Prototype => "prototype",
            DeclarationKind::Function => "function",
            DeclarationKind::Variable => "variable",
            DeclarationKind::Constant => "constant",
            DeclarationKind::Class => "class",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationSummary {
    pub kind: DeclarationKind,
    pub name: String,
    /// Parent of instances and prototypes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Return type of functions, type of variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub range: Range,
}

impl DeclarationSummary {
    fn new(kind: DeclarationKind, name: &str, range: &Range) -> Self {
        Self {
            kind,
            name: name.to_string(),
            parent: None,
            type_name: None,
            range: range.clone(),
        }
    }
}

impl fmt::Display for DeclarationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)?;
        if let Some(parent) = &self.parent {
            write!(f, "({})", parent)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, ": {}", type_name)?;
        }
        Ok(())
    }
}

/// Summaries of every top-level declaration, in file order
pub fn extract_declarations(program: &Program) -> Vec<DeclarationSummary> {
    program
        .declarations
        .iter()
        .filter_map(|declaration| match declaration {
            Declaration::Instance(d) => {
                let mut summary =
                    DeclarationSummary::new(DeclarationKind::Instance, &d.name.name, &d.range);
                summary.parent = d.parent.as_ref().map(|p| p.name.clone());
                Some(summary)
            }
            Declaration::Prototype(d) => {
                let mut summary =
                    DeclarationSummary::new(DeclarationKind::Prototype, &d.name.name, &d.range);
                summary.parent = Some(d.parent.name.clone());
                Some(summary)
            }
            Declaration::Function(d) => {
                let mut summary =
                    DeclarationSummary::new(DeclarationKind::Function, &d.name.name, &d.range);
                summary.type_name = Some(d.return_type.name().to_string());
                Some(summary)
            }
            Declaration::Variable(d) => {
                let kind = match d.kind {
                    VariableKind::Const => DeclarationKind::Constant,
                    VariableKind::Var => DeclarationKind::Variable,
                };
                let mut summary = DeclarationSummary::new(kind, &d.name.name, &d.range);
                summary.type_name = Some(d.type_ref.name().to_string());
                Some(summary)
            }
            Declaration::Class(d) => Some(DeclarationSummary::new(
                DeclarationKind::Class,
                &d.name.name,
                &d.range,
            )),
            Declaration::Error(_) => None,
        })
        .collect()
}
