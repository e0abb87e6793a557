//! Named output formats
//!
//!     A [Formatter] turns a whole [Program] into text. The [FormatRegistry] maps format names
//!     (`sexp`, `treeviz`, `json`, `yaml`) to formatters so callers can pick one from a string,
//!     for instance a command line flag or an editor setting.

use crate::daedalus::ast::elements::Program;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown format `{0}`")]
    FormatNotFound(String),
    #[error("cannot serialize the tree: {0}")]
    SerializationError(String),
}

pub trait Formatter: Send + Sync {
    /// Registry key
    fn name(&self) -> &str;

    fn serialize(&self, program: &Program) -> Result<String, FormatError>;

    /// One line for listings
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters by name, kept sorted
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry without any formatter
    pub fn empty() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// `sexp`, `treeviz`, `json` and `yaml`
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(super::SexpFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// A formatter registered under an existing name replaces the old one
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.formatters.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn serialize(&self, program: &Program, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(program),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `name: description` for every format
    pub fn describe(&self) -> Vec<String> {
        self.formatters
            .values()
            .map(|formatter| format!("{}: {}", formatter.name(), formatter.description()))
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
