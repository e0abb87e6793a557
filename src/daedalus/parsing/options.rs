//! Parse configuration
//!
//! Options are plain data. Hosts that keep them in a config file load them with
//! [ParseOptions::from_json_str] or [ParseOptions::from_yaml_str]; unknown keys are rejected
//! and absent keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Keep whitespace and comment ranges in the result
    pub collect_trivia: bool,
    /// Keep at most this many diagnostics. Parsing always runs to the end of the input.
    pub max_diagnostics: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            collect_trivia: true,
            max_diagnostics: None,
        }
    }
}

impl ParseOptions {
    pub fn without_trivia(mut self) -> Self {
        self.collect_trivia = false;
        self
    }

    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = Some(max);
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
