//! JSON and YAML output of the tree snapshot
//!
//! Both serialize an [AstSnapshot] with ranges, so the output can be read back with
//! [snapshot_from_json] / [snapshot_from_yaml] and compared.

use super::registry::{FormatError, Formatter};
use crate::daedalus::ast::elements::Program;
use crate::daedalus::ast::snapshot::{snapshot_from_program, AstSnapshot};

pub fn to_json(program: &Program) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&snapshot_from_program(program))
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn to_yaml(program: &Program) -> Result<String, FormatError> {
    serde_yaml::to_string(&snapshot_from_program(program))
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn snapshot_from_json(text: &str) -> Result<AstSnapshot, FormatError> {
    serde_json::from_str(text).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn snapshot_from_yaml(text: &str) -> Result<AstSnapshot, FormatError> {
    serde_yaml::from_str(text).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        to_json(program)
    }

    fn description(&self) -> &str {
        "Tree snapshot as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        to_yaml(program)
    }

    fn description(&self) -> &str {
        "Tree snapshot as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::parsing::parse;

    #[test]
    fn test_json_shape() {
        let program = parse("var int x;").program;
        let json = to_json(&program).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["node_type"], "program");
        let declaration = &value["children"][0];
        assert_eq!(declaration["node_type"], "variable_declaration");
        assert_eq!(declaration["label"], "var");
        assert_eq!(declaration["field"], "declarations");
        assert_eq!(declaration["children"][1]["label"], "x");
        assert_eq!(declaration["attributes"]["range"], "0:0..0:10");
    }

    #[test]
    fn test_json_and_yaml_read_back() {
        let program = parse("instance HERO(NPC) { level = 2; };").program;
        let expected = snapshot_from_program(&program);
        assert_eq!(snapshot_from_json(&to_json(&program).unwrap()).unwrap(), expected);
        assert_eq!(snapshot_from_yaml(&to_yaml(&program).unwrap()).unwrap(), expected);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            snapshot_from_json("{"),
            Err(FormatError::SerializationError(_))
        ));
    }
}
