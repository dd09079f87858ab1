//! Flat field maps - the input snapshot every render starts from.
//!
//! A `FieldMap` is the string-keyed, string-valued record of one form's
//! values at a point in time. The CLI collaborator loads one from a TOML
//! or JSON file and hands it to the model extraction step; the formatters
//! themselves never see the raw input.
//!
//! Scalar values (integers, booleans) are stringified on load, and arrays
//! are joined with newlines so that multi-line fields like `steps`,
//! `acceptance`, and `questions` can be written as lists in the input file.

use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Flat, immutable snapshot of one form's field values.
///
/// Lookups return trimmed values; absent keys read as the empty string,
/// so every consumer is total over arbitrary input including the empty map.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    /// Create an empty field map (renders every template with defaults).
    pub fn new() -> Self {
        FieldMap(BTreeMap::new())
    }

    /// Look up a field, trimmed. Absent or blank fields read as "".
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(|v| crate::text::clean(v)).unwrap_or("")
    }

    /// Insert a field value. Used by tests and programmatic callers.
    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Parse a field map from TOML text.
    ///
    /// The top level must be a table. Scalars are stringified; arrays are
    /// joined with newlines.
    pub fn from_toml_str(input: &str) -> Result<FieldMap, String> {
        let value: toml::Value = input.parse().map_err(|e| format!("Invalid TOML field file: {}", e))?;
        let table = value.as_table().ok_or_else(|| "Field file must be a top-level table".to_string())?;

        let mut map = BTreeMap::new();
        for (key, value) in table {
            map.insert(key.clone(), toml_value_to_field(value));
        }
        debug!("Loaded {} fields from TOML", map.len());
        Ok(FieldMap(map))
    }

    /// Parse a field map from JSON text.
    ///
    /// The top level must be an object. Scalars are stringified; arrays are
    /// joined with newlines.
    pub fn from_json_str(input: &str) -> Result<FieldMap, String> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| format!("Invalid JSON field file: {}", e))?;
        let object = value.as_object().ok_or_else(|| "Field file must be a top-level object".to_string())?;

        let mut map = BTreeMap::new();
        for (key, value) in object {
            map.insert(key.clone(), json_value_to_field(value));
        }
        debug!("Loaded {} fields from JSON", map.len());
        Ok(FieldMap(map))
    }
}

fn toml_value_to_field(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => items.iter().map(toml_value_to_field).collect::<Vec<_>>().join("\n"),
        other => other.to_string(),
    }
}

fn json_value_to_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(json_value_to_field).collect::<Vec<_>>().join("\n"),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_empty() {
        let fields = FieldMap::new();
        assert_eq!(fields.get("summary"), "");
    }

    #[test]
    fn test_get_trims_values() {
        let mut fields = FieldMap::new();
        fields.set("summary", "  Crash on save  ");
        assert_eq!(fields.get("summary"), "Crash on save");
    }

    #[test]
    fn test_toml_arrays_join_with_newlines() {
        let fields = FieldMap::from_toml_str("steps = [\"Open app\", \"Click X\"]\nseverity = \"Low\"")
            .expect("should parse");
        assert_eq!(fields.get("steps"), "Open app\nClick X");
        assert_eq!(fields.get("severity"), "Low");
    }

    #[test]
    fn test_toml_scalars_stringified() {
        let fields = FieldMap::from_toml_str("usersAffected = 250").expect("should parse");
        assert_eq!(fields.get("usersAffected"), "250");
    }

    #[test]
    fn test_json_object_parses() {
        let fields =
            FieldMap::from_json_str(r#"{"summary": "Crash", "labels": ["ui", "backend"]}"#).expect("should parse");
        assert_eq!(fields.get("summary"), "Crash");
        assert_eq!(fields.get("labels"), "ui\nbackend");
    }

    #[test]
    fn test_non_table_input_rejected() {
        assert!(FieldMap::from_json_str("[1, 2]").is_err());
        assert!(FieldMap::from_toml_str("not valid toml [").is_err());
    }
}
