//! Strict validation of candidate contact structures.

use serde_json::Value;

use crate::error::{Result, RolodexError};
use crate::schema::Schema;
use crate::value::{ContactValue, Scalar};

impl Schema {
    /// Checks a candidate structure and returns it as given.
    ///
    /// This is the write-path counterpart to normalization: instead of
    /// coercing bad input, it rejects it. Rules run in a fixed order and
    /// the first violation wins: textual input must parse as JSON, the
    /// input must be an object of objects, every top-level key must be a
    /// valid group, every second-level key a valid label, and every leaf
    /// a scalar. Partial structures pass; nothing is filled in or pruned.
    pub fn validate(&self, value: &Value) -> Result<ContactValue> {
        match value {
            Value::String(text) => self.validate_json(text),
            other => self.validate_parsed(other),
        }
    }

    /// Parses JSON text and validates the parsed value.
    pub fn validate_json(&self, text: &str) -> Result<ContactValue> {
        let parsed: Value =
            serde_json::from_str(text).map_err(|err| RolodexError::MalformedInput {
                reason: err.to_string(),
            })?;
        self.validate_parsed(&parsed)
    }

    fn validate_parsed(&self, value: &Value) -> Result<ContactValue> {
        let object = value
            .as_object()
            .ok_or_else(|| RolodexError::MalformedInput {
                reason: format!(
                    "expected an object, found {}",
                    json_type_name(value)
                ),
            })?;

        // Group membership is checked across the whole input before any
        // deeper rule, so the reported error kind does not depend on how
        // damaged an individual group happens to be.
        for group in object.keys() {
            if !self.is_valid_group(group) {
                return Err(RolodexError::UnknownGroup {
                    group: group.clone(),
                });
            }
        }

        for (group, entry) in object {
            let labels =
                entry
                    .as_object()
                    .ok_or_else(|| RolodexError::MalformedInput {
                        reason: format!(
                            "expected an object under group '{group}', found {}",
                            json_type_name(entry)
                        ),
                    })?;
            for label in labels.keys() {
                if !self.is_valid_label(label) {
                    return Err(RolodexError::UnknownLabel {
                        group: group.clone(),
                        label: label.clone(),
                    });
                }
            }
        }

        let mut result = ContactValue::new();
        for (group, entry) in object {
            let Some(labels) = entry.as_object() else {
                continue;
            };
            let slots = result.group_entry(group.clone());
            for (label, leaf) in labels {
                let scalar = Scalar::from_json(leaf).ok_or_else(|| {
                    RolodexError::InvalidLeafType {
                        group: group.clone(),
                        label: label.clone(),
                        found: leaf_type_name(leaf),
                    }
                })?;
                slots.insert(label.clone(), scalar);
            }
        }
        Ok(result)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Describes a leaf that failed scalar conversion. Numbers only reach
/// this point when they have no `i64` representation.
fn leaf_type_name(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "a non-integer number",
        other => json_type_name(other),
    }
}
