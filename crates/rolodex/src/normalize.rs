//! Lenient normalization of stored contact data into canonical form.

use indexmap::IndexMap;
use serde_json::Value;

use crate::schema::Schema;
use crate::value::{ContactValue, Scalar};

impl Schema {
    /// The canonical structure with every slot unset: the full
    /// group-by-label matrix of empty strings in verbose mode, or no
    /// groups at all in concise mode.
    pub fn empty_value(&self) -> ContactValue {
        self.canonicalize(|_, _| None)
    }

    /// Converts arbitrary stored data into canonical form.
    ///
    /// Strings are parsed as JSON; anything that does not come out as an
    /// object collapses to the empty structure rather than failing. Keys
    /// outside the schema are dropped, leaves with no scalar
    /// representation are treated as unset, and the concise/verbose
    /// policy decides whether unset slots appear as empty strings or not
    /// at all.
    pub fn normalize(&self, raw: Option<&Value>) -> ContactValue {
        match raw {
            None => self.empty_value(),
            Some(Value::String(text)) => self.normalize_json(text),
            Some(Value::Object(object)) => self.normalize_object(object),
            Some(_) => self.empty_value(),
        }
    }

    /// Parses JSON text and normalizes the result. Text that fails to
    /// parse, or parses to something other than an object, yields the
    /// empty structure. The text is parsed exactly once: a JSON-encoded
    /// string inside the text does not get a second decode.
    pub fn normalize_json(&self, text: &str) -> ContactValue {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => self.normalize_object(&object),
            Ok(_) | Err(_) => self.empty_value(),
        }
    }

    /// Re-applies the canonical policy to an already-structured value.
    pub fn renormalize(&self, value: &ContactValue) -> ContactValue {
        self.canonicalize(|group, label| value.get(group, label).cloned())
    }

    fn normalize_object(&self, object: &serde_json::Map<String, Value>) -> ContactValue {
        // A recognized group bound to a non-object means the stored blob
        // never had the two-level shape; recover with the empty structure.
        let damaged = object
            .iter()
            .any(|(group, value)| self.is_valid_group(group) && !value.is_object());
        if damaged {
            return self.empty_value();
        }
        self.canonicalize(|group, label| {
            object
                .get(group)
                .and_then(Value::as_object)
                .and_then(|labels| labels.get(label))
                .and_then(Scalar::from_json)
        })
    }

    /// Walks the schema's groups and labels in declaration order, pulling
    /// each slot's value through `lookup`. Empty lookups become empty
    /// strings in verbose mode and are omitted in concise mode, where a
    /// group with nothing set is omitted as a whole.
    fn canonicalize<F>(&self, lookup: F) -> ContactValue
    where
        F: Fn(&str, &str) -> Option<Scalar>,
    {
        let mut value = ContactValue::new();
        for group in &self.groups {
            let mut slots = IndexMap::new();
            for label in &self.labels {
                match lookup(group, label).filter(Scalar::is_set) {
                    Some(scalar) => {
                        slots.insert(label.clone(), scalar);
                    }
                    None if !self.concise => {
                        slots.insert(label.clone(), Scalar::empty_text());
                    }
                    None => {}
                }
            }
            if !self.concise || !slots.is_empty() {
                value.insert_group(group.clone(), slots);
            }
        }
        value
    }
}
