//! Scalar leaf values and the canonical nested contact structure.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A leaf value stored under a group/label pair.
///
/// Contact data bottoms out in plain scalars. Emptiness follows the
/// conventions of loosely typed form handling: the empty string, zero,
/// `false`, and null all count as empty, and concise schemas prune them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Free text, the common case for contact fields.
    Text(String),
    /// A whole number, e.g. a building number.
    Integer(i64),
    /// A flag such as do_not_call.
    Boolean(bool),
    /// Explicitly absent.
    Null,
}

impl Scalar {
    /// Returns true for values that count as unset: `""`, `0`, `false`,
    /// and null.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Text(text) => text.is_empty(),
            Scalar::Integer(n) => *n == 0,
            Scalar::Boolean(flag) => !flag,
            Scalar::Null => true,
        }
    }

    /// Inverse of `is_empty`.
    pub fn is_set(&self) -> bool {
        !self.is_empty()
    }

    /// Converts a JSON leaf to a scalar, or `None` when the value has no
    /// scalar representation (arrays, objects, non-integer numbers).
    pub fn from_json(value: &Value) -> Option<Scalar> {
        match value {
            Value::String(text) => Some(Scalar::Text(text.clone())),
            Value::Number(n) => n.as_i64().map(Scalar::Integer),
            Value::Bool(flag) => Some(Scalar::Boolean(*flag)),
            Value::Null => Some(Scalar::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The placeholder written for unset slots in verbose canonical form.
    pub(crate) fn empty_text() -> Scalar {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Boolean(flag) => write!(f, "{flag}"),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<bool> for Scalar {
    fn from(flag: bool) -> Self {
        Scalar::Boolean(flag)
    }
}

/// Canonical two-level contact structure: groups mapping to labels mapping
/// to scalars.
///
/// Values iterate in insertion order, which for schema-produced values is
/// schema declaration order. Equality ignores ordering differences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactValue {
    groups: IndexMap<String, IndexMap<String, Scalar>>,
}

impl ContactValue {
    /// Creates an empty contact value with no groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no groups are present at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates group names in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Returns the label map for a group, if the group is present.
    pub fn group(&self, group: &str) -> Option<&IndexMap<String, Scalar>> {
        self.groups.get(group)
    }

    /// Looks up a single leaf value.
    pub fn get(&self, group: &str, label: &str) -> Option<&Scalar> {
        self.groups.get(group).and_then(|labels| labels.get(label))
    }

    /// Writes a leaf value, creating the group on demand.
    pub fn set(
        &mut self,
        group: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<Scalar>,
    ) {
        self.group_entry(group.into()).insert(label.into(), value.into());
    }

    /// Returns the label map for a group, inserting an empty one if absent.
    pub(crate) fn group_entry(
        &mut self,
        group: String,
    ) -> &mut IndexMap<String, Scalar> {
        self.groups.entry(group).or_default()
    }

    /// Replaces a whole group with a prepared label map.
    pub(crate) fn insert_group(
        &mut self,
        group: String,
        labels: IndexMap<String, Scalar>,
    ) {
        self.groups.insert(group, labels);
    }

    /// Iterates `(group, label, value)` triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Scalar)> {
        self.groups.iter().flat_map(|(group, labels)| {
            labels
                .iter()
                .map(move |(label, value)| (group.as_str(), label.as_str(), value))
        })
    }

    /// Renders the structure as a JSON object for storage.
    pub fn to_json(&self) -> Value {
        let mut root = serde_json::Map::new();
        for (group, labels) in &self.groups {
            let mut inner = serde_json::Map::new();
            for (label, value) in labels {
                let leaf = match value {
                    Scalar::Text(text) => Value::String(text.clone()),
                    Scalar::Integer(n) => Value::Number((*n).into()),
                    Scalar::Boolean(flag) => Value::Bool(*flag),
                    Scalar::Null => Value::Null,
                };
                inner.insert(label.clone(), leaf);
            }
            root.insert(group.clone(), Value::Object(inner));
        }
        Value::Object(root)
    }
}

impl PartialEq for ContactValue {
    fn eq(&self, other: &Self) -> bool {
        if self.groups.len() != other.groups.len() {
            return false;
        }
        self.groups.iter().all(|(group, labels)| {
            other.groups.get(group).is_some_and(|theirs| {
                labels.len() == theirs.len()
                    && labels
                        .iter()
                        .all(|(label, value)| theirs.get(label) == Some(value))
            })
        })
    }
}

impl Eq for ContactValue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_emptiness() {
        assert!(Scalar::Text(String::new()).is_empty());
        assert!(Scalar::Integer(0).is_empty());
        assert!(Scalar::Boolean(false).is_empty());
        assert!(Scalar::Null.is_empty());

        assert!(Scalar::from("hello").is_set());
        assert!(Scalar::from(-3).is_set());
        assert!(Scalar::from(true).is_set());
    }

    #[test]
    fn test_scalar_from_json() {
        assert_eq!(
            Scalar::from_json(&serde_json::json!("x")),
            Some(Scalar::Text("x".to_string()))
        );
        assert_eq!(
            Scalar::from_json(&serde_json::json!(42)),
            Some(Scalar::Integer(42))
        );
        assert_eq!(
            Scalar::from_json(&serde_json::json!(true)),
            Some(Scalar::Boolean(true))
        );
        assert_eq!(Scalar::from_json(&Value::Null), Some(Scalar::Null));

        assert_eq!(Scalar::from_json(&serde_json::json!([1, 2])), None);
        assert_eq!(Scalar::from_json(&serde_json::json!({"a": 1})), None);
        assert_eq!(Scalar::from_json(&serde_json::json!(1.5)), None);
    }

    #[test]
    fn test_scalar_serializes_untagged() {
        let json = serde_json::to_value(Scalar::from("street")).unwrap();
        assert_eq!(json, serde_json::json!("street"));
        let json = serde_json::to_value(Scalar::from(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }

    #[test]
    fn test_contact_value_set_and_get() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");
        value.set("home", "phone", "555");
        value.set("work", "email", "c@d.com");

        assert_eq!(value.get("home", "email"), Some(&Scalar::from("a@b.com")));
        assert_eq!(value.get("work", "email"), Some(&Scalar::from("c@d.com")));
        assert_eq!(value.get("work", "phone"), None);
        assert_eq!(value.groups().collect::<Vec<_>>(), vec!["home", "work"]);
    }

    #[test]
    fn test_contact_value_equality_ignores_order() {
        let mut first = ContactValue::new();
        first.set("home", "email", "a@b.com");
        first.set("work", "phone", "555");

        let mut second = ContactValue::new();
        second.set("work", "phone", "555");
        second.set("home", "email", "a@b.com");

        assert_eq!(first, second);

        second.set("home", "phone", "556");
        assert_ne!(first, second);
    }

    #[test]
    fn test_contact_value_round_trips_through_json() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");
        value.set("home", "do_not_call", true);
        value.set("billing", "building", 12);

        let json = value.to_json();
        let back: ContactValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_contact_value_iter_walks_all_leaves() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");
        value.set("work", "phone", "555");

        let triples: Vec<_> = value.iter().collect();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].0, "home");
        assert_eq!(triples[1].1, "phone");
    }
}
