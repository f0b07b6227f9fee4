//! Read-only display cards rendered from canonical values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::Schema;
use crate::value::{ContactValue, Scalar};

/// One rendered slot: a resolved caption plus the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub display_name: String,
    pub value: Scalar,
}

/// A display-ready view of one contact value.
///
/// Every schema group is keyed in declaration order, mapping labels to
/// captioned entries. Cards are for rendering only and are never fed
/// back into normalization or validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    groups: IndexMap<String, IndexMap<String, CardEntry>>,
}

impl Card {
    /// Iterates group names in schema declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Returns a group's entries. Present for every schema group, even
    /// when concise rendering left it without entries.
    pub fn group(&self, group: &str) -> Option<&IndexMap<String, CardEntry>> {
        self.groups.get(group)
    }

    /// Looks up one rendered entry.
    pub fn get(&self, group: &str, label: &str) -> Option<&CardEntry> {
        self.groups.get(group).and_then(|entries| entries.get(label))
    }
}

impl Schema {
    /// Renders a canonical value for display.
    ///
    /// Every schema group appears in the card. Concise rendering drops
    /// labels whose value is empty; verbose rendering emits every label,
    /// with missing slots shown as empty strings. The flag here controls
    /// rendering only and is independent of the schema's own canonical
    /// output policy.
    pub fn card(&self, value: &ContactValue, concise: bool) -> Card {
        let mut groups = IndexMap::new();
        for group in &self.groups {
            let mut entries = IndexMap::new();
            for label in &self.labels {
                let stored = value
                    .get(group, label)
                    .cloned()
                    .unwrap_or_else(Scalar::empty_text);
                if concise && stored.is_empty() {
                    continue;
                }
                entries.insert(
                    label.clone(),
                    CardEntry {
                        display_name: self.cell_label(group, label),
                        value: stored,
                    },
                );
            }
            groups.insert(group.clone(), entries);
        }
        Card { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::builder()
            .valid_groups(["home", "work"])
            .valid_labels(["email", "phone"])
            .concise(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_concise_card_keeps_every_group_key() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");

        let card = schema().card(&value, true);
        assert_eq!(card.groups().collect::<Vec<_>>(), vec!["home", "work"]);
        assert!(card.group("work").unwrap().is_empty());
    }

    #[test]
    fn test_concise_card_drops_empty_entries() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");
        value.set("home", "phone", "");

        let card = schema().card(&value, true);
        assert!(card.get("home", "email").is_some());
        assert!(card.get("home", "phone").is_none());
    }

    #[test]
    fn test_verbose_card_fills_missing_slots() {
        let card = schema().card(&ContactValue::new(), false);
        let entry = card.get("work", "phone").unwrap();
        assert_eq!(entry.value, Scalar::empty_text());
        assert_eq!(entry.display_name, "Work: Phone");
    }

    #[test]
    fn test_card_entries_carry_resolved_captions() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");

        let card = schema().card(&value, true);
        let entry = card.get("home", "email").unwrap();
        assert_eq!(entry.display_name, "Home: Email");
        assert_eq!(entry.value, Scalar::from("a@b.com"));
    }

    #[test]
    fn test_card_concise_flag_is_independent_of_schema_policy() {
        // A concise schema can still render a verbose card.
        let card = schema().card(&ContactValue::new(), false);
        assert_eq!(card.group("home").unwrap().len(), 2);
    }
}
