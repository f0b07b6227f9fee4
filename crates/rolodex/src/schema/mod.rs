//! Schema definition: valid groups and labels plus presentation settings.

mod builder;
mod defaults;
mod display;

use indexmap::{IndexMap, IndexSet};

pub use builder::SchemaBuilder;

/// The set of groups and labels a contact field accepts, together with the
/// presentation settings used when flattening it into form cells.
///
/// A schema is immutable once built. Normalization, validation, and
/// flattening all walk groups and labels in declaration order, so two
/// schemas built from the same configuration behave identically.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub(crate) groups: IndexSet<String>,
    pub(crate) labels: IndexSet<String>,
    pub(crate) label_format: String,
    pub(crate) display_name: String,
    pub(crate) group_display_names: IndexMap<String, String>,
    pub(crate) label_display_names: IndexMap<String, String>,
    pub(crate) concise: bool,
}

impl Schema {
    /// Creates a schema with the built-in groups, labels, and display
    /// names, in verbose mode.
    pub fn new() -> Self {
        Schema {
            groups: defaults::DEFAULT_GROUPS
                .iter()
                .map(|group| group.to_string())
                .collect(),
            labels: defaults::DEFAULT_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            label_format: defaults::DEFAULT_LABEL_FORMAT.to_string(),
            display_name: defaults::DEFAULT_DISPLAY_NAME.to_string(),
            group_display_names: defaults::group_display_names(),
            label_display_names: defaults::label_display_names(),
            concise: false,
        }
    }

    /// Starts a builder for customizing groups, labels, and presentation.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Iterates valid group names in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Iterates valid label names in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// True when `group` is one of the schema's valid groups.
    pub fn is_valid_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// True when `label` is one of the schema's valid labels.
    pub fn is_valid_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Caption for the field as a whole.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Template used to caption individual cells.
    pub fn label_format(&self) -> &str {
        &self.label_format
    }

    /// True when canonical output omits empty slots.
    pub fn is_concise(&self) -> bool {
        self.concise
    }

    /// Presentable name for a group: the configured display name when one
    /// exists, otherwise a name derived from the identifier.
    pub fn group_display_name(&self, group: &str) -> String {
        self.group_display_names
            .get(group)
            .cloned()
            .unwrap_or_else(|| display::pretty_name(group))
    }

    /// Presentable name for a label, with the same fallback as groups.
    pub fn label_display_name(&self, label: &str) -> String {
        self.label_display_names
            .get(label)
            .cloned()
            .unwrap_or_else(|| display::pretty_name(label))
    }

    /// Caption for one cell, rendered from the schema's label format with
    /// `{field}`, `{group}`, and `{label}` substituted.
    pub fn cell_label(&self, group: &str, label: &str) -> String {
        display::render_label_format(
            &self.label_format,
            &self.display_name,
            &self.group_display_name(group),
            &self.label_display_name(label),
        )
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_carries_builtin_sets() {
        let schema = Schema::new();
        assert_eq!(schema.groups().count(), 7);
        assert_eq!(schema.labels().count(), 32);
        assert!(schema.is_valid_group("home"));
        assert!(schema.is_valid_label("email"));
        assert!(!schema.is_valid_group("lair"));
        assert!(!schema.is_concise());
    }

    #[test]
    fn test_groups_iterate_in_declaration_order() {
        let schema = Schema::new();
        let groups: Vec<_> = schema.groups().collect();
        assert_eq!(groups.first(), Some(&"business"));
        assert_eq!(groups.last(), Some(&"work"));
    }

    #[test]
    fn test_cell_label_uses_display_names() {
        let schema = Schema::new();
        assert_eq!(schema.cell_label("home", "email"), "Home: Email");
        assert_eq!(
            schema.cell_label("billing", "street_address"),
            "Billing: Street address"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_pretty_name() {
        let schema = Schema::new();
        assert_eq!(schema.group_display_name("group_1"), "Group 1");
        assert_eq!(schema.label_display_name("twitter_handle"), "Twitter handle");
    }

    #[test]
    fn test_configured_display_name_wins_over_derivation() {
        let schema = Schema::new();
        assert_eq!(schema.label_display_name("do_not_email"), "Do not Email");
        assert_eq!(schema.label_display_name("address_1"), "Address (line 1)");
    }
}
