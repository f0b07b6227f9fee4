//! Builder for assembling schemas from defaults and overrides.

use indexmap::{IndexMap, IndexSet};

use crate::error::{Result, RolodexError};
use crate::form::CELL_DELIMITER;
use crate::schema::{Schema, defaults};

/// Configures and builds a `Schema`.
///
/// Group and label sets resolve the same way: an explicit list replaces
/// the built-in set outright, otherwise the built-ins are extended with
/// any additional names and stripped of any excluded ones.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    valid_groups: Option<Vec<String>>,
    valid_labels: Option<Vec<String>>,
    additional_groups: Vec<String>,
    additional_labels: Vec<String>,
    exclude_groups: Vec<String>,
    exclude_labels: Vec<String>,
    label_format: Option<String>,
    display_name: Option<String>,
    group_display_names: IndexMap<String, String>,
    label_display_names: IndexMap<String, String>,
    concise: bool,
}

impl SchemaBuilder {
    /// Creates a builder that would produce the default schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the built-in group set with an explicit list.
    pub fn valid_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the built-in label set with an explicit list.
    pub fn valid_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Extends the built-in group set. Ignored when `valid_groups` is set.
    pub fn additional_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_groups
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Extends the built-in label set. Ignored when `valid_labels` is set.
    pub fn additional_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_labels
            .extend(labels.into_iter().map(Into::into));
        self
    }

    /// Removes groups from the built-in set. Ignored when `valid_groups`
    /// is set.
    pub fn exclude_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_groups
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Removes labels from the built-in set. Ignored when `valid_labels`
    /// is set.
    pub fn exclude_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_labels
            .extend(labels.into_iter().map(Into::into));
        self
    }

    /// Sets the template used to caption cells. `{field}`, `{group}`, and
    /// `{label}` are substituted when rendering.
    pub fn label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = Some(format.into());
        self
    }

    /// Sets the caption for the field as a whole.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Overrides the display name for one group.
    pub fn group_display_name(
        mut self,
        group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.group_display_names.insert(group.into(), name.into());
        self
    }

    /// Overrides display names for several groups at once.
    pub fn group_display_names<I, K, N>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<String>,
    {
        self.group_display_names.extend(
            entries
                .into_iter()
                .map(|(group, name)| (group.into(), name.into())),
        );
        self
    }

    /// Overrides the display name for one label.
    pub fn label_display_name(
        mut self,
        label: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.label_display_names.insert(label.into(), name.into());
        self
    }

    /// Overrides display names for several labels at once.
    pub fn label_display_names<I, K, N>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<String>,
    {
        self.label_display_names.extend(
            entries
                .into_iter()
                .map(|(label, name)| (label.into(), name.into())),
        );
        self
    }

    /// Switches the schema between concise and verbose canonical output.
    pub fn concise(mut self, concise: bool) -> Self {
        self.concise = concise;
        self
    }

    /// Resolves the configuration into an immutable schema.
    pub fn build(self) -> Result<Schema> {
        let groups = resolve_names(
            "group",
            self.valid_groups,
            self.additional_groups,
            self.exclude_groups,
            defaults::DEFAULT_GROUPS,
        )?;
        let labels = resolve_names(
            "label",
            self.valid_labels,
            self.additional_labels,
            self.exclude_labels,
            defaults::DEFAULT_LABELS,
        )?;

        let mut group_display_names = defaults::group_display_names();
        group_display_names.extend(self.group_display_names);
        let mut label_display_names = defaults::label_display_names();
        label_display_names.extend(self.label_display_names);

        Ok(Schema {
            groups,
            labels,
            label_format: self
                .label_format
                .unwrap_or_else(|| defaults::DEFAULT_LABEL_FORMAT.to_string()),
            display_name: self
                .display_name
                .unwrap_or_else(|| defaults::DEFAULT_DISPLAY_NAME.to_string()),
            group_display_names,
            label_display_names,
            concise: self.concise,
        })
    }
}

/// Applies the explicit-else-extended resolution rule and checks the
/// resulting names are usable as cell key segments.
fn resolve_names(
    kind: &str,
    explicit: Option<Vec<String>>,
    additional: Vec<String>,
    exclude: Vec<String>,
    builtin: &[&str],
) -> Result<IndexSet<String>> {
    let names: IndexSet<String> = match explicit {
        Some(names) => names.into_iter().collect(),
        None => {
            let mut names: IndexSet<String> =
                builtin.iter().map(|name| name.to_string()).collect();
            names.extend(additional);
            for name in &exclude {
                names.shift_remove(name.as_str());
            }
            names
        }
    };

    if names.is_empty() {
        return Err(RolodexError::InvalidSchema {
            reason: format!("at least one {kind} is required"),
        });
    }
    for name in &names {
        if name.is_empty() {
            return Err(RolodexError::InvalidSchema {
                reason: format!("{kind} names must not be empty"),
            });
        }
        if name.contains(CELL_DELIMITER) {
            return Err(RolodexError::InvalidSchema {
                reason: format!(
                    "{kind} name '{name}' contains the reserved \
                     sequence '{CELL_DELIMITER}'"
                ),
            });
        }
    }
    Ok(names)
}
