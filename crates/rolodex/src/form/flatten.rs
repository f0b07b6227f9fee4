//! Deriving ordered editing cells from a schema.

use crate::form::cell::{Cell, CellKey, CellOptions};
use crate::schema::Schema;
use crate::value::ContactValue;

/// Restricts which groups and labels produce cells.
///
/// A filter never alters the schema or the underlying value: slots
/// outside the filter simply get no cell, which is what lets a caller
/// edit a subset of a contact value without touching the rest.
#[derive(Debug, Clone, Default)]
pub struct CellFilter {
    groups: Option<Vec<String>>,
    labels: Option<Vec<String>>,
}

impl CellFilter {
    /// A filter that allows every group and label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows only the listed groups.
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Allows only the listed labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn allows_group(&self, group: &str) -> bool {
        self.groups
            .as_ref()
            .map_or(true, |allowed| allowed.iter().any(|name| name == group))
    }

    pub(crate) fn allows_label(&self, label: &str) -> bool {
        self.labels
            .as_ref()
            .map_or(true, |allowed| allowed.iter().any(|name| name == label))
    }
}

impl Schema {
    /// Flattens the schema into one cell per group/label pair, in
    /// declaration order, pulling current values from `current`.
    pub fn cells(&self, field: &str, current: Option<&ContactValue>) -> Vec<Cell> {
        self.cells_with(field, current, &CellFilter::default())
    }

    /// Like `cells`, but restricted to the pairs the filter allows.
    pub fn cells_with(
        &self,
        field: &str,
        current: Option<&ContactValue>,
        filter: &CellFilter,
    ) -> Vec<Cell> {
        let mut cells = Vec::new();
        for group in &self.groups {
            if !filter.allows_group(group) {
                continue;
            }
            for label in &self.labels {
                if !filter.allows_label(label) {
                    continue;
                }
                cells.push(Cell {
                    key: CellKey::new(field, group.clone(), label.clone()),
                    label: self.cell_label(group, label),
                    value: current.and_then(|value| value.get(group, label).cloned()),
                    options: CellOptions::default(),
                });
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    fn schema() -> Schema {
        Schema::builder()
            .valid_groups(["home", "work"])
            .valid_labels(["email", "phone"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_cells_follow_declaration_order() {
        let cells = schema().cells("contact", None);
        let names: Vec<_> = cells.iter().map(Cell::name).collect();
        assert_eq!(
            names,
            vec![
                "contact__home__email",
                "contact__home__phone",
                "contact__work__email",
                "contact__work__phone",
            ]
        );
    }

    #[test]
    fn test_cells_carry_captions_and_values() {
        let mut value = ContactValue::new();
        value.set("home", "email", "a@b.com");
        let cells = schema().cells("contact", Some(&value));

        assert_eq!(cells[0].label, "Home: Email");
        assert_eq!(cells[0].value, Some(Scalar::from("a@b.com")));
        assert_eq!(cells[1].value, None);
    }

    #[test]
    fn test_filter_restricts_groups_and_labels() {
        let filter = CellFilter::new().with_groups(["work"]).with_labels(["phone"]);
        let cells = schema().cells_with("contact", None, &filter);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].name(), "contact__work__phone");
    }

    #[test]
    fn test_filter_with_unknown_names_matches_nothing() {
        let filter = CellFilter::new().with_groups(["lair"]);
        assert!(schema().cells_with("contact", None, &filter).is_empty());
    }

    #[test]
    fn test_empty_filter_list_yields_no_cells() {
        let filter = CellFilter::new().with_labels(Vec::<String>::new());
        assert!(schema().cells_with("contact", None, &filter).is_empty());
    }
}
