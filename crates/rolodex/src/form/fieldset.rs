//! Registry mapping field identifiers to schemas and cell options.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::cards::Card;
use crate::form::cell::{Cell, CellKey, CellOptions};
use crate::form::flatten::CellFilter;
use crate::form::reassemble::Submission;
use crate::schema::Schema;
use crate::value::{ContactValue, Scalar};

/// An ordered registry of contact fields, each with its own schema,
/// optional group/label subsets, and per-cell options.
///
/// This is the editing-surface entry point: derive cells for display
/// with `cells` or `all_cells`, then fold a submission back into one
/// field's value with `clean`, looked up explicitly by field
/// identifier. Everything a surrounding form layer needs is keyed by
/// plain strings, so no knowledge of the registry's internals leaks
/// into rendering code.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: IndexMap<String, Schema>,
    group_subsets: HashMap<String, Vec<String>>,
    label_subsets: HashMap<String, Vec<String>>,
    cell_options: HashMap<String, CellOptions>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contact field with its schema.
    pub fn with_field(mut self, field: impl Into<String>, schema: Schema) -> Self {
        self.fields.insert(field.into(), schema);
        self
    }

    /// Restricts a field's cells to the given groups. The field's other
    /// groups stay out of the editing surface but keep their stored
    /// values through `clean`.
    pub fn with_group_subset<I, S>(mut self, field: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_subsets
            .insert(field.into(), groups.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts a field's cells to the given labels.
    pub fn with_label_subset<I, S>(mut self, field: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_subsets
            .insert(field.into(), labels.into_iter().map(Into::into).collect());
        self
    }

    /// Attaches rendering options to one cell, addressed by flat name.
    pub fn with_cell_options(
        mut self,
        cell: impl Into<String>,
        options: CellOptions,
    ) -> Self {
        self.cell_options.insert(cell.into(), options);
        self
    }

    /// Iterates registered field identifiers in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Looks up a registered field's schema.
    pub fn schema(&self, field: &str) -> Option<&Schema> {
        self.fields.get(field)
    }

    fn filter_for(&self, field: &str) -> CellFilter {
        let mut filter = CellFilter::new();
        if let Some(groups) = self.group_subsets.get(field) {
            filter = filter.with_groups(groups.iter().cloned());
        }
        if let Some(labels) = self.label_subsets.get(field) {
            filter = filter.with_labels(labels.iter().cloned());
        }
        filter
    }

    /// Derives the editing cells for one field, normalizing the raw
    /// current value first. Unregistered fields produce no cells.
    pub fn cells(&self, field: &str, current: Option<&Value>) -> Vec<Cell> {
        let Some(schema) = self.fields.get(field) else {
            return Vec::new();
        };
        let normalized = current.map(|value| schema.normalize(Some(value)));
        let mut cells =
            schema.cells_with(field, normalized.as_ref(), &self.filter_for(field));
        for cell in &mut cells {
            if let Some(options) = self.cell_options.get(&cell.name()) {
                cell.options = *options;
            }
        }
        cells
    }

    /// Derives cells for every registered field, in registration order,
    /// reading each field's raw value from `values` by identifier.
    pub fn all_cells(&self, values: &HashMap<String, Value>) -> Vec<Cell> {
        self.fields
            .keys()
            .flat_map(|field| self.cells(field, values.get(field)))
            .collect()
    }

    /// Folds a submission back into one field's canonical value. This is
    /// the explicit per-field cleaning lookup: `None` means the field
    /// was never registered, anything else is the updated value.
    pub fn clean(
        &self,
        field: &str,
        original: Option<&Value>,
        submission: &Submission,
    ) -> Option<ContactValue> {
        let schema = self.fields.get(field)?;
        let cells = schema.cells_with(field, None, &self.filter_for(field));
        Some(schema.reassemble(original, &cells, submission))
    }

    /// Cells marked required whose submitted value is missing or empty,
    /// in cell order.
    pub fn missing_required(&self, field: &str, submission: &Submission) -> Vec<CellKey> {
        let Some(schema) = self.fields.get(field) else {
            return Vec::new();
        };
        let mut missing = Vec::new();
        for cell in schema.cells_with(field, None, &self.filter_for(field)) {
            let name = cell.name();
            let Some(options) = self.cell_options.get(&name) else {
                continue;
            };
            if !options.required {
                continue;
            }
            if submission.get(&name).map_or(true, Scalar::is_empty) {
                missing.push(cell.key);
            }
        }
        missing
    }

    /// Renders display cards for every registered field. Subsets do not
    /// apply here: cards always cover a field's full schema.
    pub fn cards(&self, values: &HashMap<String, Value>, concise: bool) -> IndexMap<String, Card> {
        self.fields
            .iter()
            .map(|(field, schema)| {
                let value = schema.normalize(values.get(field));
                (field.clone(), schema.card(&value, concise))
            })
            .collect()
    }
}
