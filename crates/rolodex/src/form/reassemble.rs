//! Folding submitted cell values back into canonical form.

use std::collections::HashMap;

use serde_json::Value;

use crate::form::cell::Cell;
use crate::schema::Schema;
use crate::value::{ContactValue, Scalar};

/// Submitted values keyed by flat cell name.
pub type Submission = HashMap<String, Scalar>;

impl Schema {
    /// Folds a submission into the normalized original value.
    ///
    /// `cells` must be cells previously derived from this schema for the
    /// same field. Slots with no cell, and cells with no submitted
    /// value, keep whatever the original held. A submitted empty value
    /// overwrites the slot with an empty string in verbose mode; in
    /// concise mode it is ignored entirely, so an empty cell never
    /// creates its key and never clears a stored value.
    ///
    /// Cells address disjoint slots, so processing order does not affect
    /// the result, and folding the same submission twice changes
    /// nothing further.
    pub fn reassemble(
        &self,
        original: Option<&Value>,
        cells: &[Cell],
        submission: &Submission,
    ) -> ContactValue {
        let mut result = self.normalize(original);
        for cell in cells {
            let Some(submitted) = submission.get(&cell.name()) else {
                continue;
            };
            if submitted.is_empty() {
                if !self.concise {
                    result.set(
                        cell.key.group.clone(),
                        cell.key.label.clone(),
                        Scalar::empty_text(),
                    );
                }
            } else {
                result.set(
                    cell.key.group.clone(),
                    cell.key.label.clone(),
                    submitted.clone(),
                );
            }
        }
        result
    }
}
