//! Flattened editing surface: cells, filters, submissions, and field
//! registries.

mod cell;
mod fieldset;
mod flatten;
mod reassemble;

pub use cell::{CELL_DELIMITER, Cell, CellKey, CellOptions, InputKind};
pub use fieldset::FieldSet;
pub use flatten::CellFilter;
pub use reassemble::Submission;
