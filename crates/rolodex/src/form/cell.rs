//! Addressable editing cells and their flat names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Scalar;

/// Separator joining field, group, and label into a flat cell name.
pub const CELL_DELIMITER: &str = "__";

/// Identifies one editable slot: a field identifier plus a group and
/// label from that field's schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub field: String,
    pub group: String,
    pub label: String,
}

impl CellKey {
    pub fn new(
        field: impl Into<String>,
        group: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        CellKey {
            field: field.into(),
            group: group.into(),
            label: label.into(),
        }
    }

    /// The flat name used to address this cell in a submission:
    /// `field__group__label`.
    pub fn name(&self) -> String {
        format!(
            "{}{CELL_DELIMITER}{}{CELL_DELIMITER}{}",
            self.field, self.group, self.label
        )
    }

    /// Parses a flat cell name back into its parts. Returns `None`
    /// unless the name splits into exactly three non-empty segments.
    pub fn parse(name: &str) -> Option<CellKey> {
        let mut segments = name.split(CELL_DELIMITER);
        let field = segments.next()?;
        let group = segments.next()?;
        let label = segments.next()?;
        if segments.next().is_some() {
            return None;
        }
        if field.is_empty() || group.is_empty() || label.is_empty() {
            return None;
        }
        Some(CellKey::new(field, group, label))
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{CELL_DELIMITER}{}{CELL_DELIMITER}{}",
            self.field, self.group, self.label
        )
    }
}

/// The input type a renderer should offer for a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Text,
    Integer,
    Boolean,
}

/// Rendering and submission hints attached to a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOptions {
    #[serde(default)]
    pub input: InputKind,
    #[serde(default)]
    pub required: bool,
}

impl CellOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: InputKind) -> Self {
        self.input = input;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// One renderable editing cell: its key, resolved caption, current
/// value, and rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub key: CellKey,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
    #[serde(default)]
    pub options: CellOptions,
}

impl Cell {
    /// The flat submission name for this cell.
    pub fn name(&self) -> String {
        self.key.name()
    }
}
