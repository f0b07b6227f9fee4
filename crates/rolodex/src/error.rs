//! Error types for the rolodex library.

use thiserror::Error;

/// Main error type for rolodex operations.
///
/// Validation reports at most one error per call: rules are checked in a
/// fixed order and the first violation wins. Normalization never produces
/// an error; malformed stored data collapses to the empty canonical
/// structure instead.
#[derive(Debug, Error)]
pub enum RolodexError {
    /// Input that could not be read as a contact mapping: text that is not
    /// valid JSON, or a value that is not an object at the top or group
    /// level.
    #[error("malformed contact data: {reason}")]
    MalformedInput { reason: String },

    /// A top-level key outside the schema's valid groups.
    #[error("unknown group '{group}'")]
    UnknownGroup { group: String },

    /// A second-level key outside the schema's valid labels.
    #[error("unknown label '{label}' in group '{group}'")]
    UnknownLabel { group: String, label: String },

    /// A leaf value with no scalar representation.
    #[error(
        "invalid value for '{group}.{label}': expected a string, integer, \
         boolean, or null, found {found}"
    )]
    InvalidLeafType {
        group: String,
        label: String,
        found: &'static str,
    },

    /// Schema construction rejected its configuration.
    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },
}

/// Result type alias for rolodex operations.
pub type Result<T> = std::result::Result<T, RolodexError>;
