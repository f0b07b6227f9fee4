//! Rolodex: schema-constrained contact data with flat form editing.
//!
//! Contact information lives in a two-level structure (group, then label)
//! constrained by an immutable [`Schema`]. The schema drives every
//! transformation: lenient normalization of stored blobs, strict
//! validation of incoming writes, and flattening of the structure into
//! addressable cells that an editing surface can render and fold back
//! into a value on submission.
//!
//! # Core Principles
//!
//! - **Lenient reads, strict writes**: stored data normalizes without
//!   ever failing; submitted data is validated with precise errors
//! - **Pure transformations**: every operation is a function of the
//!   schema and its inputs, with no shared mutable state
//! - **Subset-safe editing**: cells can expose any slice of a value, and
//!   reassembly leaves unexposed slots untouched
//!
//! # Example
//!
//! ```
//! use rolodex::{Schema, Submission};
//!
//! let schema = Schema::builder()
//!     .valid_groups(["home", "work"])
//!     .valid_labels(["email", "phone"])
//!     .concise(true)
//!     .build()?;
//!
//! let cells = schema.cells("contact", None);
//!
//! let mut submission = Submission::new();
//! submission.insert("contact__home__email".to_string(), "ada@example.org".into());
//!
//! let value = schema.reassemble(None, &cells, &submission);
//! assert_eq!(
//!     value.to_json(),
//!     serde_json::json!({"home": {"email": "ada@example.org"}})
//! );
//! # Ok::<(), rolodex::RolodexError>(())
//! ```

pub mod cards;
pub mod error;
pub mod form;
pub mod schema;
pub mod value;

mod normalize;
mod validate;

pub use cards::{Card, CardEntry};
pub use error::{Result, RolodexError};
pub use form::{
    CELL_DELIMITER, Cell, CellFilter, CellKey, CellOptions, FieldSet, InputKind,
    Submission,
};
pub use schema::{Schema, SchemaBuilder};
pub use value::{ContactValue, Scalar};
