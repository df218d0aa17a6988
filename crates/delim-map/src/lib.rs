//! Field mapping for delimited records.
//!
//! [`FieldMapping::resolve`] turns a record type description into the ordered
//! column contract used by both the writer and the reader: one entry per
//! field, each with a resolved external name and order. Resolution is a pure
//! function of the record type; malformed bindings fall back to the declared
//! name and declaration index instead of failing.
//!
//! # Example
//!
//! ```
//! use delim_map::FieldMapping;
//! use delim_model::impl_record;
//!
//! #[derive(Debug, Default)]
//! struct Pair {
//!     a: String,
//!     b: String,
//! }
//!
//! impl_record!(Pair {
//!     a => ("Alpha", 2),
//!     b => ("Beta", 1),
//! });
//!
//! let mapping = FieldMapping::<Pair>::for_record().unwrap();
//! assert_eq!(mapping.external_names().collect::<Vec<_>>(), ["Beta", "Alpha"]);
//! ```

mod error;
mod mapping;

pub use error::{MappingError, Result};
pub use mapping::{FieldMapping, MappedField};
