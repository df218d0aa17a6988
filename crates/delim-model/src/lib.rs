//! Data model for the delimited-text codec.
//!
//! Two shapes of data are supported:
//!
//! - **Typed records**: any `Default` struct implementing [`Record`], which
//!   exposes a cached [`RecordType`] accessor table. Each field carries its
//!   declared name, declared [`ScalarType`] and an optional [`FieldBinding`]
//!   (external column name and explicit order).
//! - **Untyped tables**: a [`Table`] of named, typed [`Column`]s and
//!   positional [`Row`]s of [`CellValue`]s.

pub mod error;
pub mod record;
pub mod scalar;
pub mod table;

pub use error::{CoerceError, ModelError, Result};
pub use record::{FieldBinding, FieldDescriptor, Record, RecordType, RecordTypeBuilder};
pub use scalar::{FieldValue, ScalarType};
pub use table::{CellValue, Column, ColumnType, Row, Table};
