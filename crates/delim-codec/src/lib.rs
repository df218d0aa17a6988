//! Delimited text codec for typed records and untyped tables.
//!
//! # Format
//!
//! - Lines are separated by `\n`; fields by a single configurable character
//!   (default `;`).
//! - Every line, the header included, ends with one trailing separator.
//! - The header holds the external column names; data lines follow in the
//!   same column order.
//! - There is no quoting: on write, `\r`/`\n` are stripped from values and the
//!   separator is replaced by a space.
//!
//! # Example
//!
//! ```
//! use delim_codec::Codec;
//! use delim_model::impl_record;
//!
//! #[derive(Debug, Default, PartialEq)]
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
//! let codec = Codec::default();
//! let pair = Pair { a: "x".into(), b: "y".into() };
//! let text = codec.serialize(&[pair]).unwrap();
//! assert_eq!(text, "Beta;Alpha;\ny;x;\n");
//!
//! let back: Vec<Pair> = codec.deserialize_all(&text).unwrap();
//! assert_eq!(back, vec![Pair { a: "x".into(), b: "y".into() }]);
//! ```

mod codec;
mod error;
mod line;
mod options;
mod reader;
mod writer;

pub use codec::Codec;
pub use error::{CodecError, Result};
pub use line::sanitize;
pub use options::{CodecOptions, DEFAULT_SEPARATOR};
pub use reader::{Records, TableRows, read_table};
pub use writer::{write_records, write_table};
