//! The codec entry point.

use delim_map::FieldMapping;
use delim_model::{Record, Table};

use crate::error::Result;
use crate::options::{CodecOptions, DEFAULT_SEPARATOR};
use crate::reader::{Records, TableRows, read_table};
use crate::writer::{write_records, write_table};

/// Converts records and tables to and from delimited text.
///
/// The separator is fixed at construction; a `Codec` is a plain `Copy` value
/// and can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    separator: char,
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Codec {
    /// Creates a codec from validated options.
    pub fn new(options: &CodecOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            separator: options.separator,
        })
    }

    pub fn with_separator(separator: char) -> Result<Self> {
        Self::new(&CodecOptions::new().with_separator(separator))
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Writes `records` using the resolved mapping of `R`.
    pub fn serialize<'r, R, I>(&self, records: I) -> Result<String>
    where
        R: Record,
        I: IntoIterator<Item = &'r R>,
    {
        let mapping = FieldMapping::<R>::for_record()?;
        Ok(self.serialize_with(records, &mapping))
    }

    /// Writes `records` using a caller-supplied mapping.
    pub fn serialize_with<'r, R, I>(&self, records: I, mapping: &FieldMapping<R>) -> String
    where
        R: 'static,
        I: IntoIterator<Item = &'r R>,
    {
        write_records(records, mapping, self.separator)
    }

    /// Reads `text` lazily as records of `R`, matching header columns through
    /// the resolved mapping of `R`.
    pub fn deserialize<'a, R: Record>(&self, text: &'a str) -> Result<Records<'a, R>> {
        let mapping = FieldMapping::<R>::for_record()?;
        Ok(Records::new(text, Some(&mapping), self.separator))
    }

    /// Reads `text` lazily as records of `R`.
    ///
    /// Passing `None` matches header columns against declared field names only.
    pub fn deserialize_with<'a, R: Record>(
        &self,
        text: &'a str,
        mapping: Option<&FieldMapping<R>>,
    ) -> Records<'a, R> {
        Records::new(text, mapping, self.separator)
    }

    /// Reads every record of `text`, failing on the first value that does not
    /// convert.
    pub fn deserialize_all<R: Record>(&self, text: &str) -> Result<Vec<R>> {
        self.deserialize(text)?.collect()
    }

    pub fn serialize_table(&self, table: &Table) -> String {
        write_table(table, self.separator)
    }

    /// Reads `text` lazily as untyped rows.
    pub fn table_rows<'a>(&self, text: &'a str) -> TableRows<'a> {
        TableRows::new(text, self.separator)
    }

    pub fn deserialize_table(&self, text: &str) -> Table {
        read_table(text, self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn rejects_line_terminator_separator() {
        assert!(matches!(
            Codec::with_separator('\n'),
            Err(CodecError::InvalidSeparator { separator: '\n', .. })
        ));
    }

    #[test]
    fn default_uses_semicolon() {
        assert_eq!(Codec::default().separator(), ';');
        assert_eq!(Codec::with_separator('|').unwrap().separator(), '|');
    }
}
