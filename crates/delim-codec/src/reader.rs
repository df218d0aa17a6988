//! Document reader.
//!
//! The first line is the header. Each following non-blank line becomes one
//! record or row, materialized on demand as the iterator advances.

use std::iter::Enumerate;
use std::str::Split;

use delim_map::{FieldMapping, MappedField};
use delim_model::{CellValue, Column, FieldDescriptor, Record, Row, Table};
use tracing::{debug, trace};

use crate::error::{CodecError, Result};
use crate::line::split_fields;

type Lines<'a> = Enumerate<Split<'a, char>>;

/// Splits off the header line and returns its column names with the
/// remaining lines.
fn open(text: &str, separator: char) -> (Vec<&str>, Lines<'_>) {
    let mut lines = text.split('\n').enumerate();
    let header = lines
        .next()
        .map(|(_, line)| split_fields(line, separator))
        .unwrap_or_default();
    (header, lines)
}

/// Lazy sequence of typed records read from a document.
///
/// Single pass: once consumed (or once a value fails to convert) it yields
/// nothing more. Header columns that match no field are skipped on every line.
pub struct Records<'a, R: 'static> {
    header: Vec<&'a str>,
    plan: Vec<Option<&'static FieldDescriptor<R>>>,
    lines: Lines<'a>,
    separator: char,
    failed: bool,
}

impl<'a, R: Record> Records<'a, R> {
    /// Reads `text` as records of `R`.
    ///
    /// With a mapping, each header token is matched against the resolved
    /// external names, then the declared names. Without one, only declared
    /// names are considered.
    ///
    /// `separator` is used as given; validate it with
    /// [`CodecOptions::validate`](crate::CodecOptions::validate) or go through
    /// [`Codec`](crate::Codec).
    pub fn new(text: &'a str, mapping: Option<&FieldMapping<R>>, separator: char) -> Self {
        let (header, lines) = open(text, separator);
        let plan: Vec<_> = header
            .iter()
            .map(|token| {
                let field = match mapping {
                    Some(mapping) => mapping.resolve_column(token).map(MappedField::field),
                    None => R::record_type().field(token),
                };
                if field.is_none() {
                    debug!(
                        record = R::record_type().name(),
                        column = *token,
                        "header column matches no field, ignoring its values"
                    );
                }
                field
            })
            .collect();

        Self {
            header,
            plan,
            lines,
            separator,
            failed: false,
        }
    }

    /// Column names from the header line.
    pub fn header(&self) -> &[&'a str] {
        &self.header
    }
}

impl<R: Record> Iterator for Records<'_, R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.header.is_empty() {
            return None;
        }
        loop {
            let (index, line) = self.lines.next()?;
            let values = split_fields(line, self.separator);
            if values.is_empty() {
                continue;
            }

            let line_number = index + 1;
            let mut record = R::default();
            for (position, value) in values.iter().enumerate() {
                let Some(Some(field)) = self.plan.get(position) else {
                    continue;
                };
                if let Err(source) = field.write(&mut record, value) {
                    self.failed = true;
                    return Some(Err(CodecError::Coerce {
                        line: line_number,
                        column: self.header[position].to_string(),
                        source,
                    }));
                }
            }
            trace!(line = line_number, "read record");
            return Some(Ok(record));
        }
    }
}

/// Lazy sequence of untyped rows read from a document.
///
/// Every row has one cell per header column: values are kept as text, short
/// lines are padded with [`CellValue::Missing`] and extra values are dropped.
pub struct TableRows<'a> {
    header: Vec<&'a str>,
    lines: Lines<'a>,
    separator: char,
}

impl<'a> TableRows<'a> {
    /// Does not validate `separator`.
    pub fn new(text: &'a str, separator: char) -> Self {
        let (header, lines) = open(text, separator);
        Self {
            header,
            lines,
            separator,
        }
    }

    pub fn header(&self) -> &[&'a str] {
        &self.header
    }

    /// Header names as text columns.
    pub fn columns(&self) -> Vec<Column> {
        self.header.iter().map(|name| Column::text(*name)).collect()
    }
}

impl Iterator for TableRows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header.is_empty() {
            return None;
        }
        loop {
            let (index, line) = self.lines.next()?;
            let values = split_fields(line, self.separator);
            if values.is_empty() {
                continue;
            }
            if values.len() > self.header.len() {
                trace!(
                    line = index + 1,
                    extra = values.len() - self.header.len(),
                    "dropping values beyond header width"
                );
            }
            let cells = (0..self.header.len())
                .map(|position| match values.get(position) {
                    Some(value) => CellValue::text(*value),
                    None => CellValue::Missing,
                })
                .collect();
            return Some(Row::new(cells));
        }
    }
}

/// Reads a whole document into a table of text columns.
///
/// Does not validate `separator`.
pub fn read_table(text: &str, separator: char) -> Table {
    let rows = TableRows::new(text, separator);
    let mut table = Table::new(rows.columns());
    table.rows = rows.collect();
    debug!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        "deserialized table"
    );
    table
}
