//! Document writer.
//!
//! Every line, header included, is written as `value<sep>value<sep>...<sep>\n`.

use delim_map::FieldMapping;
use delim_model::{CellValue, Table};
use tracing::debug;

use crate::line::{push_line, sanitize};

/// Writes `records` using `mapping` as the column contract.
///
/// The header lists the external names in mapping order. Each record yields
/// one line with one value per mapping entry; absent values are empty and
/// every value is passed through [`sanitize`].
///
/// `separator` is used as given; validate it with
/// [`CodecOptions::validate`](crate::CodecOptions::validate) or go through
/// [`Codec`](crate::Codec).
pub fn write_records<'r, R, I>(records: I, mapping: &FieldMapping<R>, separator: char) -> String
where
    R: 'static,
    I: IntoIterator<Item = &'r R>,
{
    let mut out = String::new();
    push_line(&mut out, mapping.external_names(), separator);

    let mut count = 0usize;
    for record in records {
        for entry in mapping {
            if let Some(text) = entry.field().read(record) {
                out.push_str(&sanitize(&text, separator));
            }
            out.push(separator);
        }
        out.push('\n');
        count += 1;
    }

    debug!(
        record = mapping.record_name(),
        records = count,
        columns = mapping.len(),
        "serialized records"
    );
    out
}

/// Writes an untyped table.
///
/// The header is the column names as given. Cells in text columns are
/// sanitized; cells in other columns are written as rendered. Missing cells,
/// including those of a row shorter than the column list, are empty.
///
/// Does not validate `separator`.
pub fn write_table(table: &Table, separator: char) -> String {
    let mut out = String::new();
    push_line(&mut out, table.column_names(), separator);

    for row in &table.rows {
        for (index, column) in table.columns.iter().enumerate() {
            match row.get(index) {
                Some(CellValue::Missing) | None => {}
                Some(cell) => {
                    let text = cell.to_string();
                    if column.data_type.is_text() {
                        out.push_str(&sanitize(&text, separator));
                    } else {
                        out.push_str(&text);
                    }
                }
            }
            out.push(separator);
        }
        out.push('\n');
    }

    debug!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        "serialized table"
    );
    out
}

#[cfg(test)]
mod tests {
    use delim_model::{Column, ColumnType, Row, impl_record};

    use super::*;

    #[derive(Debug, Default)]
    struct Note {
        title: String,
        pages: Option<u16>,
    }

    impl_record!(Note {
        title => ("Title", 0),
        pages => ("Pages", 1),
    });

    #[test]
    fn absent_values_are_empty() {
        let mapping = FieldMapping::<Note>::for_record().unwrap();
        let notes = [Note {
            title: "draft".to_string(),
            pages: None,
        }];
        assert_eq!(
            write_records(&notes, &mapping, ';'),
            "Title;Pages;\ndraft;;\n"
        );
    }

    #[test]
    fn text_values_are_sanitized() {
        let mapping = FieldMapping::<Note>::for_record().unwrap();
        let notes = [Note {
            title: "a;b\r\nc".to_string(),
            pages: Some(4),
        }];
        assert_eq!(
            write_records(&notes, &mapping, ';'),
            "Title;Pages;\na bc;4;\n"
        );
    }

    #[test]
    fn table_sanitizes_only_text_columns() {
        let table = Table {
            columns: vec![
                Column::text("Name"),
                Column::new("Score", ColumnType::Float),
            ],
            rows: vec![
                Row::new(vec![CellValue::text("x,y"), CellValue::Float(1.5)]),
                Row::new(vec![CellValue::Missing]),
            ],
        };
        assert_eq!(write_table(&table, ','), "Name,Score,\nx y,1.5,\n,,\n");
    }

    #[test]
    fn empty_table_writes_blank_header() {
        assert_eq!(write_table(&Table::default(), ';'), "\n");
    }
}
