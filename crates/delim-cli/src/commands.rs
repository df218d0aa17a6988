//! Command implementations. File I/O lives here; the codec only sees text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use delim_codec::Codec;
use delim_model::{CellValue, Column, Table};
use tracing::{info, info_span};

/// Shape of a table written by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    pub columns: usize,
    pub rows: usize,
}

impl TableShape {
    pub fn of(table: &Table) -> Self {
        Self {
            columns: table.num_columns(),
            rows: table.num_rows(),
        }
    }
}

/// Reads a delimited document into a table of text columns.
pub fn load_table(path: &Path, codec: Codec) -> Result<Table> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(codec.deserialize_table(&text))
}

fn save_table(path: &Path, table: &Table, codec: Codec) -> Result<()> {
    let text = codec.serialize_table(table);
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}

pub fn run_inspect(path: &Path, codec: Codec) -> Result<Table> {
    let _span = info_span!("inspect", path = %path.display()).entered();
    let table = load_table(path, codec)?;
    info!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        "loaded document"
    );
    Ok(table)
}

/// Rewrites a document with a different separator.
pub fn run_convert(input: &Path, output: &Path, from: Codec, to: Codec) -> Result<TableShape> {
    let _span = info_span!("convert", input = %input.display(), output = %output.display())
        .entered();
    let table = load_table(input, from)?;
    save_table(output, &table, to)?;
    let shape = TableShape::of(&table);
    info!(
        columns = shape.columns,
        rows = shape.rows,
        from = ?from.separator(),
        to = ?to.separator(),
        "converted document"
    );
    Ok(shape)
}

/// Reads an RFC 4180 CSV file (first record is the header) and writes it as a
/// delimited document.
pub fn run_import_csv(input: &Path, output: &Path, codec: Codec) -> Result<TableShape> {
    let _span = info_span!("import_csv", input = %input.display()).entered();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(input)
        .with_context(|| format!("open CSV {}", input.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read CSV header of {}", input.display()))?
        .clone();

    let mut table = Table::new(headers.iter().map(Column::text).collect());
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read CSV record {}", index + 1))?;
        let cells: Vec<CellValue> = record.iter().map(CellValue::text).collect();
        table
            .push_row(cells)
            .with_context(|| format!("CSV record {}", index + 1))?;
    }

    save_table(output, &table, codec)?;
    let shape = TableShape::of(&table);
    info!(columns = shape.columns, rows = shape.rows, "imported CSV");
    Ok(shape)
}

/// Writes a delimited document out as an RFC 4180 CSV file.
pub fn run_export_csv(input: &Path, output: &Path, codec: Codec) -> Result<TableShape> {
    let _span = info_span!("export_csv", output = %output.display()).entered();
    let table = load_table(input, codec)?;
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("create CSV {}", output.display()))?;
    writer
        .write_record(table.column_names())
        .context("write CSV header")?;
    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(ToString::to_string))
            .context("write CSV record")?;
    }
    writer.flush().context("flush CSV output")?;

    let shape = TableShape::of(&table);
    info!(columns = shape.columns, rows = shape.rows, "exported CSV");
    Ok(shape)
}
