use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use delim_model::{CellValue, Table as DataTable};

use crate::commands::TableShape;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Builds a preview of the first `limit` rows.
pub fn preview_table(data: &DataTable, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(data.column_names().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in data.rows.iter().take(limit) {
        table.add_row(row.cells.iter().map(value_cell).collect::<Vec<_>>());
    }
    table
}

pub fn print_inspection(path: &Path, data: &DataTable, limit: usize) {
    println!("Document: {}", path.display());
    println!(
        "Columns: {}  Rows: {}",
        data.num_columns(),
        data.num_rows()
    );
    if data.num_columns() == 0 {
        return;
    }
    println!("{}", preview_table(data, limit));
    if data.num_rows() > limit {
        println!("... {} more rows", data.num_rows() - limit);
    }
}

pub fn print_shape(action: &str, output: &Path, shape: TableShape) {
    println!(
        "{action} {} ({} columns, {} rows)",
        output.display(),
        shape.columns,
        shape.rows
    );
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Missing => Cell::new("-").fg(Color::DarkGrey),
        other => Cell::new(other),
    }
}
