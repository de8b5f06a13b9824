//! Terminal rendering of pivoted datasets and structure definitions.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use iamc_model::{Code, Codelist, DataStructure};
use iamc_report::PivotTable;

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Print a pivoted dataset: one row per series, measure labels as columns.
pub fn print_pivot(view: &PivotTable) {
    let mut table = Table::new();
    let headers: Vec<Cell> = view
        .key_headers
        .iter()
        .chain(view.attribute_headers.iter())
        .chain(view.measure_headers.iter())
        .map(|header| header_cell(header))
        .collect();
    table.set_header(headers);
    apply_table_style(&mut table);

    let value_offset = view.key_headers.len() + view.attribute_headers.len();
    for index in 0..view.measure_headers.len() {
        align_column(&mut table, value_offset + index, CellAlignment::Right);
    }

    for row in &view.rows {
        let mut cells: Vec<Cell> = Vec::with_capacity(value_offset + view.measure_headers.len());
        cells.extend(row.key.iter().map(Cell::new));
        cells.extend(row.attributes.iter().map(|value| dim_cell(value)));
        cells.extend(row.values.iter().map(|value| match value {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        }));
        table.add_row(cells);
    }

    println!("{table}");
}

/// Print a structure definition: components, then the code hierarchy.
pub fn print_structure(structure: &DataStructure) {
    println!("Structure: {} ({})", structure.id(), structure.name());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Concept"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    for dim in structure.dimensions() {
        let role = if structure.is_enumerated(dim) {
            "key dimension (enumerated)"
        } else if dim.id == structure.measure_dimension().id {
            "measure dimension"
        } else {
            "key dimension"
        };
        table.add_row(vec![
            Cell::new(&dim.id),
            dim_cell(&dim.concept_id),
            Cell::new(role),
        ]);
    }
    for attr in structure.attributes() {
        table.add_row(vec![
            Cell::new(&attr.id),
            dim_cell(&attr.concept_id),
            Cell::new("attribute"),
        ]);
    }
    println!("{table}");

    println!("Codes ({}):", structure.codelist().len());
    for root in structure.codelist().roots() {
        print_code(structure.codelist(), root, 1);
    }
}

fn print_code(codes: &Codelist, code: &Code, depth: usize) {
    println!("{}{}", "  ".repeat(depth), code.id);
    for child in codes.children(&code.id) {
        print_code(codes, child, depth + 1);
    }
}
