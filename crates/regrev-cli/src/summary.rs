//! Human-facing run summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use regrev_load::LoadSummary;
use regrev_model::UrlCheckRecord;

pub fn print_load_summary(summary: &LoadSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("policy_sources"),
        Cell::new(summary.policy_sources),
    ]);
    table.add_row(vec![
        Cell::new("taxonomy_mapping"),
        Cell::new(summary.taxonomy_rows),
    ]);
    println!("{table}");
}

pub fn print_url_check_summary(report: &[UrlCheckRecord]) {
    let mut ok = 0usize;
    let mut empty = 0usize;
    let mut http_errors = 0usize;
    let mut transport_errors = 0usize;
    for record in report {
        if record.error.is_empty() {
            ok += 1;
        } else if record.error == "EMPTY" {
            empty += 1;
        } else if record.error.starts_with("HTTPError") {
            http_errors += 1;
        } else {
            transport_errors += 1;
        }
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Result"), header_cell("Probes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("OK").fg(Color::Green), Cell::new(ok)]);
    table.add_row(vec![
        count_cell("HTTP error", http_errors, Color::Red),
        Cell::new(http_errors),
    ]);
    table.add_row(vec![
        count_cell("Unreachable", transport_errors, Color::Red),
        Cell::new(transport_errors),
    ]);
    table.add_row(vec![
        count_cell("No URL", empty, Color::Yellow),
        Cell::new(empty),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(label: &str, count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(label).fg(color)
    } else {
        Cell::new(label).add_attribute(Attribute::Dim)
    }
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
