//! Terminal rendering of mapping, validation, and import results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::PipelineOutcome;

pub fn print_outcome(outcome: &PipelineOutcome) {
    println!("Rows: {}", outcome.rows);
    print_mapping(outcome);
    print_issues(outcome);
    if let Some(report) = &outcome.report {
        print_report(report.imported, report.skipped, report.success);
    }
}

fn print_mapping(outcome: &PipelineOutcome) {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![header_cell("Target"), header_cell("Source column")]);
    for (target, source) in &outcome.mapping.mapped {
        table.add_row(vec![Cell::new(target), Cell::new(source)]);
    }
    for target in &outcome.mapping.unmapped_targets {
        table.add_row(vec![
            Cell::new(target),
            Cell::new("(not mapped)").fg(Color::DarkGrey),
        ]);
    }
    println!("{table}");
    if !outcome.mapping.unused_headers.is_empty() {
        println!(
            "Unused source columns: {}",
            outcome.mapping.unused_headers.join(", ")
        );
    }
}

fn print_issues(outcome: &PipelineOutcome) {
    if outcome.issues.is_empty() {
        println!("No validation issues.");
        return;
    }
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Problem"),
    ]);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for issue in &outcome.issues {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.column),
            Cell::new(&issue.value),
            Cell::new(&issue.message).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
    println!("{} validation issue(s).", outcome.issues.len());
}

fn print_report(imported: usize, skipped: usize, success: bool) {
    let status = if success { "ok" } else { "FAILED" };
    println!("Import {status}: {imported} imported, {skipped} skipped");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
