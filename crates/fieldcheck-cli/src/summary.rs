//! Table rendering for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use fieldcheck_model::{DataTypeTag, FieldChange};
use fieldcheck_normalize::rule_for;
use fieldcheck_validate::ValidationReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Dim)
}

pub fn changes_table(changes: &[FieldChange]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    for change in changes {
        table.add_row(vec![
            Cell::new(&change.field),
            Cell::new(format!("{:?}", change.old_value)),
            Cell::new(format!("{:?}", change.new_value)).fg(Color::Green),
        ]);
    }
    table
}

pub fn report_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Verdict"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for result in &report.results {
        let verdict = match (result.accept, result.inconclusive) {
            (false, _) => Cell::new("rejected").fg(Color::Red),
            (true, true) => Cell::new("inconclusive").fg(Color::Yellow),
            (true, false) => Cell::new("accepted").fg(Color::Green),
        };
        let message = match &result.message {
            Some(message) => Cell::new(message),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&result.field),
            Cell::new(result.kind),
            verdict,
            message,
        ]);
    }
    table
}

pub fn tags_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tag"), header_cell("Action")]);
    apply_table_style(&mut table);
    for tag in DataTypeTag::VOCABULARY {
        let action = rule_for(&tag);
        table.add_row(vec![Cell::new(tag.as_str()), Cell::new(action.display_name())]);
    }
    table.add_row(vec![
        dim_cell("(other)"),
        Cell::new(rule_for(&DataTypeTag::None).display_name()),
    ]);
    table
}

pub fn print_changes(changes: &[FieldChange], written: bool) {
    if changes.is_empty() {
        println!("No changes.");
        return;
    }
    println!("{}", changes_table(changes));
    if written {
        println!("{} field(s) written.", changes.len());
    }
}

pub fn print_report(report: &ValidationReport) {
    if report.results.is_empty() {
        println!("No email or telephone fields to validate.");
        return;
    }
    println!("{}", report_table(report));
    println!(
        "{} checked, {} rejected, {} inconclusive",
        report.results.len(),
        report.failure_count(),
        report.inconclusive_count()
    );
}
