use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contacts_cli::types::ConvertResult;
use contacts_model::{CountryCount, PipelineStats, ValidationSummary};

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    if let Some(filter) = &result.country_filter {
        println!("Country filter: {filter}");
    }
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: none (validation only)"),
    }
    println!("{}", stats_table(&result.stats, result.oracle_enabled));
    if let Some(validation) = &result.validation {
        print_validation(validation);
    }
}

fn stats_table(stats: &PipelineStats, oracle_enabled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Rows read"), Cell::new(stats.rows_in)]);
    table.add_row(vec![
        Cell::new("Rows matching filter"),
        Cell::new(stats.rows_selected),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: no name, email or phone"),
        warn_cell(stats.missing_identifier_dropped),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: duplicate email"),
        warn_cell(stats.duplicate_emails_removed),
    ]);
    table.add_row(vec![
        Cell::new("Emails cleared (format/placeholder)"),
        warn_cell(stats.invalid_emails_cleared),
    ]);
    table.add_row(vec![
        Cell::new("Tagged beyond country"),
        Cell::new(stats.extra_tags).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Tagged with country only"),
        warn_cell(stats.country_only_tags),
    ]);
    table.add_row(vec![Cell::new("Untagged"), warn_cell(stats.untagged)]);
    if oracle_enabled {
        table.add_row(vec![
            Cell::new("Oracle requests"),
            Cell::new(stats.oracle_requests),
        ]);
        table.add_row(vec![
            Cell::new("Oracle tags assigned"),
            Cell::new(stats.oracle_tags_assigned),
        ]);
    } else {
        table.add_row(vec![Cell::new("Oracle"), dim_cell("disabled")]);
    }
    table.add_row(vec![
        Cell::new("Contacts out")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.contacts_out).add_attribute(Attribute::Bold),
    ]);
    table
}

fn print_validation(validation: &ValidationSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_summary_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Phone empty, email present"),
        warn_cell(validation.phone_empty_email_present),
    ]);
    table.add_row(vec![
        Cell::new("Email empty, phone present"),
        warn_cell(validation.email_empty_phone_present),
    ]);
    let countries = if validation.all_countries_valid() {
        Cell::new("all valid").fg(Color::Green)
    } else {
        Cell::new(validation.invalid_countries.join(", ")).fg(Color::Red)
    };
    table.add_row(vec![Cell::new("Countries outside GHL list"), countries]);
    println!();
    println!("Validation:");
    println!("{table}");
}

pub fn print_countries(countries: &[CountryCount]) {
    if countries.is_empty() {
        println!("No countries found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell("Contacts"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, entry) in countries.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(&entry.country),
            Cell::new(entry.count),
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn warn_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
