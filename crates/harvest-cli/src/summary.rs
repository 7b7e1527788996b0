use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use harvest_cli::pipeline::NormalizeOutcome;
use harvest_map::KeywordTable;
use harvest_model::{ColumnClassification, NormalizedPeriod, SemanticRole};

pub fn print_classifications(source: &str, classifications: &[ColumnClassification]) {
    println!("Source: {source}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Role"),
        header_cell("Confidence"),
        header_cell("Samples"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for classification in classifications {
        table.add_row(vec![
            Cell::new(&classification.column_name).add_attribute(Attribute::Bold),
            role_cell(classification.proposed_role),
            confidence_cell(classification.confidence, classification.needs_mapping()),
            dim_cell(classification.sample_values.join(" | ")),
        ]);
    }
    println!("{table}");
}

pub fn print_normalization(outcome: &NormalizeOutcome) {
    println!("Source: {}", outcome.source);
    if outcome.mapping.is_empty() {
        println!("Mapping: (none)");
    } else {
        let mapping: Vec<String> = outcome
            .mapping
            .assignments()
            .iter()
            .map(|a| format!("{} -> {}", a.column, a.role))
            .collect();
        println!("Mapping: {}", mapping.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Crop"),
        header_cell("Country"),
        header_cell("Mask"),
        header_cell("Months"),
        header_cell("Review"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for record in &outcome.records.records {
        table.add_row(vec![
            Cell::new(record.row_number),
            text_cell(record.crop_name.as_deref()),
            text_cell(record.country.as_deref()),
            Cell::new(record.period.month_mask.to_binary_string()),
            months_cell(&record.period),
            review_cell(&record.period),
        ]);
    }
    let summary = outcome.summary;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format!("{} resolved", summary.resolved)).add_attribute(Attribute::Bold),
        count_cell(summary.requires_review, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_period(text: &str, period: &NormalizedPeriod) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Input"), Cell::new(text)]);
    table.add_row(vec![
        Cell::new("Mask"),
        Cell::new(format!(
            "{} ({})",
            period.month_mask.bits(),
            period.month_mask.to_binary_string()
        )),
    ]);
    table.add_row(vec![Cell::new("Months"), months_cell(period)]);
    let ranges: Vec<String> = period
        .month_mask
        .ranges()
        .iter()
        .map(ToString::to_string)
        .collect();
    table.add_row(vec![Cell::new("Windows"), text_cell(Some(ranges.join(", ").as_str()))]);
    table.add_row(vec![Cell::new("Review"), review_cell(period)]);
    println!("{table}");
}

pub fn print_roles(keywords: &KeywordTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Label"),
        header_cell("Period input"),
        header_cell("Keywords"),
    ]);
    apply_table_style(&mut table);
    for (role, words) in keywords.iter() {
        table.add_row(vec![
            Cell::new(role.as_str()).add_attribute(Attribute::Bold),
            Cell::new(role.label()),
            if role.is_temporal() {
                Cell::new("yes").fg(Color::Green)
            } else {
                dim_cell("-")
            },
            dim_cell(words.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn role_cell(role: Option<SemanticRole>) -> Cell {
    match role {
        Some(SemanticRole::Ignore) => dim_cell(SemanticRole::Ignore.as_str()),
        Some(role) => Cell::new(role.as_str()).fg(Color::Green),
        None => Cell::new("unmapped").fg(Color::Yellow),
    }
}

fn confidence_cell(confidence: f64, unmapped: bool) -> Cell {
    let cell = Cell::new(format!("{confidence:.2}"));
    if unmapped { cell.fg(Color::DarkGrey) } else { cell }
}

fn months_cell(period: &NormalizedPeriod) -> Cell {
    if period.month_mask.is_all() {
        Cell::new("all year").fg(Color::Green)
    } else if period.parsed_month_names.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(period.parsed_month_names.join(", "))
    }
}

fn review_cell(period: &NormalizedPeriod) -> Cell {
    match &period.review_reason {
        Some(reason) if period.requires_review => Cell::new(reason).fg(Color::Yellow),
        _ => dim_cell("no"),
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) if !text.is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
