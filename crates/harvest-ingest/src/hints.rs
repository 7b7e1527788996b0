//! Sample value extraction for column classification.

use std::collections::BTreeSet;

use harvest_model::SourceTable;

/// First `limit` distinct non-empty values of `column`, in row order.
///
/// Unknown columns yield no samples.
pub fn sample_values(table: &SourceTable, column: &str, limit: usize) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut samples = Vec::new();
    for value in table.column_values(column) {
        if samples.len() >= limit {
            break;
        }
        let value = value.trim();
        if value.is_empty() || !seen.insert(value) {
            continue;
        }
        samples.push(value.to_string());
    }
    samples
}
