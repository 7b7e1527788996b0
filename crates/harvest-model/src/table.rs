//! Decoded spreadsheet table with tolerant column and cell lookup.

use serde::{Deserialize, Serialize};

/// A decoded spreadsheet: ordered headers and ordered rows of text cells.
///
/// Rows may be shorter than the header; missing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a header, matching exactly first and then case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .or_else(|| {
                let wanted = name.trim();
                self.headers
                    .iter()
                    .position(|header| header.trim().eq_ignore_ascii_case(wanted))
            })
    }

    /// Cell text at (`row`, `column`); empty when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// Every cell of one column, in row order.
    pub fn column_values(&self, name: &str) -> Vec<&str> {
        let Some(index) = self.column_index(name) else {
            return Vec::new();
        };
        (0..self.rows.len()).map(|row| self.cell(row, index)).collect()
    }
}
