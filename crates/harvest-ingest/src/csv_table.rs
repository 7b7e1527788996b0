use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use harvest_model::SourceTable;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Fills blank headers and disambiguates repeated ones ("Notes", "Notes 2").
fn finalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());
    for (index, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("column_{}", index + 1)
        } else {
            header
        };
        let mut candidate = base.clone();
        let mut suffix = 2;
        while headers.contains(&candidate) {
            candidate = format!("{base} {suffix}");
            suffix += 1;
        }
        if candidate != base {
            warn!(header = %base, renamed = %candidate, "duplicate header renamed");
        }
        headers.push(candidate);
    }
    headers
}

/// Reads a CSV file into a [`SourceTable`].
///
/// The first non-blank row is the header. Cells are trimmed, blank rows are
/// skipped, and every row is padded or cut to the header width.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_reader(file, path)
}

/// Reads CSV content from any reader; `origin` is only used in errors.
pub fn read_csv_reader<R: Read>(reader: R, origin: &Path) -> Result<SourceTable> {
    let origin: PathBuf = origin.to_path_buf();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::from_csv(origin.clone(), err))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut rows = raw_rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyCsv { path: origin });
    };
    let headers = finalize_headers(header_row.iter().map(|h| normalize_header(h)).collect());

    let mut table = SourceTable::new(headers);
    let width = table.headers.len();
    for mut row in rows {
        if row.len() > width && row[width..].iter().any(|cell| !cell.is_empty()) {
            warn!(
                path = %origin.display(),
                row = table.len() + 1,
                extra = row.len() - width,
                "row has more cells than the header; extra cells dropped"
            );
        }
        row.resize(width, String::new());
        table.push_row(row);
    }

    debug!(
        path = %origin.display(),
        columns = width,
        rows = table.len(),
        "read csv table"
    );
    Ok(table)
}
