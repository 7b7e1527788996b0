//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}{}: {message}", at_line(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// No header row: the file is empty or every row is blank.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

impl IngestError {
    pub(crate) fn from_csv(path: PathBuf, err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::FileRead { path, source },
            _ => Self::CsvParse {
                path,
                line,
                message,
            },
        }
    }
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_line() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("crops.csv"),
            line: Some(4),
            message: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse CSV crops.csv at line 4: bad quote");
    }

    #[test]
    fn empty_file_message() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("empty.csv"),
        };
        assert!(err.to_string().contains("empty.csv"));
    }
}
