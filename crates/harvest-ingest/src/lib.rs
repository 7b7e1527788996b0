//! Spreadsheet ingestion: decodes CSV files into source tables and pulls
//! sample values for classification.

pub mod csv_table;
pub mod error;
pub mod hints;

pub use csv_table::{read_csv_reader, read_csv_table};
pub use error::{IngestError, Result};
pub use hints::sample_values;
