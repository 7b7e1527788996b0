//! Data model for harvest calendar normalization.
//!
//! Month masks, semantic column roles, and the immutable result records
//! produced by the column classifier and the period normalizer.

pub mod classification;
pub mod error;
pub mod mapping;
pub mod month;
pub mod period;
pub mod record;
pub mod role;
pub mod table;

pub use classification::ColumnClassification;
pub use error::{ModelError, Result};
pub use mapping::{ColumnAssignment, ColumnMapping};
pub use month::{ALL_MONTHS_BITS, MONTH_NAMES, Month, MonthMask, MonthRange};
pub use period::{NormalizedPeriod, ReviewReason};
pub use record::{NormalizationReport, NormalizedRecord};
pub use role::SemanticRole;
pub use table::SourceTable;
