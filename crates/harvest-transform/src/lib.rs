//! Period normalization for harvest calendars.
//!
//! Turns free-text period expressions ("Oct-Feb", "Year-round",
//! "Mar 15 - May 30") and optional start/end dates into a 12-bit
//! [`MonthMask`](harvest_model::MonthMask), flagging anything it cannot
//! resolve for review.

pub mod dates;
pub mod fallback;
pub mod period;
pub mod records;

pub use dates::{
    DATE_FORMATS, MONTH_YEAR_FORMATS, extract_month_from_date, extract_month_with_formats,
    month_from_token,
};
pub use fallback::normalize_with_fallback;
pub use period::{
    ALL_YEAR_PHRASES, NormalizerConfig, PeriodNormalizer, default_normalizer, normalize_period,
};
pub use records::{RecordNormalizer, TRUTHY_FLAGS};
