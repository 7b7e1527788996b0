//! Result of normalizing one period expression.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::MonthMask;

/// Why a period could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewReason {
    /// Nothing to parse: text and dates were empty or missing.
    Unknown,
    /// Text was present but no month could be recognised in it.
    Unparseable { text: String },
}

impl fmt::Display for ReviewReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Unparseable { text } => {
                write!(f, "unparseable: no months recognised in '{text}'")
            }
        }
    }
}

/// Active harvest months resolved from one (row, field) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPeriod {
    pub month_mask: MonthMask,
    /// Capitalized 3-letter month names in window order, deduplicated.
    pub parsed_month_names: Vec<String>,
    pub requires_review: bool,
    pub review_reason: Option<ReviewReason>,
}

impl NormalizedPeriod {
    /// A resolved period; an empty mask is reported as unparseable `text`.
    pub fn from_mask(mask: MonthMask, text: &str) -> Self {
        if mask.is_empty() {
            return Self::unparseable(text);
        }
        Self {
            month_mask: mask,
            parsed_month_names: mask.month_names(),
            requires_review: false,
            review_reason: None,
        }
    }

    /// Nothing was supplied to parse.
    pub fn unknown() -> Self {
        Self {
            month_mask: MonthMask::EMPTY,
            parsed_month_names: Vec::new(),
            requires_review: true,
            review_reason: Some(ReviewReason::Unknown),
        }
    }

    pub fn unparseable(text: &str) -> Self {
        Self {
            month_mask: MonthMask::EMPTY,
            parsed_month_names: Vec::new(),
            requires_review: true,
            review_reason: Some(ReviewReason::Unparseable {
                text: text.trim().to_string(),
            }),
        }
    }

    /// True when the period should be retried against another field.
    pub fn needs_fallback(&self) -> bool {
        self.requires_review || self.month_mask.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    #[test]
    fn empty_mask_is_unparseable() {
        let period = NormalizedPeriod::from_mask(MonthMask::EMPTY, " later ");
        assert!(period.requires_review);
        assert_eq!(
            period.review_reason,
            Some(ReviewReason::Unparseable {
                text: "later".to_string()
            })
        );
    }

    #[test]
    fn resolved_period_lists_names() {
        let period = NormalizedPeriod::from_mask(MonthMask::from_range(Month::Nov, Month::Jan), "");
        assert!(!period.requires_review);
        assert_eq!(period.parsed_month_names, vec!["Nov", "Dec", "Jan"]);
    }

    #[test]
    fn reason_mentions_text() {
        let reason = ReviewReason::Unparseable {
            text: "xyzzy".to_string(),
        };
        assert!(reason.to_string().contains("xyzzy"));
        assert_eq!(ReviewReason::Unknown.to_string(), "unknown");
    }
}
