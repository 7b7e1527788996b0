use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::period::NormalizedPeriod;

/// One source row after period normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// 1-based position of the row in the source table.
    pub row_number: usize,
    pub crop_name: Option<String>,
    pub country: Option<String>,
    pub season: Option<String>,
    pub current_year: Option<String>,
    pub period: NormalizedPeriod,
    /// Every source cell keyed by header.
    pub raw: BTreeMap<String, String>,
}

/// Normalized records for a whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationReport {
    pub records: Vec<NormalizedRecord>,
}

impl NormalizationReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn review_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.period.requires_review)
            .count()
    }

    pub fn resolved_count(&self) -> usize {
        self.total() - self.review_count()
    }

    pub fn has_reviews(&self) -> bool {
        self.review_count() > 0
    }

    /// Records that still need a human to look at their period.
    pub fn needing_review(&self) -> impl Iterator<Item = &NormalizedRecord> {
        self.records.iter().filter(|r| r.period.requires_review)
    }
}
