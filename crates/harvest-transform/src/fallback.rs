//! Row-level fallback between a primary and a secondary period field.

use harvest_model::NormalizedPeriod;
use tracing::debug;

use crate::period::{PeriodNormalizer, default_normalizer};

impl PeriodNormalizer {
    /// Normalizes `primary`, retrying with `secondary` when it does not resolve.
    ///
    /// Both attempts share the same date hints. The secondary result replaces
    /// the primary one only when it yields at least one month; otherwise the
    /// primary result (and its review reason) stands.
    pub fn normalize_with_fallback(
        &self,
        primary: Option<&str>,
        secondary: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> NormalizedPeriod {
        let first = self.normalize(primary, start_date, end_date);
        if !first.needs_fallback() {
            return first;
        }
        let Some(secondary) = secondary else {
            return first;
        };

        let second = self.normalize(Some(secondary), start_date, end_date);
        if second.month_mask.is_empty() {
            return first;
        }
        debug!(
            primary = primary.unwrap_or_default(),
            secondary,
            mask = second.month_mask.bits(),
            "period resolved from secondary field"
        );
        NormalizedPeriod::from_mask(second.month_mask, secondary)
    }
}

/// [`PeriodNormalizer::normalize_with_fallback`] with the default configuration.
pub fn normalize_with_fallback(
    primary: Option<&str>,
    secondary: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> NormalizedPeriod {
    default_normalizer().normalize_with_fallback(primary, secondary, start_date, end_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_model::ReviewReason;

    #[test]
    fn primary_result_kept_when_resolved() {
        let period = normalize_with_fallback(Some("Jun-Aug"), Some("Oct-Nov"), None, None);
        assert_eq!(period.parsed_month_names, vec!["Jun", "Jul", "Aug"]);
    }

    #[test]
    fn secondary_replaces_unparseable_primary() {
        let period = normalize_with_fallback(Some("see notes"), Some("Main: Nov-Jan"), None, None);
        assert!(!period.requires_review);
        assert_eq!(period.review_reason, None);
        assert_eq!(period.parsed_month_names, vec!["Nov", "Dec", "Jan"]);
    }

    #[test]
    fn primary_reason_survives_failed_fallback() {
        let period = normalize_with_fallback(Some("xyzzy"), Some("plugh"), None, None);
        assert!(period.requires_review);
        assert_eq!(
            period.review_reason,
            Some(ReviewReason::Unparseable {
                text: "xyzzy".to_string()
            })
        );
    }

    #[test]
    fn missing_primary_falls_back() {
        let period = normalize_with_fallback(None, Some("Year round"), None, None);
        assert!(period.month_mask.is_all());
    }
}
