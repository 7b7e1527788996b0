//! Free-text period normalization.
//!
//! Resolution runs in priority order: an explicit start/end date pair,
//! all-year phrases, range patterns, and finally a scan for individual
//! month words. The first step that produces months wins.

use std::sync::LazyLock;

use harvest_model::{Month, MonthMask, NormalizedPeriod};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dates::{DATE_FORMATS, extract_month_with_formats, month_from_token};

/// Phrases that mark a year-round harvest.
pub const ALL_YEAR_PHRASES: &[&str] = &[
    "all year",
    "year round",
    "year-round",
    "all year round",
    "perennial",
    "permanent",
    "annual crop",
    "throughout the year",
    "throughout",
    "all months",
    "whole year",
    "entire year",
    "12 months",
    "continuous",
];

const MONTH_PATTERN: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("Invalid parenthesized aside regex"));

static SEPARATOR_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:through|thru|to|till|until)\b|[\u{2013}\u{2014}]")
        .expect("Invalid separator regex")
});

/// `mar 15 - may 30`, with optional ordinal suffixes.
static MONTH_DAY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b{MONTH_PATTERN}\b\.?\s*\d{{1,2}}(?:st|nd|rd|th)?\s*-\s*{MONTH_PATTERN}\b\.?\s*\d{{1,2}}(?:st|nd|rd|th)?\b"
    ))
    .expect("Invalid month-day range regex")
});

/// `oct - feb`
static MONTH_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{MONTH_PATTERN}\b\.?\s*-\s*{MONTH_PATTERN}\b"))
        .expect("Invalid month range regex")
});

/// `3 - 5`; neither side may be part of a longer number or a date.
static NUMERIC_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d-])(\d{1,2})\s*-\s*(\d{1,2})\b").expect("Invalid numeric range regex")
});

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;,/]").expect("Invalid list separator regex"));

/// Immutable normalizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub all_year_phrases: Vec<String>,
    pub date_formats: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            all_year_phrases: ALL_YEAR_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            date_formats: DATE_FORMATS.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// Resolves period text and optional start/end dates into a month mask.
#[derive(Debug, Clone)]
pub struct PeriodNormalizer {
    config: NormalizerConfig,
    /// Phrases in the same punctuation-free form the text is compared in.
    all_year_phrases: Vec<String>,
}

static DEFAULT_NORMALIZER: LazyLock<PeriodNormalizer> = LazyLock::new(PeriodNormalizer::default);

impl Default for PeriodNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl PeriodNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        let all_year_phrases = config
            .all_year_phrases
            .iter()
            .map(|phrase| flatten_punctuation(&phrase.to_lowercase()))
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Self {
            config,
            all_year_phrases,
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Month of a start or end date cell.
    pub fn resolve_date(&self, value: &str) -> Option<Month> {
        extract_month_with_formats(value, &self.config.date_formats)
    }

    /// True when `text` contains any all-year phrase.
    pub fn is_all_year(&self, text: &str) -> bool {
        let lowered = PARENTHESIZED.replace_all(&text.to_lowercase(), " ").into_owned();
        self.matches_all_year(&lowered)
    }

    /// Normalizes one period expression.
    ///
    /// Never fails: anything unresolved comes back with `requires_review`
    /// set and a reason.
    pub fn normalize(
        &self,
        text: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> NormalizedPeriod {
        let text = text.map_or("", str::trim);

        if let Some(mask) = self.date_pair_mask(start_date, end_date) {
            trace!(mask = mask.bits(), "resolved from date pair");
            return NormalizedPeriod::from_mask(mask, text);
        }

        if text.is_empty() {
            return NormalizedPeriod::unknown();
        }

        let lowered = PARENTHESIZED.replace_all(&text.to_lowercase(), " ").into_owned();
        if self.matches_all_year(&lowered) {
            trace!(text, "all-year phrase");
            return NormalizedPeriod::from_mask(MonthMask::ALL, text);
        }

        let cleaned = SEPARATOR_WORDS.replace_all(&lowered, "-").into_owned();
        let mask = range_mask(&cleaned)
            .or_else(|| individual_months(&cleaned))
            .unwrap_or(MonthMask::EMPTY);
        NormalizedPeriod::from_mask(mask, text)
    }

    fn date_pair_mask(&self, start: Option<&str>, end: Option<&str>) -> Option<MonthMask> {
        let start = self.resolve_date(start?)?;
        let end = self.resolve_date(end?)?;
        Some(MonthMask::from_range(start, end))
    }

    fn matches_all_year(&self, lowered: &str) -> bool {
        let padded = format!(" {} ", flatten_punctuation(lowered));
        self.all_year_phrases
            .iter()
            .any(|phrase| padded.contains(&format!(" {phrase} ")))
    }
}

/// Process-wide normalizer built from the default configuration.
pub fn default_normalizer() -> &'static PeriodNormalizer {
    &DEFAULT_NORMALIZER
}

/// [`PeriodNormalizer::normalize`] with the default configuration.
pub fn normalize_period(
    text: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> NormalizedPeriod {
    default_normalizer().normalize(text, start_date, end_date)
}

/// Replaces every non-alphanumeric character with a space and collapses runs.
fn flatten_punctuation(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Union of every match of the first range pattern that resolves at all.
fn range_mask(cleaned: &str) -> Option<MonthMask> {
    [&*MONTH_DAY_RANGE, &*MONTH_RANGE, &*NUMERIC_RANGE]
        .into_iter()
        .find_map(|pattern| {
            let mut mask = MonthMask::EMPTY;
            for caps in pattern.captures_iter(cleaned) {
                let bounds = caps
                    .get(1)
                    .zip(caps.get(2))
                    .and_then(|(a, b)| month_from_token(a.as_str()).zip(month_from_token(b.as_str())));
                if let Some((start, end)) = bounds {
                    trace!(pattern = pattern.as_str(), %start, %end, "range match");
                    mask |= MonthMask::from_range(start, end);
                }
            }
            (!mask.is_empty()).then_some(mask)
        })
}

/// Months named by individual words, or a plain list of month numbers.
fn individual_months(cleaned: &str) -> Option<MonthMask> {
    let mut mask: MonthMask = cleaned
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() >= 3)
        .filter_map(Month::from_prefix)
        .collect();

    if mask.is_empty() {
        mask = month_number_list(cleaned).unwrap_or(MonthMask::EMPTY);
    }

    (!mask.is_empty()).then_some(mask)
}

/// `"3; 4; 10"`: every list item must be a month number.
fn month_number_list(cleaned: &str) -> Option<MonthMask> {
    LIST_SEPARATOR
        .split(cleaned)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            if item.chars().all(|c| c.is_ascii_digit()) {
                month_from_token(item)
            } else {
                None
            }
        })
        .collect::<Option<MonthMask>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_words_are_whole_words() {
        let cleaned = SEPARATOR_WORDS.replace_all("october to december", "-");
        assert_eq!(cleaned, "october - december");
        let cleaned = SEPARATOR_WORDS.replace_all("jan\u{2013}mar", "-");
        assert_eq!(cleaned, "jan-mar");
    }

    #[test]
    fn month_day_ranges_take_precedence() {
        let mask = range_mask("mar 15th - may 2nd").unwrap();
        assert_eq!(mask, MonthMask::from_range(Month::Mar, Month::May));
    }

    #[test]
    fn numeric_ranges_ignore_years() {
        assert_eq!(range_mask("2020-2021"), None);
        assert_eq!(
            range_mask("months 11-2"),
            Some(MonthMask::from_range(Month::Nov, Month::Feb))
        );
        // Out-of-range operands do not resolve.
        assert_eq!(range_mask("10-15"), None);
    }

    #[test]
    fn individual_month_words_and_numbers() {
        let mask = individual_months("mainly march and sept").unwrap();
        assert_eq!(mask.months().collect::<Vec<_>>(), vec![Month::Mar, Month::Sep]);
        let mask = individual_months("3; 4; 10").unwrap();
        assert_eq!(mask.months().collect::<Vec<_>>(), vec![Month::Mar, Month::Apr, Month::Oct]);
        assert_eq!(individual_months("xyzzy plugh"), None);
        // Dates are not month lists.
        assert_eq!(individual_months("03/01/2020"), None);
    }

    #[test]
    fn all_year_ignores_punctuation() {
        let normalizer = PeriodNormalizer::default();
        assert!(normalizer.is_all_year("Year-round"));
        assert!(normalizer.is_all_year("Harvested throughout the year."));
        assert!(!normalizer.is_all_year("Jan (not all year)"));
        assert!(!normalizer.is_all_year("yearly rounds"));
    }
}
