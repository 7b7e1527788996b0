//! Month extraction from single tokens and date strings.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use harvest_model::Month;
use regex::Regex;

/// Full-date formats, tried in order. Month-first forms come before
/// day-first ones, so an ambiguous `03/01/2020` is March.
///
/// Formats that open with `%Y` only apply to values that open with a
/// four-digit year; chrono's `%Y` would otherwise read `12-05-20` as the
/// year 12.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    // Month first
    "%m/%d/%Y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%m-%d-%y",
    "%m.%d.%Y",
    "%m.%d.%y",
    // Day first
    "%d/%m/%Y",
    "%d/%m/%y",
    "%d-%m-%Y",
    "%d-%m-%y",
    "%d.%m.%Y",
    "%d.%m.%y",
    // Textual months and other orderings
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y%m%d",    // 20240115
];

/// Month-year formats; parsed by appending a day of month.
pub const MONTH_YEAR_FORMATS: &[&str] = &["%b %Y", "%B %Y", "%m/%Y", "%m-%Y", "%Y-%m"];

static FOUR_DIGIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}").expect("Invalid year prefix regex"));

static LEADING_MONTH_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:[/-]|$)").expect("Invalid leading month regex")
});

/// Resolves a single token to a month.
///
/// Accepts month names and abbreviations in any case ("Sept." included)
/// and integers 1 to 12.
pub fn month_from_token(token: &str) -> Option<Month> {
    let token = token.trim();
    let token = token.strip_suffix('.').unwrap_or(token).trim();
    if token.is_empty() {
        return None;
    }
    Month::from_name(token).or_else(|| token.parse::<u32>().ok().and_then(Month::from_number))
}

/// Month of a date string, using [`DATE_FORMATS`].
pub fn extract_month_from_date(value: &str) -> Option<Month> {
    extract_month_with_formats(value, DATE_FORMATS)
}

/// Month of a date string, trying `formats` in order.
///
/// When no format parses, month-year forms, a leading month number
/// (`"7/2021"`, `"7"`), and finally a bare month token are tried.
pub fn extract_month_with_formats<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<Month> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let year_first = FOUR_DIGIT_YEAR.is_match(value);
    for fmt in formats {
        let fmt = fmt.as_ref();
        if fmt.starts_with("%Y") && !year_first {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Month::from_number(date.month());
        }
    }

    try_parse_month_year(value)
        .or_else(|| leading_month_number(value))
        .or_else(|| month_from_token(value))
}

fn try_parse_month_year(value: &str) -> Option<Month> {
    let padded = format!("{value} 01");
    let year_first = FOUR_DIGIT_YEAR.is_match(value);
    MONTH_YEAR_FORMATS.iter().find_map(|fmt| {
        if fmt.starts_with("%Y") && !year_first {
            return None;
        }
        NaiveDate::parse_from_str(&padded, &format!("{fmt} %d"))
            .ok()
            .and_then(|date| Month::from_number(date.month()))
    })
}

fn leading_month_number(value: &str) -> Option<Month> {
    let caps = LEADING_MONTH_NUMBER.captures(value)?;
    caps.get(1)?
        .as_str()
        .parse::<u32>()
        .ok()
        .and_then(Month::from_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_resolve_names_and_numbers() {
        assert_eq!(month_from_token("Sept"), Some(Month::Sep));
        assert_eq!(month_from_token(" sept. "), Some(Month::Sep));
        assert_eq!(month_from_token("DECEMBER"), Some(Month::Dec));
        assert_eq!(month_from_token("03"), Some(Month::Mar));
        assert_eq!(month_from_token("12"), Some(Month::Dec));
        assert_eq!(month_from_token("13"), None);
        assert_eq!(month_from_token("0"), None);
        assert_eq!(month_from_token("harvest"), None);
        assert_eq!(month_from_token(""), None);
    }

    #[test]
    fn iso_and_us_dates() {
        assert_eq!(extract_month_from_date("2024-07-15"), Some(Month::Jul));
        assert_eq!(extract_month_from_date("05/15/2020"), Some(Month::May));
        // Ambiguous: month first wins.
        assert_eq!(extract_month_from_date("03/01/2020"), Some(Month::Mar));
    }

    #[test]
    fn two_digit_years_are_not_read_as_iso() {
        assert_eq!(extract_month_from_date("12-05-20"), Some(Month::Dec));
        assert_eq!(extract_month_from_date("01-02-03"), Some(Month::Jan));
        assert_eq!(extract_month_from_date("11-01-20"), Some(Month::Nov));
        assert_eq!(extract_month_from_date("25-12-20"), Some(Month::Dec));
        assert_eq!(extract_month_from_date("12.05.20"), Some(Month::Dec));
        assert_eq!(extract_month_from_date("31.01.21"), Some(Month::Jan));
        assert_eq!(extract_month_from_date("12/05/20"), Some(Month::Dec));
        // Four-digit years still take the year-first forms.
        assert_eq!(extract_month_from_date("2020/12/05"), Some(Month::Dec));
        assert_eq!(extract_month_from_date("2021-03"), Some(Month::Mar));
    }

    #[test]
    fn day_first_when_month_first_is_impossible() {
        assert_eq!(extract_month_from_date("15/01/2024"), Some(Month::Jan));
        assert_eq!(extract_month_from_date("28.02.2023"), Some(Month::Feb));
    }

    #[test]
    fn textual_dates() {
        assert_eq!(extract_month_from_date("15-Jan-2024"), Some(Month::Jan));
        assert_eq!(extract_month_from_date("Aug 3, 2021"), Some(Month::Aug));
        assert_eq!(extract_month_from_date("9 October 2022"), Some(Month::Oct));
        assert_eq!(extract_month_from_date("Nov 2023"), Some(Month::Nov));
    }

    #[test]
    fn leading_number_heuristic() {
        assert_eq!(extract_month_from_date("7/2021"), Some(Month::Jul));
        assert_eq!(extract_month_from_date("11"), Some(Month::Nov));
        assert_eq!(extract_month_from_date("11-ish"), Some(Month::Nov));
        assert_eq!(extract_month_from_date("13/2021"), None);
    }

    #[test]
    fn bare_month_names() {
        assert_eq!(extract_month_from_date("March"), Some(Month::Mar));
        assert_eq!(extract_month_from_date("  "), None);
        assert_eq!(extract_month_from_date("soon"), None);
    }
}
