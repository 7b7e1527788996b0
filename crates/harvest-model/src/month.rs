//! Calendar months and the 12-bit month mask.
//!
//! A [`MonthMask`] stores one bit per month: bit 0 is January, bit 11 is
//! December. Windows whose end precedes their start (e.g. October to
//! February) wrap across the year boundary and are stored as the union of
//! both halves.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Raw value of a mask with every month set.
pub const ALL_MONTHS_BITS: u16 = 4095;

/// Month-name table: lower-cased full names and standard abbreviations.
///
/// Every abbreviation is also the 3-letter prefix of its full name, so
/// prefix lookups (see [`Month::from_prefix`]) resolve against this table.
pub const MONTH_NAMES: &[(&str, Month)] = &[
    ("jan", Month::Jan),
    ("january", Month::Jan),
    ("feb", Month::Feb),
    ("february", Month::Feb),
    ("mar", Month::Mar),
    ("march", Month::Mar),
    ("apr", Month::Apr),
    ("april", Month::Apr),
    ("may", Month::May),
    ("jun", Month::Jun),
    ("june", Month::Jun),
    ("jul", Month::Jul),
    ("july", Month::Jul),
    ("aug", Month::Aug),
    ("august", Month::Aug),
    ("sep", Month::Sep),
    ("sept", Month::Sep),
    ("september", Month::Sep),
    ("oct", Month::Oct),
    ("october", Month::Oct),
    ("nov", Month::Nov),
    ("november", Month::Nov),
    ("dec", Month::Dec),
    ("december", Month::Dec),
];

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan = 1,
    Feb = 2,
    Mar = 3,
    Apr = 4,
    May = 5,
    Jun = 6,
    Jul = 7,
    Aug = 8,
    Sep = 9,
    Oct = 10,
    Nov = 11,
    Dec = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Month for a 1-based number; `None` outside 1..=12.
    pub fn from_number(number: u32) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Exact, case-insensitive lookup in [`MONTH_NAMES`].
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        MONTH_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == lowered)
            .map(|(_, month)| *month)
    }

    /// Resolves a word by its first three letters (`"octobre"` is October).
    ///
    /// Words shorter than three characters never resolve.
    pub fn from_prefix(word: &str) -> Option<Self> {
        let lowered = word.trim().to_lowercase();
        let prefix: String = lowered.chars().take(3).collect();
        if prefix.chars().count() < 3 {
            return None;
        }
        Self::from_name(&prefix)
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// The following month, wrapping December to January.
    pub fn next(self) -> Self {
        Self::ALL[(self.number() % 12) as usize]
    }

    /// The preceding month, wrapping January to December.
    pub fn prev(self) -> Self {
        Self::ALL[((self.number() + 10) % 12) as usize]
    }

    fn bit(self) -> u16 {
        1 << (self.number() - 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Set of active months stored as a 12-bit integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct MonthMask(u16);

impl MonthMask {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(ALL_MONTHS_BITS);

    /// Builds a mask from raw bits, dropping anything above bit 11.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & ALL_MONTHS_BITS)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Months from `start` to `end` inclusive.
    ///
    /// When `start` is after `end` the window wraps: `[start, Dec] ∪ [Jan, end]`.
    pub fn from_range(start: Month, end: Month) -> Self {
        let mut mask = Self::EMPTY;
        let mut month = start;
        loop {
            mask.insert(month);
            if month == end {
                break;
            }
            month = month.next();
        }
        mask
    }

    pub fn insert(&mut self, month: Month) {
        self.0 |= month.bit();
    }

    pub fn remove(&mut self, month: Month) {
        self.0 &= !month.bit();
    }

    /// Flips a single month on or off.
    pub fn toggle(&mut self, month: Month) {
        self.0 ^= month.bit();
    }

    pub fn contains(self, month: Month) -> bool {
        self.0 & month.bit() != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_all(self) -> bool {
        self.0 == ALL_MONTHS_BITS
    }

    /// Number of active months.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Active months in calendar order.
    pub fn months(self) -> impl Iterator<Item = Month> {
        Month::ALL
            .into_iter()
            .filter(move |month| self.contains(*month))
    }

    /// Active months with a run crossing December/January kept together.
    ///
    /// Calendar order, rotated to start at the first month of the wrapping
    /// run when December and January are both active. Without a wrapping
    /// run this equals [`MonthMask::months`].
    pub fn window_order(self) -> Vec<Month> {
        if self.is_all() || !(self.contains(Month::Dec) && self.contains(Month::Jan)) {
            return self.months().collect();
        }
        let mut start = Month::Dec;
        while self.contains(start.prev()) {
            start = start.prev();
        }
        let mut ordered = Vec::with_capacity(self.len());
        let mut month = start;
        for _ in 0..12 {
            if self.contains(month) {
                ordered.push(month);
            }
            month = month.next();
        }
        ordered
    }

    /// Capitalized 3-letter names in window order.
    pub fn month_names(self) -> Vec<String> {
        self.window_order()
            .into_iter()
            .map(|month| month.abbreviation().to_string())
            .collect()
    }

    /// Contiguous runs of active months.
    ///
    /// Runs are listed by their first month in calendar order. A run that
    /// crosses the year boundary is a single range with `start > end`.
    pub fn ranges(self) -> Vec<MonthRange> {
        if self.is_empty() {
            return Vec::new();
        }
        if self.is_all() {
            return vec![MonthRange {
                start: Month::Jan,
                end: Month::Dec,
            }];
        }
        let Some(first) = Month::ALL
            .into_iter()
            .find(|month| self.contains(*month) && !self.contains(month.prev()))
        else {
            return Vec::new();
        };

        let mut ranges = Vec::new();
        let mut current: Option<MonthRange> = None;
        let mut month = first;
        for _ in 0..12 {
            if self.contains(month) {
                match current.as_mut() {
                    Some(range) => range.end = month,
                    None => {
                        current = Some(MonthRange {
                            start: month,
                            end: month,
                        })
                    }
                }
            } else if let Some(range) = current.take() {
                ranges.push(range);
            }
            month = month.next();
        }
        if let Some(range) = current {
            ranges.push(range);
        }
        ranges
    }

    /// Zero-padded 12-digit binary form; December is the leftmost digit.
    pub fn to_binary_string(self) -> String {
        format!("{:012b}", self.0)
    }
}

impl From<u16> for MonthMask {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<MonthMask> for u16 {
    fn from(mask: MonthMask) -> Self {
        mask.0
    }
}

impl FromIterator<Month> for MonthMask {
    fn from_iter<I: IntoIterator<Item = Month>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for month in iter {
            mask.insert(month);
        }
        mask
    }
}

impl BitOr for MonthMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for MonthMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for MonthMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.month_names().join(", "))
    }
}

/// A contiguous run of months; wraps the year when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: Month,
    pub end: Month,
}

impl MonthRange {
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    pub fn month_count(&self) -> usize {
        MonthMask::from_range(self.start, self.end).len()
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
