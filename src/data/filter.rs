use std::fmt;

use super::model::Trip;

// ---------------------------------------------------------------------------
// Calendar name tables
// ---------------------------------------------------------------------------

/// Month names in calendar order; index + 1 is the month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names with Monday first; the index is the weekday number.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar name for a 1-indexed month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

/// Weekday name for a 0-indexed (Monday-first) weekday number.
pub fn day_name(weekday: u32) -> &'static str {
    DAY_NAMES[weekday as usize]
}

// ---------------------------------------------------------------------------
// Month / day filters
// ---------------------------------------------------------------------------

/// Restriction on the trip's start month: everything, or one named month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-indexed month number.
    Month(u32),
}

impl MonthFilter {
    /// Parse a month name or the sentinel `"all"`, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

/// Restriction on the trip's start weekday: everything, or one named day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    /// 0-indexed weekday number, Monday first.
    Day(u32),
}

impl DayFilter {
    /// Parse a weekday name or the sentinel `"all"`, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        DAY_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(|i| DayFilter::Day(i as u32))
    }

    pub fn matches(&self, weekday: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }
}

// ---------------------------------------------------------------------------
// Combined selection
// ---------------------------------------------------------------------------

/// The month/day part of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month) && self.day.matches(trip.weekday)
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            MonthFilter::All => write!(f, "month=all")?,
            MonthFilter::Month(m) => write!(f, "month={}", month_name(m))?,
        }
        match self.day {
            DayFilter::All => write!(f, " day=all"),
            DayFilter::Day(d) => write!(f, " day={}", day_name(d)),
        }
    }
}
