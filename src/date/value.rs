//! The `DateValue` type

use crate::date::parse::resolve_date;
use crate::error::{DateError, DateResult};
use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Years a `DateValue` can hold; `MM/DD/YYYY` has room for four digits
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// An immutable, always-valid Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// The current local calendar date
    pub fn today() -> Self {
        DateValue(Local::now().date_naive())
    }

    /// Build a date from its parts, failing on impossible combinations
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DateResult<Self> {
        if !YEAR_RANGE.contains(&year) {
            return Err(DateError::Invalid(format!("{}/{}/{}", month, day, year)));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateValue)
            .ok_or_else(|| DateError::Invalid(format!("{}/{}/{}", month, day, year)))
    }

    /// Parse `today`, `m/d`, `m/d/yy` or `m/d/yyyy`
    pub fn parse(text: &str) -> DateResult<Self> {
        Self::parse_relative_to(text, Self::today())
    }

    /// Parse with an explicit reference date for `today` and omitted years
    pub fn parse_relative_to(text: &str, today: DateValue) -> DateResult<Self> {
        resolve_date(text, today.0).map(DateValue)
    }

    /// The date `n` days later (earlier when `n` is negative)
    pub fn add_days(&self, n: i64) -> DateResult<Self> {
        let magnitude = Days::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };

        shifted
            .filter(|date| YEAR_RANGE.contains(&date.year()))
            .map(DateValue)
            .ok_or_else(|| DateError::OutOfRange {
                date: self.to_string(),
                days: n,
            })
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &DateValue) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue(date)
    }
}

impl FromStr for DateValue {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateValue::parse(s)
    }
}

impl fmt::Display for DateValue {
    /// Zero-padded `MM/DD/YYYY`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month(), self.day(), self.year())
    }
}
