//! Recognition of textual dates
//!
//! Accepted forms are `today`, `m/d` (current year), `m/d/yy` and `m/d/yyyy`,
//! where month and day may carry a leading zero.

use crate::date::value::YEAR_RANGE;
use crate::error::{DateError, DateResult};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword resolving to the local calendar date
pub const TODAY: &str = "today";

/// Two-digit years below this value fall in the 2000s, the rest in the 1900s
pub const CENTURY_PIVOT: i32 = 70;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})(?:/([0-9]{4}|[0-9]{2}))?$").expect("valid date regex")
});

/// The year part of a recognized date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearForm {
    /// `m/d`: no year given
    Omitted,
    /// `m/d/yy`
    TwoDigit(i32),
    /// `m/d/yyyy`
    FourDigit(i32),
}

impl YearForm {
    /// Resolve to a full year, using `current_year` when omitted
    pub fn resolve(self, current_year: i32) -> i32 {
        match self {
            YearForm::Omitted => current_year,
            YearForm::TwoDigit(yy) => expand_two_digit_year(yy),
            YearForm::FourDigit(yyyy) => yyyy,
        }
    }
}

/// Map a two-digit year onto 1970..=2069
pub fn expand_two_digit_year(yy: i32) -> i32 {
    if yy < CENTURY_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Split a `m/d[/y]` string into its month, day and year parts
///
/// Only the shape is checked here; whether the numbers form a real calendar
/// date is decided by `resolve_date`.
pub fn split_date(text: &str) -> Option<(u32, u32, YearForm)> {
    let caps = DATE_SHAPE.captures(text)?;

    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    let year = match caps.get(3) {
        None => YearForm::Omitted,
        Some(m) if m.as_str().len() == 2 => YearForm::TwoDigit(m.as_str().parse().ok()?),
        Some(m) => YearForm::FourDigit(m.as_str().parse().ok()?),
    };

    Some((month, day, year))
}

/// Resolve `text` into a calendar date, with `today` as the reference date
pub fn resolve_date(text: &str, today: NaiveDate) -> DateResult<NaiveDate> {
    if text == TODAY {
        log::trace!("'{}' resolved to {}", text, today);
        return Ok(today);
    }

    let (month, day, year) = split_date(text).ok_or_else(|| DateError::Invalid(text.to_string()))?;
    let year = year.resolve(today.year());
    log::debug!("'{}' recognized as year={} month={} day={}", text, year, month, day);

    // chrono accepts year 0, MM/DD/YYYY starts at year 1
    if !YEAR_RANGE.contains(&year) {
        return Err(DateError::Invalid(text.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::Invalid(text.to_string()))
}
