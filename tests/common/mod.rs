//! Common test utilities
#![allow(dead_code)]

use assert_cmd::Command;
use caldate::DateValue;

/// Build a date that is known to be valid
pub fn date(year: i32, month: u32, day: u32) -> DateValue {
    DateValue::from_ymd(year, month, day).unwrap()
}

/// Parse a date that is known to be valid
pub fn parsed(text: &str) -> DateValue {
    DateValue::parse(text).unwrap()
}

/// Days from `a` to `b`, without printing anything visible
pub fn diff(a: &str, b: &str) -> i64 {
    let mut sink = Vec::new();
    caldate::diff_dates(&parsed(a), &parsed(b), true, &mut sink).unwrap()
}

/// `d` shifted by `n` days, without printing anything visible
pub fn shift(d: DateValue, n: i64) -> DateValue {
    let mut sink = Vec::new();
    caldate::shift_date(&d, n, true, &mut sink).unwrap()
}

/// The caldate binary
pub fn caldate() -> Command {
    Command::cargo_bin("caldate").unwrap()
}
