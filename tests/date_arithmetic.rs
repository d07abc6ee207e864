//! Integration tests for date recognition and arithmetic

mod common;

use caldate::{DateError, DateValue};
use chrono::{Datelike, Local};
use common::{date, diff, parsed, shift};

#[test]
fn test_today() {
    assert_eq!(parsed("today").as_naive(), Local::now().date_naive());
}

#[test]
fn test_month_day_uses_current_year() {
    let year = Local::now().year();
    assert_eq!(parsed("4/1"), date(year, 4, 1));
    assert_eq!(parsed("12/31"), date(year, 12, 31));
    assert_eq!(parsed("04/01").year(), year);
}

#[test]
fn test_two_digit_years() {
    assert_eq!(parsed("4/1/00"), date(2000, 4, 1));
    assert_eq!(parsed("1/1/69"), date(2069, 1, 1));
    assert_eq!(parsed("1/1/70"), date(1970, 1, 1));
    assert_eq!(parsed("06/22/10"), date(2010, 6, 22));
}

#[test]
fn test_four_digit_years() {
    assert_eq!(parsed("2/3/1985"), date(1985, 2, 3));
    assert_eq!(parsed("2/29/1988"), date(1988, 2, 29));
    assert_eq!(parsed("08/20/2005"), date(2005, 8, 20));
}

#[test]
fn test_leap_years() {
    assert_eq!(parsed("2/29/2020"), date(2020, 2, 29));
    assert_eq!(parsed("2/29/20"), date(2020, 2, 29));
    assert!(DateValue::parse("2/29/2021").is_err());
    assert!(DateValue::parse("2/29/21").is_err());
    assert!(DateValue::parse("2/29/1900").is_err());
    assert_eq!(parsed("2/29/2000"), date(2000, 2, 29));
}

#[test]
fn test_invalid_dates_rejected() {
    for text in [
        "2/0", "0/1", "00/01", "05/00", "9/31", "3/41/05", "00/01/05", "12/00/08", "13/1/2000",
        "1/32/2000", "0/3/1985", "3/0/1985", "4/31/2013",
    ] {
        assert_eq!(
            DateValue::parse(text),
            Err(DateError::Invalid(text.to_string())),
            "{} should be rejected",
            text
        );
    }
}

#[test]
fn test_unrecognized_shapes_rejected() {
    for text in ["Dec 1", "1/", "", "Today", "2013-02-01", "1/1/1", "1/1/123"] {
        assert!(DateValue::parse(text).is_err(), "{:?} should be rejected", text);
    }
}

#[test]
fn test_same_date() {
    assert_eq!(diff("today", "today"), 0);
    assert_eq!(diff("3/1", "3/1"), 0);
    assert_eq!(diff("02/29/1996", "2/29/96"), 0);
}

#[test]
fn test_positive_diff() {
    assert_eq!(diff("3/1", "3/2"), 1);
    assert_eq!(diff("02/28/1996", "2/29/96"), 1);
    assert_eq!(diff("02/28/1996", "3/1/96"), 2);
    assert_eq!(diff("1/1/03", "1/1/2004"), 365);
    assert_eq!(diff("1/1/04", "1/1/2005"), 366);
}

#[test]
fn test_negative_diff() {
    assert_eq!(diff("3/2", "3/1"), -1);
    assert_eq!(diff("2/29/96", "02/28/1996"), -1);
    assert_eq!(diff("3/1/96", "02/28/1996"), -2);
    assert_eq!(diff("1/1/2004", "1/1/03"), -365);
    assert_eq!(diff("1/1/2005", "1/1/04"), -366);
}

#[test]
fn test_days_until_is_antisymmetric() {
    let pairs = [("08/20/2005", "06/22/2010"), ("1/1/70", "1/1/69"), ("2/29/96", "today")];
    for (a, b) in pairs {
        let (a, b) = (parsed(a), parsed(b));
        assert_eq!(a.days_until(&b), -b.days_until(&a));
    }
}

#[test]
fn test_no_shift() {
    let today = parsed("today");
    assert_eq!(shift(today, 0), today);
    assert_eq!(shift(shift(today, 39), -39), today);
    assert_eq!(shift(shift(today, -88), 88), today);
}

#[test]
fn test_add_days_inverts_days_until() {
    let d = date(2013, 2, 1);
    for n in [-100_000, -366, -1, 0, 1, 28, 365, 100_000] {
        let shifted = d.add_days(n).unwrap();
        assert_eq!(shifted.days_until(&d), -n);
        assert_eq!(shifted.add_days(-n).unwrap(), d);
    }
}

#[test]
fn test_positive_shift() {
    let today = parsed("today");
    assert_eq!(shift(today, 100).as_naive(), today.as_naive() + chrono::Duration::days(100));
    assert_eq!(shift(parsed("2/28/96"), 1), parsed("2/29/96"));
    assert_eq!(shift(parsed("1/1/2003"), 365), parsed("1/1/2004"));
    assert_eq!(shift(parsed("1/1/2004"), 366), parsed("1/1/2005"));
}

#[test]
fn test_negative_shift() {
    let today = parsed("today");
    assert_eq!(shift(today, -100).as_naive(), today.as_naive() - chrono::Duration::days(100));
    assert_eq!(shift(parsed("2/29/96"), -1), parsed("2/28/96"));
    assert_eq!(shift(parsed("1/1/2004"), -365), parsed("1/1/2003"));
    assert_eq!(shift(parsed("1/1/2005"), -366), parsed("1/1/2004"));
}

#[test]
fn test_shift_before_year_one_is_out_of_range() {
    let first = parsed("1/1/0001");
    assert_eq!(
        first.add_days(-1),
        Err(DateError::OutOfRange {
            date: "01/01/0001".to_string(),
            days: -1,
        })
    );
    assert!(first.add_days(-400).is_err());

    let mut out = Vec::new();
    assert!(caldate::shift_date(&first, -400, true, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_shift_past_year_9999_is_out_of_range() {
    let last = parsed("12/31/9999");
    assert!(last.add_days(1).is_err());
    assert_eq!(shift(parsed("12/30/9999"), 1), last);
    assert_eq!(shift(last, -1).to_string(), "12/30/9999");
}

#[test]
fn test_shifted_dates_format_back_into_parseable_text() {
    for (start, n) in [("1/2/0001", -1), ("12/30/9999", 1), ("2/28/1996", 1)] {
        let shifted = shift(parsed(start), n);
        assert_eq!(parsed(&shifted.to_string()), shifted);
    }
}
