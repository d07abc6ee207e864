//! `diff_dates` and `shift_date`

use crate::date::DateValue;
use crate::error::{signed_days, Result};
use std::io::{self, Write};

/// Count the days from `date1` to `date2` and report the signed result
///
/// Verbose output is `MM/DD/YYYY to MM/DD/YYYY: N day(s)`; quiet output is
/// just `N`.
pub fn diff_dates<W: Write>(
    date1: &DateValue,
    date2: &DateValue,
    verbose: bool,
    out: &mut W,
) -> io::Result<i64> {
    let ndays = date1.days_until(date2);
    log::debug!("diff {} -> {} = {}", date1, date2, ndays);

    if verbose {
        writeln!(out, "{} to {}: {} day(s)", date1, date2, ndays)?;
    } else {
        writeln!(out, "{}", ndays)?;
    }

    Ok(ndays)
}

/// Shift `date1` by `ndays` and report the new date
///
/// Verbose output is `MM/DD/YYYY + N day(s): MM/DD/YYYY` (or `-` for a
/// negative shift); quiet output is just the new date.
pub fn shift_date<W: Write>(
    date1: &DateValue,
    ndays: i64,
    verbose: bool,
    out: &mut W,
) -> Result<DateValue> {
    let new_date = date1.add_days(ndays)?;
    log::debug!("shift {} by {} = {}", date1, ndays, new_date);

    if verbose {
        writeln!(out, "{} {}: {}", date1, signed_days(&ndays), new_date)?;
    } else {
        writeln!(out, "{}", new_date)?;
    }

    Ok(new_date)
}
