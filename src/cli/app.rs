//! Main CLI application

use crate::calc::{diff_dates, shift_date};
use crate::cli::args::{Operand, ParsedArguments};
use crate::error::{CaldateError, Result};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;
use std::io::{self, Write};

/// Usage text shown for `--help` and on argument errors
pub const USAGE: &str = "\
caldate - Calculate dates

Usage:
    # Calculate the number of days between `date1' and `date2'
    caldate [-q] date1 date2

    # Calculate the date of `date1' +/- number of days
    caldate [-q] date1 [+|-]num

OPTION:
    -q, --quiet    quiet mode (output as little as possible)

NOTE: Dates should be `today' or in the form of m/d, mm/dd (both assuming
    current year), m/d/yy, mm/dd/yy, m/d/yyyy or mm/dd/yyyy.
    Two-digit years below 70 are in the 2000s, 70 and above in the 1900s.

Examples:
    $ caldate 08/20/2005 06/22/10
    08/20/2005 to 06/22/2010: 1767 day(s)

    $ caldate 2/1/2013 28
    02/01/2013 + 28 day(s): 03/01/2013

    $ caldate -q 3/1/96 -1
    02/29/1996
";

/// Build the clap command
pub fn build_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .override_help(USAGE)
        .args_override_self(true)
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Output as little as possible")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("date")
                .value_name("DATE1")
                .help("First date")
                .required(true),
        )
        .arg(
            Arg::new("operand")
                .value_name("DATE2_OR_OFFSET")
                .help("Second date, or a signed number of days")
                .allow_negative_numbers(true)
                .required(true),
        )
}

/// Turn a clap parse failure into a usage error
pub(crate) fn usage_error(err: clap::Error) -> CaldateError {
    CaldateError::Usage {
        reason: err.to_string().trim_end().to_string(),
    }
}

/// Run the diff or shift operation selected by the arguments
pub fn dispatch<W: Write>(args: &ParsedArguments, out: &mut W) -> Result<()> {
    match args.operand {
        Operand::Date(date2) => {
            diff_dates(&args.date, &date2, args.verbose, out)?;
        }
        Operand::Offset(ndays) => {
            shift_date(&args.date, ndays, args.verbose, out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Run with a full argument vector (program name first), writing to `out`
pub fn run_from<I, T, W>(argv: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let matches = match build_command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e)?;
            out.flush()?;
            return Ok(());
        }
        Err(e) => {
            log::debug!("argument error: {}", e);
            return Err(usage_error(e));
        }
    };

    let args = ParsedArguments::from_matches(&matches)?;
    dispatch(&args, out)
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_from(std::env::args_os(), &mut out)
}
