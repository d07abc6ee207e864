//! Parsed command-line arguments

use crate::cli::app::{build_command, usage_error};
use crate::date::{DateValue, TODAY};
use crate::error::{CaldateError, Result};
use clap::ArgMatches;
use std::ffi::OsString;

/// The second positional argument, once classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Another date: report the difference
    Date(DateValue),
    /// A signed day count: report the shifted date
    Offset(i64),
}

impl Operand {
    /// Classify and parse `text`
    ///
    /// Anything containing `/`, or the `today` keyword, is a date; everything
    /// else has to be a signed base-10 integer.
    pub fn parse(text: &str) -> Result<Self> {
        if is_date(text) {
            log::debug!("'{}' classified as a date", text);
            Ok(Operand::Date(DateValue::parse(text)?))
        } else {
            log::debug!("'{}' classified as an offset", text);
            text.parse::<i64>()
                .map(Operand::Offset)
                .map_err(|_| CaldateError::Number(text.to_string()))
        }
    }
}

/// Whether `text` should be read as a date rather than a number
pub fn is_date(text: &str) -> bool {
    text.contains('/') || text == TODAY
}

/// Arguments of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedArguments {
    /// First date
    pub date: DateValue,
    /// Date or offset
    pub operand: Operand,
    /// False in quiet mode
    pub verbose: bool,
}

impl ParsedArguments {
    /// Build from clap matches produced by `build_command`
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let verbose = !matches.get_flag("quiet");

        let date_text = positional(matches, "date")?;
        let operand_text = positional(matches, "operand")?;

        let date = DateValue::parse(date_text)?;
        let operand = Operand::parse(operand_text)?;

        Ok(ParsedArguments {
            date,
            operand,
            verbose,
        })
    }
}

/// Parse the argument list (without the program name)
///
/// Help and version requests are reported as usage errors here; `run`
/// handles them before getting this far.
pub fn parse_args<I, T>(argv: I) -> Result<ParsedArguments>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = std::iter::once(OsString::from(env!("CARGO_PKG_NAME")))
        .chain(argv.into_iter().map(Into::into));
    let matches = build_command().try_get_matches_from(args).map_err(usage_error)?;
    ParsedArguments::from_matches(&matches)
}

fn positional<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| CaldateError::Usage {
            reason: format!("missing argument '{}'", id),
        })
}
