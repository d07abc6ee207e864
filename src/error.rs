//! Error types for caldate

use std::io;
use thiserror::Error;

use crate::cli::USAGE;

/// Result type alias for caldate operations
pub type Result<T> = std::result::Result<T, CaldateError>;

/// Main error type for caldate
#[derive(Error, Debug)]
pub enum CaldateError {
    /// Wrong flag or wrong number of positional arguments
    #[error("{}", USAGE.trim_end())]
    Usage { reason: String },

    /// A date argument could not be recognized
    #[error(transparent)]
    Date(#[from] DateError),

    /// The second argument is neither a date nor an integer
    #[error("'{0}' is not a valid number or date!")]
    Number(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CaldateError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CaldateError::Usage { .. } => 2,
            _ => 1,
        }
    }
}

/// Date recognition and arithmetic errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("'{0}' is not a valid date")]
    Invalid(String),

    #[error("'{date} {}' is out of range", signed_days(.days))]
    OutOfRange { date: String, days: i64 },
}

/// Render an offset as `+ N day(s)` / `- N day(s)`
pub(crate) fn signed_days(days: &i64) -> String {
    let sign = if *days >= 0 { '+' } else { '-' };
    format!("{} {} day(s)", sign, days.unsigned_abs())
}

/// Specialized result type for date operations
pub type DateResult<T> = std::result::Result<T, DateError>;
