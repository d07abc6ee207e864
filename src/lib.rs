//! caldate - date arithmetic on the command line
//!
//! Given two dates, caldate reports the number of days between them; given a
//! date and a signed number of days, it reports the shifted date.

// Public modules
pub mod calc;
pub mod cli;
pub mod date;
pub mod error;

// Re-export commonly used types
pub use calc::{diff_dates, shift_date};
pub use cli::{parse_args, Operand, ParsedArguments};
pub use date::DateValue;
pub use error::{CaldateError, DateError, Result};

/// Current version of caldate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
