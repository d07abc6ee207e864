//! Calendar dates and their textual forms
//!
//! This module holds the `DateValue` type along with the recognition of the
//! date shapes accepted on the command line.

pub mod parse;
pub mod value;

// Re-export main types
pub use parse::*;
pub use value::*;
