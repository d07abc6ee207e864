//! Date arithmetic operations
//!
//! Each operation computes its result, writes it to the given output in
//! either verbose or quiet form, and returns it.

pub mod ops;

// Re-export main types
pub use ops::*;
