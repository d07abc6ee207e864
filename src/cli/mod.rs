//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, classification of the second
//! operand and dispatch to the date operations.

pub mod app;
pub mod args;

// Re-export main types
pub use app::*;
pub use args::*;
