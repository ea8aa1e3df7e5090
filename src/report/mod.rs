//! Formatted terminal output: estimates, warnings, and the curve table.

pub mod format;

pub use format::*;
