//! Reporting utilities: formatted terminal output.
//!
//! Formatting lives here so fetch code stays free of presentation concerns.

pub mod format;

pub use format::*;
