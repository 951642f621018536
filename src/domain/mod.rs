//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - query-side enums (`Frequency`, `Process`) and the validated `Query`
//! - the static field-to-wire alias table
//! - the typed response row (`Record`, `RecordValue`)

pub mod types;

pub use types::*;
