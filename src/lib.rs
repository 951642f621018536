//! `eia-gas` library crate.
//!
//! EIA natural-gas statistics (consumption, production, reserves, storage,
//! imports/exports, prices) behind a small provider/fetcher layer. The binary
//! (`eia`) is a thin wrapper around this library so that:
//!
//! - fetch logic is testable without spawning processes
//! - the provider can be embedded by other hosts

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod io;
pub mod provider;
pub mod query;
pub mod report;
