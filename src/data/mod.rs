//! Upstream data access.
//!
//! - `eia`: the blocking HTTP executor and the `Transport` seam
//! - `envelope`: turning the JSON envelope into records and diagnostics

pub mod eia;
pub mod envelope;

pub use eia::{DEFAULT_BASE_URL, DataRoute, EiaClient, REQUEST_TIMEOUT, Transport};
pub use envelope::{Shaped, shape};
