//! Turning caller arguments into an upstream request.
//!
//! - `args`: the raw key/value mapping a caller supplies, and its validation into a `Query`
//! - `guard`: the annual-only downgrade applied to raw arguments before validation
//! - `params`: flattening a `Query` into EIA request parameters (facet expansion)

pub mod args;
pub mod guard;
pub mod params;

pub use args::RawArgs;
pub use params::{NATURAL_GAS_FACETS, RequestParams, make_params};
