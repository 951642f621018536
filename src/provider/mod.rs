//! The EIA provider: registered fetchers and the command paths that reach them.
//!
//! - `catalog`: static endpoint table
//! - `fetcher`: the `Fetcher` contract and the natural-gas implementation
//! - `router`: path prefixes and command registration

pub mod catalog;
pub mod fetcher;
pub mod router;

use indexmap::IndexMap;

use crate::data::Transport;
use crate::error::AppError;
use crate::query::RawArgs;

pub use catalog::{ENDPOINTS, Endpoint, Granularity};
pub use fetcher::{API_KEY_CREDENTIAL, Credentials, FetchOutput, Fetcher, NaturalGasFetcher};
pub use router::{Route, Router};

pub struct Provider {
    pub name: &'static str,
    pub description: &'static str,
    pub website: &'static str,
    pub credentials: &'static [&'static str],
    fetchers: IndexMap<&'static str, Box<dyn Fetcher>>,
    routes: Vec<Route>,
}

impl Provider {
    /// Provider with every natural-gas endpoint registered under `/natural_gas`.
    pub fn eia() -> Self {
        let fetchers = ENDPOINTS
            .iter()
            .map(|e| (e.model, Box::new(NaturalGasFetcher::new(e)) as Box<dyn Fetcher>))
            .collect();

        Self {
            name: "eia",
            description: "U.S. Energy Information Administration natural gas data.",
            website: "https://www.eia.gov/",
            credentials: &[API_KEY_CREDENTIAL],
            fetchers,
            routes: router::natural_gas().routes(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn fetcher(&self, model: &str) -> Option<&dyn Fetcher> {
        self.fetchers.get(model).map(|f| f.as_ref())
    }

    /// Resolve a command path (`/natural_gas/price/futures`, `natural_gas.price.futures`)
    /// or a model id (`PriceFutures`) to its fetcher.
    pub fn resolve(&self, target: &str) -> Result<&dyn Fetcher, AppError> {
        if let Some(f) = self.fetcher(target.trim()) {
            return Ok(f);
        }
        let path = router::normalize_path(target);
        self.routes
            .iter()
            .find(|r| r.path == path)
            .and_then(|r| self.fetcher(r.model))
            .ok_or_else(|| AppError::UnknownCommand(target.trim().to_string()))
    }

    /// Dispatch one query: resolve `target`, then run the fetcher end to end.
    pub fn query(
        &self,
        target: &str,
        args: RawArgs,
        credentials: &Credentials,
        transport: &dyn Transport,
    ) -> Result<FetchOutput, AppError> {
        self.resolve(target)?.fetch(args, credentials, transport)
    }
}
