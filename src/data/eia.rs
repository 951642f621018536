//! EIA API v2 request executor.
//!
//! One fetch is one blocking `GET {base}/v{version}/{api}/{route1}[/{route2}]/data`
//! with a fixed timeout and no retry. The parsed JSON body is returned as-is,
//! whatever the HTTP status; interpreting it is the response shaper's job.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;
use crate::query::RequestParams;

pub const DEFAULT_BASE_URL: &str = "https://api.eia.gov";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Location of a data route in the EIA API tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRoute {
    pub api: &'static str,
    pub route1: &'static str,
    pub route2: Option<&'static str>,
    pub version: u32,
}

impl DataRoute {
    /// Path below the base URL, e.g. `v2/natural-gas/cons/sum/data`.
    pub fn path(&self) -> String {
        match self.route2 {
            Some(route2) => format!("v{}/{}/{}/{}/data", self.version, self.api, self.route1, route2),
            None => format!("v{}/{}/{}/data", self.version, self.api, self.route1),
        }
    }

    pub fn data_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Anything that can execute a data request and hand back the JSON body.
///
/// Fetchers only talk to this trait, so they can run against a canned
/// response in tests.
pub trait Transport {
    fn get_json(&self, route: &DataRoute, params: &RequestParams) -> Result<Value, AppError>;
}

/// Blocking HTTP client for the EIA API.
#[derive(Debug, Clone)]
pub struct EiaClient {
    http: Client,
    base_url: String,
}

impl EiaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let base_url = base_url.into();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("eia-gas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| AppError::Transport {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { http, base_url })
    }
}

impl Transport for EiaClient {
    fn get_json(&self, route: &DataRoute, params: &RequestParams) -> Result<Value, AppError> {
        let url = route.data_url(&self.base_url);
        debug!(%url, params = ?params.redacted_pairs(), "requesting EIA data");

        let resp = self
            .http
            .get(&url)
            .query(&params.to_pairs())
            .send()
            .map_err(|source| AppError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "EIA returned a non-success status");
        }

        resp.json::<Value>()
            .map_err(|source| AppError::Transport { url, source })
    }
}
