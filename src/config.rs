//! Runtime settings read from the environment (and `.env`).
//!
//! | variable       | meaning                               |
//! |----------------|---------------------------------------|
//! | `EIA_API_KEY`  | EIA API key; optional                 |
//! | `EIA_API_BASE` | base URL, default `https://api.eia.gov` |
//! | `EIA_LOG`      | `tracing` filter, default `warn`      |

use crate::data::DEFAULT_BASE_URL;
use crate::provider::{API_KEY_CREDENTIAL, Credentials};

pub const API_KEY_ENV: &str = "EIA_API_KEY";
pub const API_BASE_ENV: &str = "EIA_API_BASE";
pub const LOG_ENV: &str = "EIA_LOG";

#[derive(Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_process_env()
    }

    fn from_process_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: non_empty(API_KEY_ENV),
            base_url: non_empty(API_BASE_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn credentials(&self) -> Credentials {
        match &self.api_key {
            Some(key) => Credentials::new().with(API_KEY_CREDENTIAL, key.clone()),
            None => Credentials::new(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
