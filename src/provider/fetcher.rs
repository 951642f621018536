//! Fetchers: the three-step contract every endpoint implements.
//!
//! 1. `transform_query`: raw caller arguments -> validated `Query`
//! 2. `extract_data`: `Query` + credentials -> upstream JSON
//! 3. `transform_data`: upstream JSON -> records
//!
//! `fetch` chains them and collects diagnostics from every step.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::data::{Shaped, Transport, shape};
use crate::diagnostics::Diagnostic;
use crate::domain::{Query, Record};
use crate::error::AppError;
use crate::provider::catalog::{Endpoint, Granularity};
use crate::query::{RawArgs, guard, make_params};

/// Name of the EIA credential in a [`Credentials`] store.
pub const API_KEY_CREDENTIAL: &str = "eia_api_key";

/// Named secrets handed to fetchers.
#[derive(Clone, Default)]
pub struct Credentials {
    entries: IndexMap<String, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, secret: impl Into<String>) -> Self {
        self.entries.insert(name.into(), secret.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Records plus every diagnostic raised while producing them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOutput {
    pub model: &'static str,
    pub records: Vec<Record>,
    /// Rows available upstream; larger than `records.len()` when truncated.
    pub total: Option<u64>,
    pub diagnostics: Vec<Diagnostic>,
}

pub trait Fetcher {
    fn endpoint(&self) -> &'static Endpoint;

    fn transform_query(&self, args: RawArgs) -> Result<(Query, Vec<Diagnostic>), AppError>;

    fn extract_data(
        &self,
        query: &Query,
        credentials: &Credentials,
        transport: &dyn Transport,
    ) -> Result<Value, AppError>;

    fn transform_data(&self, query: &Query, data: Value) -> Result<Shaped, AppError>;

    fn fetch(
        &self,
        args: RawArgs,
        credentials: &Credentials,
        transport: &dyn Transport,
    ) -> Result<FetchOutput, AppError> {
        let (query, mut diagnostics) = self.transform_query(args)?;
        let data = self.extract_data(&query, credentials, transport)?;
        let shaped = self.transform_data(&query, data)?;
        diagnostics.extend(shaped.diagnostics);

        Ok(FetchOutput {
            model: self.endpoint().model,
            records: shaped.records,
            total: shaped.total,
            diagnostics,
        })
    }
}

/// Fetcher for any natural-gas route in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct NaturalGasFetcher {
    endpoint: &'static Endpoint,
}

impl NaturalGasFetcher {
    pub fn new(endpoint: &'static Endpoint) -> Self {
        Self { endpoint }
    }
}

impl Fetcher for NaturalGasFetcher {
    fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    fn transform_query(&self, args: RawArgs) -> Result<(Query, Vec<Diagnostic>), AppError> {
        let (args, diagnostics) = match self.endpoint.granularity {
            Granularity::Any => (args, Vec::new()),
            Granularity::AnnualOnly => guard::annual_only(args),
        };
        Ok((Query::from_args(&args)?, diagnostics))
    }

    fn extract_data(
        &self,
        query: &Query,
        credentials: &Credentials,
        transport: &dyn Transport,
    ) -> Result<Value, AppError> {
        // An absent key is sent as "" and left for the EIA to reject.
        let api_key = credentials.get(API_KEY_CREDENTIAL).unwrap_or_default();
        if api_key.is_empty() {
            debug!(model = self.endpoint.model, "no EIA api key configured");
        }

        let mut params = make_params(query, self.endpoint.facets);
        params.insert("api_key", api_key);
        transport.get_json(&self.endpoint.route, &params)
    }

    fn transform_data(&self, _query: &Query, data: Value) -> Result<Shaped, AppError> {
        shape(data)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::data::DataRoute;
    use crate::diagnostics::DiagnosticKind;
    use crate::domain::Frequency;
    use crate::provider::catalog::by_model;
    use crate::query::RequestParams;

    /// Transport returning a fixed body and recording what it was asked for.
    pub(crate) struct CannedTransport {
        pub body: Value,
        pub calls: RefCell<Vec<(DataRoute, RequestParams)>>,
    }

    impl CannedTransport {
        pub(crate) fn new(body: Value) -> Self {
            Self {
                body,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        fn get_json(&self, route: &DataRoute, params: &RequestParams) -> Result<Value, AppError> {
            self.calls.borrow_mut().push((*route, params.clone()));
            Ok(self.body.clone())
        }
    }

    fn fetcher(model: &str) -> NaturalGasFetcher {
        NaturalGasFetcher::new(by_model(model).unwrap())
    }

    #[test]
    fn annual_only_endpoint_downgrades_before_validation() {
        let f = fetcher("EnRCrudeOilPlusLeaseCondensate");
        let args = RawArgs::new().with("frequency", "monthly").with("start_date", "2019-06");
        let (query, diags) = f.transform_query(args).unwrap();
        assert_eq!(query.frequency, Frequency::Annual);
        assert_eq!(query.start_date.as_deref(), Some("2019"));
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn monthly_endpoint_keeps_monthly() {
        let f = fetcher("ConsumptionByEndUse");
        let (query, diags) = f.transform_query(RawArgs::new().with("frequency", "monthly")).unwrap();
        assert_eq!(query.frequency, Frequency::Monthly);
        assert!(diags.is_empty());
    }

    #[test]
    fn fetch_sends_key_and_facets_then_shapes() {
        let transport = CannedTransport::new(json!({"response": {
            "total": 3,
            "data": [{"period": 2022, "duoarea": "SCA", "value": "10"}],
            "warnings": [{"warning": "incomplete return", "description": "more rows"}]
        }}));
        let creds = Credentials::new().with(API_KEY_CREDENTIAL, "k");
        let args = RawArgs::new().with("filter_by_area", "SCA, STX");

        let out = fetcher("ConsumptionByEndUse").fetch(args, &creds, &transport).unwrap();

        assert_eq!(out.model, "ConsumptionByEndUse");
        assert_eq!(out.records[0].period, "2022");
        assert_eq!(out.total, Some(3));
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].kind, DiagnosticKind::IncompleteReturn);

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (route, params) = &calls[0];
        assert_eq!(route.path(), "v2/natural-gas/cons/sum/data");
        assert_eq!(params.get("api_key"), Some("k"));
        assert_eq!(params.values("facets[duoarea][]"), ["SCA", "STX"]);
    }

    #[test]
    fn missing_key_is_sent_empty() {
        let transport = CannedTransport::new(json!({"response": {"data": []}}));
        fetcher("PriceFutures")
            .fetch(RawArgs::new(), &Credentials::new(), &transport)
            .unwrap();
        assert_eq!(transport.calls.borrow()[0].1.get("api_key"), Some(""));
    }

    #[test]
    fn validation_failure_skips_the_network() {
        let transport = CannedTransport::new(json!({}));
        let err = fetcher("PriceFutures")
            .fetch(RawArgs::new().with("limit", "9999"), &Credentials::new(), &transport)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(transport.calls.borrow().is_empty());
    }

    #[test]
    fn credentials_debug_hides_secrets() {
        let creds = Credentials::new().with(API_KEY_CREDENTIAL, "super-secret");
        let shown = format!("{creds:?}");
        assert!(shown.contains(API_KEY_CREDENTIAL));
        assert!(!shown.contains("super-secret"));
    }
}
