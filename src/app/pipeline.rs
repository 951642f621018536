//! Shared fetch pipeline used by the CLI.
//!
//! settings -> client + credentials -> provider dispatch -> diagnostics surfaced
//!
//! The CLI only decides how to present the returned `FetchOutput`.

use tracing::debug;

use crate::config::Settings;
use crate::data::{EiaClient, Transport};
use crate::diagnostics;
use crate::error::AppError;
use crate::provider::{FetchOutput, Provider};
use crate::query::RawArgs;

/// Fetch `target` from the live EIA API.
pub fn run_fetch(settings: &Settings, target: &str, args: RawArgs) -> Result<FetchOutput, AppError> {
    let client = EiaClient::new(settings.base_url.clone())?;
    run_fetch_with(&Provider::eia(), settings, &client, target, args)
}

/// Fetch through an explicit provider and transport.
pub fn run_fetch_with(
    provider: &Provider,
    settings: &Settings,
    transport: &dyn Transport,
    target: &str,
    args: RawArgs,
) -> Result<FetchOutput, AppError> {
    debug!(command = target, ?settings, "dispatching fetch");
    let output = provider.query(target, args, &settings.credentials(), transport)?;
    diagnostics::emit(&output.diagnostics);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::data::DEFAULT_BASE_URL;
    use crate::provider::fetcher::tests::CannedTransport;

    #[tokio::test(flavor = "multi_thread")]
    async fn end_to_end_against_a_local_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/natural-gas/cons/num/data"))
            .and(query_param("frequency", "annual"))
            .and(query_param("start", "2019"))
            .and(query_param("facets[duoarea][]", "SCA"))
            .and(query_param("api_key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {
                "total": "2",
                "data": [
                    {"period": 2019, "duoarea": "SCA", "area-name": "CALIFORNIA", "value": "11017000", "units": "NUM"},
                    {"period": 2020, "duoarea": "SCA", "area-name": "CALIFORNIA", "value": "W", "units": "NUM"}
                ]
            }})))
            .expect(1)
            .mount(&server)
            .await;

        let settings = Settings {
            api_key: Some("secret".into()),
            base_url: server.uri(),
        };
        let args = RawArgs::new()
            .with("frequency", "monthly")
            .with("start_date", "2019-01")
            .with("filter_by_area", "SCA");

        let output = tokio::task::spawn_blocking(move || {
            run_fetch(&settings, "natural_gas/consumption/number_of_consumers", args)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(output.model, "ConsumptionNumberOfConsumers");
        assert_eq!(output.total, Some(2));
        assert_eq!(output.records.len(), 2);
        assert_eq!(output.records[0].period, "2019");
        assert_eq!(output.diagnostics.len(), 2);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn each_diagnostic_is_logged_once() {
        let transport = CannedTransport::new(json!({"response": {
            "total": 42,
            "warnings": [{"warning": "incomplete return", "description": "capped"}],
            "data": [{"period": 2019}]
        }}));
        let settings = Settings {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
        };
        let args = RawArgs::new()
            .with("frequency", "monthly")
            .with("end_date", "2020-06");

        let log = Captured::default();
        let sink = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        let output = tracing::subscriber::with_default(subscriber, || {
            run_fetch_with(&Provider::eia(), &settings, &transport, "ConsumptionNumberOfConsumers", args)
        })
        .unwrap();

        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.diagnostics.len(), 3);
        for d in &output.diagnostics {
            assert_eq!(logged.matches(d.message.as_str()).count(), 1, "{}", d.message);
        }
        assert_eq!(logged.lines().filter(|l| l.contains("WARN")).count(), 3);
    }

    #[test]
    fn unknown_target_fails_before_any_request() {
        let settings = Settings {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
        };
        let err = run_fetch(&settings, "natural_gas/nothing/here", RawArgs::new()).unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(_)));
    }
}
