//! Flatten a [`Query`] into EIA request parameters.
//!
//! The EIA filters on "facets" with repeated array-style keys:
//! `facets[duoarea][]=SCA&facets[duoarea][]=STX`. A plain map would collapse
//! those, so parameters are kept as `key -> [values]` and only flattened into
//! pairs when the request is sent.

use indexmap::IndexMap;

use crate::domain::Query;

/// Facets every natural-gas route understands.
pub const NATURAL_GAS_FACETS: [&str; 3] = ["duoarea", "process", "series"];

/// Multi-valued, insertion-ordered request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: IndexMap<String, Vec<String>>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single value, replacing anything already there.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Add one more occurrence of `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    /// Every value for `key`, in insertion order.
    pub fn values(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Wire representation: one pair per value.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.clone(), v.clone())))
            .collect()
    }

    /// Like [`to_pairs`](Self::to_pairs) but with the credential masked, for logs.
    pub fn redacted_pairs(&self) -> Vec<(String, String)> {
        self.to_pairs()
            .into_iter()
            .map(|(k, v)| if k == "api_key" { (k, "***".to_string()) } else { (k, v) })
            .collect()
    }
}

/// Repeated key used for a facet filter.
pub fn facet_key(facet: &str) -> String {
    format!("facets[{facet}][]")
}

/// Build request parameters for `query`.
///
/// Every set field goes out under its wire name, `data[0]=value` is always
/// added, and each listed facet present in the result is split on commas into
/// repeated `facets[<name>][]` entries. Empty tokens are dropped.
pub fn make_params(query: &Query, facets: &[&str]) -> RequestParams {
    let mut params = RequestParams::new();
    for (key, value) in query.wire_fields() {
        params.insert(key, value);
    }
    params.insert("data[0]", "value");

    for facet in facets {
        let Some(raw) = params.remove(facet) else {
            continue;
        };
        let key = facet_key(facet);
        for token in raw
            .iter()
            .flat_map(|v| v.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            params.append(key.as_str(), token);
        }
    }

    params
}
