//! Raw caller arguments and their validation into a [`Query`].

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::domain::{MAX_LIMIT, Query, wire_name};
use crate::error::AppError;

/// Insertion-ordered `key -> value` arguments as a caller supplies them.
///
/// Keys are the query's field names (`start_date`, `filter_by_area`, ...),
/// not the upstream wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    entries: IndexMap<String, String>,
}

impl RawArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = RawArgs::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

impl Query {
    /// Validate raw arguments into a `Query`.
    ///
    /// Blank values count as unset. Unknown keys are rejected.
    pub fn from_args(args: &RawArgs) -> Result<Self, AppError> {
        let mut query = Query::default();

        for (key, raw) in args.iter() {
            if wire_name(key).is_none() {
                return Err(unknown_argument(key));
            }
            if !raw.trim().is_empty() {
                query.set(key, raw)?;
            }
        }

        if let (Some(start), Some(end)) = (&query.start_date, &query.end_date) {
            // Zero-padded YYYY / YYYY-MM order lexicographically.
            if start > end {
                return Err(AppError::validation(format!(
                    "start_date {start} is after end_date {end}"
                )));
            }
        }

        Ok(query)
    }

    fn set(&mut self, key: &str, raw: &str) -> Result<(), AppError> {
        let value = raw.trim();
        match key {
            "frequency" => self.frequency = value.parse()?,
            "start_date" => self.start_date = Some(parse_period(key, value)?),
            "end_date" => self.end_date = Some(parse_period(key, value)?),
            "filter_by_area" => self.filter_by_area = Some(raw.to_string()),
            "filter_by_process" => self.filter_by_process = Some(value.parse()?),
            "filter_by_series" => self.filter_by_series = Some(raw.to_string()),
            "limit" => self.limit = Some(parse_limit(value)?),
            "offset" => self.offset = Some(parse_count(key, value)?),
            other => return Err(unknown_argument(other)),
        }
        Ok(())
    }
}

fn unknown_argument(key: &str) -> AppError {
    AppError::validation(format!("unknown argument '{key}'"))
}

/// Accept `YYYY` or `YYYY-MM`.
fn parse_period(field: &str, value: &str) -> Result<String, AppError> {
    let invalid = || {
        AppError::validation(format!(
            "{field} must be YYYY or YYYY-MM, got '{value}'"
        ))
    };

    let (year, month) = match value.split_once('-') {
        Some((y, m)) => (y, Some(m)),
        None => (value, None),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if let Some(month) = month {
        if month.len() != 2 {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(&format!("{year}-{month}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
    }
    Ok(value.to_string())
}

fn parse_count(field: &str, value: &str) -> Result<u32, AppError> {
    value.parse::<u32>().map_err(|_| {
        AppError::validation(format!(
            "{field} must be a non-negative integer, got '{value}'"
        ))
    })
}

fn parse_limit(value: &str) -> Result<u32, AppError> {
    let limit = parse_count("limit", value)?;
    if limit == 0 || limit > MAX_LIMIT {
        return Err(AppError::validation(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}
