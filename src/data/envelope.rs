//! Response shaping: EIA JSON envelope -> typed records.
//!
//! ```text
//! { "response": { "total": N, "data": [ {row}, ... ], "warnings": [ {warning, description} ] } }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::domain::Record;
use crate::error::AppError;

/// Warning text the EIA uses when it truncated the result set.
pub const INCOMPLETE_RETURN: &str = "incomplete return";

/// Records extracted from one envelope, in upstream order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped {
    pub records: Vec<Record>,
    /// Rows available upstream, which can exceed `records.len()`.
    pub total: Option<u64>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Deserialize)]
struct UpstreamWarning {
    #[serde(default)]
    warning: String,
    #[serde(default)]
    description: String,
}

pub fn shape(envelope: Value) -> Result<Shaped, AppError> {
    let Value::Object(mut root) = envelope else {
        return Err(AppError::malformed("expected a JSON object"));
    };

    let response = match root.remove("response") {
        Some(Value::Object(response)) => response,
        Some(_) => return Err(AppError::malformed("'response' is not an object")),
        None => {
            return Err(match root.get("error") {
                Some(err) => AppError::malformed(format!(
                    "missing 'response' object (upstream error: {})",
                    error_text(err)
                )),
                None => AppError::malformed("missing 'response' object"),
            });
        }
    };

    let total = response.get("total").and_then(parse_total);
    let diagnostics = incomplete_return_warnings(&response, total);

    let rows = match response.get("data") {
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(AppError::malformed("'response.data' is not an array")),
        None => return Err(AppError::malformed("missing 'response.data'")),
    };

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Record::deserialize(row).map_err(|e| AppError::malformed(format!("row {i}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = records.len(), ?total, "shaped EIA response");

    Ok(Shaped {
        records,
        total,
        diagnostics,
    })
}

fn incomplete_return_warnings(response: &Map<String, Value>, total: Option<u64>) -> Vec<Diagnostic> {
    let Some(Value::Array(warnings)) = response.get("warnings") else {
        return Vec::new();
    };

    let total = total.map_or_else(|| "unknown".to_string(), |t| t.to_string());
    warnings
        .iter()
        .filter_map(|w| UpstreamWarning::deserialize(w).ok())
        .filter(|w| w.warning == INCOMPLETE_RETURN)
        .map(|w| {
            Diagnostic::new(
                DiagnosticKind::IncompleteReturn,
                format!(
                    "{} : {}. Total rows available: {total}.",
                    w.warning, w.description
                ),
            )
        })
        .collect()
}

// The EIA sends `total` as a number on some routes and a string on others.
fn parse_total(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn error_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
