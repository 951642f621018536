//! Non-fatal notices surfaced alongside successful results.
//!
//! A diagnostic never changes control flow. It records a silent adjustment the
//! crate made to the caller's request, or a server-side truncation of the
//! result set.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Monthly frequency was requested on an annual-only endpoint.
    FrequencyDowngraded,
    /// A `YYYY-MM` date was cut down to its year.
    DateTruncated,
    /// The upstream reported that not every available row was returned.
    IncompleteReturn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Emit each diagnostic as a `warn` event.
pub fn emit(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        tracing::warn!(kind = ?d.kind, "{}", d.message);
    }
}
