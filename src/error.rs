//! Crate-wide error type.
//!
//! Every fallible operation returns [`AppError`]. The binary maps each variant
//! to a process exit code via [`AppError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A caller-supplied argument failed validation. Raised before any network activity.
    #[error("invalid query: {0}")]
    Validation(String),

    /// No registered command matches the requested path or model id.
    #[error("unknown command '{0}' (run `eia list` to see available commands)")]
    UnknownCommand(String),

    /// Network failure, timeout, or a body that is not JSON.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream JSON does not follow the `{ response: { data: [...] } }` contract.
    #[error("malformed EIA response: {0}")]
    MalformedEnvelope(String),

    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedEnvelope(message.into())
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Io { .. } | Self::Serialize(_) => 2,
            Self::UnknownCommand(_) => 3,
            Self::Transport { .. } | Self::MalformedEnvelope(_) => 4,
        }
    }
}
