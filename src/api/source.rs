use std::fmt;

use async_trait::async_trait;

use super::types::ModuleRecord;

/// Errors that can occur while reading from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client misconfigured (bad base URL, TLS backend failed to build).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the JSON shape the endpoint promises.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Read access to the module catalogue.
///
/// The HTTP implementation lives in [`super::client`]; tests swap in an
/// in-memory source.
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// `GET /api/getmodules`
    async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ApiError>;

    /// `GET /api/getmodule/{id}`
    async fn get_module(&self, id: &str) -> Result<ModuleRecord, ApiError>;
}
