//! HTTP implementation of [`ModuleSource`] against the Domos web backend.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::source::{ApiError, ModuleSource};
use super::types::{Endpoint, ModuleRecord};

/// Reads modules from a running Domos web server.
pub struct HttpModuleSource {
    base_url: String,
    base: Url,
    client: reqwest::Client,
}

impl HttpModuleSource {
    /// Builds a source for `base_url` (e.g. `http://localhost:5000`).
    ///
    /// `timeout` applies to the whole request; `None` means no timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/');
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base URL '{base_url}' cannot carry a path"
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.to_string(),
            base,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends the endpoint's segments to the base URL, escaping each one.
    fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Config(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        info!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Response status for {}: {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Backend error: {} - {}", status, message);
            return Err(ApiError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("Body for {}: {} bytes", url, body.len());

        serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected body from {}: {}", url, e);
            ApiError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl ModuleSource for HttpModuleSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ApiError> {
        let modules: Vec<ModuleRecord> = self.get_json(&Endpoint::ListModules).await?;
        info!("Fetched {} modules", modules.len());
        Ok(modules)
    }

    async fn get_module(&self, id: &str) -> Result<ModuleRecord, ApiError> {
        self.get_json(&Endpoint::GetModule(id.to_string())).await
    }
}
