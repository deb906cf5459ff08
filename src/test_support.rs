//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiError, ModuleRecord, ModuleSource};

/// An in-memory source for tests that don't need a real backend.
pub struct StaticSource {
    modules: Vec<ModuleRecord>,
    failure: Option<ApiError>,
    requested_ids: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn with_modules(modules: Vec<ModuleRecord>) -> Self {
        Self {
            modules,
            failure: None,
            requested_ids: Mutex::new(Vec::new()),
        }
    }

    /// Every read fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self {
            modules: Vec::new(),
            failure: Some(error),
            requested_ids: Mutex::new(Vec::new()),
        }
    }

    /// Ids passed to `get_module`, in call order.
    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModuleSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ApiError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.modules.clone()),
        }
    }

    async fn get_module(&self, id: &str) -> Result<ModuleRecord, ApiError> {
        self.requested_ids.lock().unwrap().push(id.to_string());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.modules
            .iter()
            .find(|m| m.id().as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: 404,
                message: "module not found".to_string(),
            })
    }
}

/// Creates a test App positioned at `/`.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new()
}
