use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The backend reads a view can issue. Each view issues at most one per activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListModules,
    GetModule(String),
}

impl Endpoint {
    /// Unencoded path segments below the backend base URL.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::ListModules => vec!["api", "getmodules"],
            Endpoint::GetModule(id) => vec!["api", "getmodule", id.as_str()],
        }
    }

    /// Request path relative to the backend base URL, each segment
    /// percent-encoded.
    pub fn path(&self) -> String {
        self.segments()
            .iter()
            .map(|segment| format!("/{}", urlencoding::encode(segment)))
            .collect()
    }
}

/// A module record exactly as the backend sent it.
///
/// The record is opaque: only `id` is interpreted (for navigation). The other
/// accessors exist for display and never rewrite the underlying JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ModuleRecord(pub Value);

impl ModuleRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The record id as a path segment. Accepts JSON numbers and non-empty strings.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name")?.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("descr")?.as_str()
    }

    /// The backend spells this field `Active`; lowercase is accepted too.
    pub fn active(&self) -> Option<bool> {
        self.0
            .get("Active")
            .or_else(|| self.0.get("active"))?
            .as_bool()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
