//! # View Controllers
//!
//! One controller per route. Each owns its view-local state and knows which
//! (at most one) backend read populates it.
//!
//! Loading is split in two halves so the core stays free of I/O:
//! `begin_load()` marks the view as loading and names the endpoint,
//! `finish_load()` applies whatever came back. `load()` runs both halves
//! against a [`ModuleSource`] for callers that can simply await.

use log::{debug, warn};
use serde_json::Value;

use crate::api::{ApiError, Endpoint, ModuleRecord, ModuleSource};
use crate::core::route::{ControllerKind, RouteMatch, RouteTable};

/// Load lifecycle of a view's data.
///
/// `Loaded(vec![])` (loaded, empty) and `Failed` are both distinct from
/// `NotLoaded`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotLoaded
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for LoadState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err),
        }
    }
}

/// Landing page. No inputs, no backend calls.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HomeController;

/// Dashboard placeholder. No inputs, no backend calls.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DashiController;

/// Module overview list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ModulesController {
    pub modules: LoadState<Vec<ModuleRecord>>,
}

impl ModulesController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> Endpoint {
        self.modules = LoadState::Loading;
        Endpoint::ListModules
    }

    /// Replaces the collection with the response body, or records the failure.
    pub fn finish_load(&mut self, result: Result<Vec<ModuleRecord>, ApiError>) {
        if let Err(e) = &result {
            warn!("Loading modules failed: {}", e);
        }
        self.modules = result.into();
    }

    pub async fn load(&mut self, source: &dyn ModuleSource) {
        self.begin_load();
        let result = source.list_modules().await;
        self.finish_load(result);
    }

    /// The path that opens `module`'s detail view, or `None` if the record
    /// has no usable id. The id is percent-encoded into a single segment.
    pub fn openmodule(module: &ModuleRecord) -> Option<String> {
        let id = module.id()?;
        debug!("Opening module {}", id);
        Some(format!("module/{}", urlencoding::encode(&id)))
    }
}

/// Detail view for a single module, keyed by the `:id` route parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleController {
    pub id: String,
    pub module: LoadState<ModuleRecord>,
}

impl ModuleController {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            module: LoadState::NotLoaded,
        }
    }

    pub fn begin_load(&mut self) -> Endpoint {
        self.module = LoadState::Loading;
        Endpoint::GetModule(self.id.clone())
    }

    pub fn finish_load(&mut self, result: Result<ModuleRecord, ApiError>) {
        if let Err(e) = &result {
            warn!("Loading module {} failed: {}", self.id, e);
        }
        self.module = result.into();
    }

    pub async fn load(&mut self, source: &dyn ModuleSource) {
        self.begin_load();
        let result = source.get_module(&self.id).await;
        self.finish_load(result);
    }
}

/// The controller of the active route.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home(HomeController),
    Modules(ModulesController),
    Dashi(DashiController),
    Module(ModuleController),
}

impl Default for View {
    fn default() -> Self {
        View::Home(HomeController)
    }
}

impl View {
    /// Instantiate the controller bound to a resolved route.
    pub fn activate(route_match: &RouteMatch<'_>) -> Self {
        match route_match.route.controller() {
            ControllerKind::Home => View::Home(HomeController),
            ControllerKind::Modules => View::Modules(ModulesController::new()),
            ControllerKind::Dashi => View::Dashi(DashiController),
            ControllerKind::Module => {
                View::Module(ModuleController::new(route_match.param("id").unwrap_or_default()))
            }
        }
    }

    /// Starts this view's backend read, if it has one.
    pub fn begin_load(&mut self) -> Option<Endpoint> {
        match self {
            View::Modules(c) => Some(c.begin_load()),
            View::Module(c) => Some(c.begin_load()),
            View::Home(_) | View::Dashi(_) => None,
        }
    }

    pub async fn load(&mut self, source: &dyn ModuleSource) {
        match self {
            View::Modules(c) => c.load(source).await,
            View::Module(c) => c.load(source).await,
            View::Home(_) | View::Dashi(_) => {}
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            View::Modules(c) => c.modules.is_loading(),
            View::Module(c) => c.module.is_loading(),
            View::Home(_) | View::Dashi(_) => false,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            View::Modules(c) => c.modules.error(),
            View::Module(c) => c.module.error(),
            View::Home(_) | View::Dashi(_) => None,
        }
    }

    /// The view's loaded data as JSON; `Null` for views without data or
    /// before a successful load.
    pub fn data(&self) -> Value {
        match self {
            View::Modules(c) => c
                .modules
                .loaded()
                .map(|modules| Value::Array(modules.iter().map(|m| m.as_value().clone()).collect()))
                .unwrap_or(Value::Null),
            View::Module(c) => c
                .module
                .loaded()
                .map(|m| m.as_value().clone())
                .unwrap_or(Value::Null),
            View::Home(_) | View::Dashi(_) => Value::Null,
        }
    }
}

/// Resolve `path`, run the bound controller's load once and return the
/// view's data. Backs the headless `--dump` mode.
pub async fn load_path(
    routes: &RouteTable,
    source: &dyn ModuleSource,
    path: &str,
) -> Result<Value, ApiError> {
    let route_match = routes.resolve(path);
    if let Some(from) = &route_match.redirected_from {
        warn!("No route for {}, loading {} instead", from, route_match.path);
    }
    let mut view = View::activate(&route_match);
    view.load(source).await;
    match view.error() {
        Some(err) => Err(err.clone()),
        None => Ok(view.data()),
    }
}
