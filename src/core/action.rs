//! # Actions
//!
//! Everything that can happen in the console becomes an `Action`.
//! User picks a module? That's `Action::OpenModule(record)`.
//! Backend answers? That's `Action::ModulesLoaded { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns an `Effect` describing the I/O the adapter should perform. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::api::{ApiError, Endpoint, ModuleRecord, ModuleSource};
use crate::core::state::App;
use crate::core::view::{ModulesController, View};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Resolve a path through the route table and activate its view.
    Navigate(String),
    /// `openmodule`: navigate to the detail view of a listed module.
    OpenModule(ModuleRecord),
    /// Re-run the active view's backend read.
    Reload,
    ModulesLoaded {
        activation: u64,
        result: Result<Vec<ModuleRecord>, ApiError>,
    },
    ModuleLoaded {
        activation: u64,
        result: Result<ModuleRecord, ApiError>,
    },
    Quit,
}

/// A backend read the adapter must perform on behalf of one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub activation: u64,
    pub endpoint: Endpoint,
}

impl LoadRequest {
    /// Runs the read against `source` and wraps the outcome in the
    /// matching `*Loaded` action.
    pub async fn perform(self, source: &dyn ModuleSource) -> Action {
        let activation = self.activation;
        match self.endpoint {
            Endpoint::ListModules => Action::ModulesLoaded {
                activation,
                result: source.list_modules().await,
            },
            Endpoint::GetModule(id) => Action::ModuleLoaded {
                activation,
                result: source.get_module(&id).await,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(LoadRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(path) => navigate(app, &path),
        Action::OpenModule(record) => match ModulesController::openmodule(&record) {
            Some(path) => navigate(app, &path),
            None => {
                info!("Ignoring openmodule for a record without id");
                app.status_message = String::from("Module has no id");
                Effect::None
            }
        },
        Action::Reload => begin_load(app),
        Action::ModulesLoaded { activation, result } => {
            if !is_current(app, activation) {
                return Effect::None;
            }
            if let View::Modules(controller) = &mut app.view {
                app.status_message = match &result {
                    Ok(modules) => format!("Loaded {} modules", modules.len()),
                    Err(e) => format!("Loading modules failed: {e}"),
                };
                controller.finish_load(result);
            }
            Effect::None
        }
        Action::ModuleLoaded { activation, result } => {
            if !is_current(app, activation) {
                return Effect::None;
            }
            if let View::Module(controller) = &mut app.view {
                app.status_message = match &result {
                    Ok(_) => format!("Loaded module {}", controller.id),
                    Err(e) => format!("Loading module {} failed: {e}", controller.id),
                };
                controller.finish_load(result);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, path: &str) -> Effect {
    let route_match = app.routes.resolve(path);
    if let Some(from) = &route_match.redirected_from {
        info!("No route for {}, redirecting to {}", from, route_match.path);
    }
    info!(
        "Navigating to {} ({} / {})",
        route_match.path,
        route_match.route.template().name(),
        route_match.route.controller().name()
    );

    app.path = route_match.path.clone();
    app.template = route_match.route.template();
    app.view = View::activate(&route_match);
    app.status_message = match &route_match.redirected_from {
        Some(from) => format!("No page at {from}"),
        None => String::new(),
    };

    begin_load(app)
}

/// Bumps the activation and starts the active view's read, if any.
fn begin_load(app: &mut App) -> Effect {
    app.activation += 1;
    match app.view.begin_load() {
        Some(endpoint) => {
            debug!("Activation {} fetches {}", app.activation, endpoint.path());
            Effect::Fetch(LoadRequest {
                activation: app.activation,
                endpoint,
            })
        }
        None => Effect::None,
    }
}

fn is_current(app: &App, activation: u64) -> bool {
    if activation != app.activation {
        debug!(
            "Dropping stale result for activation {} (current {})",
            activation, app.activation
        );
        return false;
    }
    true
}
