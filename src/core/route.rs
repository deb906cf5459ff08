//! # Route Table
//!
//! Static, ordered mapping from path pattern to (template, controller).
//!
//! ```text
//! /             → homepage  HomeController
//! /modules      → modules   ModulesController
//! /dashi        → dashi     DashiController
//! /module/:id   → module    ModuleController
//! (otherwise)   → redirect to /
//! ```
//!
//! First matching pattern wins. Resolution is total: a path nothing matches
//! resolves to the root route, so callers never handle a "no route" case.

use std::borrow::Cow;
use std::collections::HashMap;

/// The view template a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Homepage,
    Modules,
    Dashi,
    Module,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Homepage => "homepage",
            Template::Modules => "modules",
            Template::Dashi => "dashi",
            Template::Module => "module",
        }
    }
}

/// The controller bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    Home,
    Modules,
    Dashi,
    Module,
}

impl ControllerKind {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerKind::Home => "HomeController",
            ControllerKind::Modules => "ModulesController",
            ControllerKind::Dashi => "DashiController",
            ControllerKind::Module => "ModuleController",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: &'static str,
    template: Template,
    controller: ControllerKind,
}

impl Route {
    const fn new(pattern: &'static str, template: Template, controller: ControllerKind) -> Self {
        Self {
            pattern,
            template,
            controller,
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn controller(&self) -> ControllerKind {
        self.controller
    }

    /// Segment-wise match. `:name` captures exactly one non-empty segment,
    /// percent-decoded. A segment that does not decode to UTF-8 is kept as is.
    fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        let mut pattern_segments = self.pattern.split('/');
        let mut path_segments = path.split('/');

        loop {
            match (pattern_segments.next(), path_segments.next()) {
                (None, None) => return Some(params),
                (Some(expected), Some(segment)) => {
                    if let Some(name) = expected.strip_prefix(':') {
                        if segment.is_empty() {
                            return None;
                        }
                        let value = urlencoding::decode(segment)
                            .map(Cow::into_owned)
                            .unwrap_or_else(|_| segment.to_string());
                        params.insert(name.to_string(), value);
                    } else if expected != segment {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

const ROUTES: &[Route] = &[
    Route::new("/", Template::Homepage, ControllerKind::Home),
    Route::new("/modules", Template::Modules, ControllerKind::Modules),
    Route::new("/dashi", Template::Dashi, ControllerKind::Dashi),
    Route::new("/module/:id", Template::Module, ControllerKind::Module),
];

/// Index into `ROUTES` of the route unmatched paths redirect to.
const FALLBACK: usize = 0;

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    /// Canonical path of the matched route (the fallback path after a redirect).
    pub path: String,
    pub params: HashMap<String, String>,
    /// The normalized path that had no route, if this match is a redirect.
    pub redirected_from: Option<String>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    /// Resolve `path` to the first matching route, or redirect to `/`.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        let normalized = normalize(path);

        for route in self.routes {
            if let Some(params) = route.match_path(&normalized) {
                return RouteMatch {
                    route,
                    path: normalized,
                    params,
                    redirected_from: None,
                };
            }
        }

        let fallback = &self.routes[FALLBACK];
        RouteMatch {
            route: fallback,
            path: fallback.pattern.to_string(),
            params: HashMap::new(),
            redirected_from: Some(normalized),
        }
    }
}

/// Bring a user- or link-supplied path into matchable form: drop a leading
/// `#`, ignore query and fragment, force a leading `/`, drop one trailing `/`.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();

    let mut path = if without_query.starts_with('/') {
        without_query.to_string()
    } else {
        format!("/{without_query}")
    };
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}
