//! # Application State
//!
//! Core business state for the console. Presentation state (selection,
//! scroll offsets, the path prompt) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── routes: RouteTable        // static route definitions
//! ├── session: SessionState     // login state, outlives routes
//! ├── path: String              // canonical path of the active route
//! ├── template: Template        // template bound to the active route
//! ├── view: View                // controller of the active route
//! ├── activation: u64           // bumped on every (re)activation
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::nav::SessionState;
use crate::core::route::{RouteTable, Template};
use crate::core::view::View;

pub struct App {
    pub routes: RouteTable,
    pub session: SessionState,
    pub path: String,
    pub template: Template,
    pub view: View,
    /// Results tagged with any other activation are stale and get dropped.
    pub activation: u64,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// An app sitting on the home view. Nothing has been activated yet;
    /// callers navigate to their start path.
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
            session: SessionState::default(),
            path: String::from("/"),
            template: Template::Homepage,
            view: View::default(),
            activation: 0,
            status_message: String::from("Welcome to Domos!"),
        }
    }
}
