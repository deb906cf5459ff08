//! # Core Application Logic
//!
//! This module contains the console's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route table          │
//!                    │  • View controllers     │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  --dump    │
//!           │  Adapter   │              │ (headless) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: the static route table and path resolution
//! - [`view`]: the four view controllers and their `LoadState`
//! - [`nav`]: session-wide login state and the navigation controller
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod config;
pub mod nav;
pub mod route;
pub mod state;
pub mod view;
