//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: top navigation chrome
//! - `HomePage`, `DashiPage`: static views
//! - `BoolIcon`: two-state boolean glyph
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own or borrow presentation state and emit events:
//! - `ModuleList` / `ModuleListState`: selectable module rows
//! - `ModuleDetail` / `ModuleDetailState`: scrollable record view
//! - `ToggleButton`: two-way bound ON/OFF switch
//! - `PathPrompt`: `:`-prompt for typing a path
//!
//! Components receive core data (a controller's `LoadState`, the login
//! state) as props and never reach into `App` themselves.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (top navigation chrome)
//! ├── home.rs           (/ view)
//! ├── dashi.rs          (/dashi view)
//! ├── module_list.rs    (/modules view)
//! ├── module_detail.rs  (/module/:id view)
//! ├── bool_icon.rs      (boolean glyph)
//! ├── toggle_button.rs  (bound ON/OFF switch)
//! ├── path_prompt.rs    (footer prompt)
//! └── error_view.rs     (failed-load panel)
//! ```

pub mod bool_icon;
pub mod dashi;
pub mod error_view;
pub mod home;
pub mod module_detail;
pub mod module_list;
pub mod nav_bar;
pub mod path_prompt;
pub mod toggle_button;

pub use bool_icon::BoolIcon;
pub use dashi::DashiPage;
pub use home::HomePage;
pub use module_detail::{DetailEvent, ModuleDetail, ModuleDetailState};
pub use module_list::{ModuleList, ModuleListEvent, ModuleListState};
pub use nav_bar::NavBar;
pub use path_prompt::{PathPrompt, PromptEvent};
pub use toggle_button::ToggleButton;
