//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core `Action` values and performs the
//! `Effect`s `update()` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Backend reads
//!
//! An `Effect::Fetch` is spawned on the tokio runtime and its result comes
//! back through an `mpsc` channel as an `Action` tagged with the activation
//! it was issued for. Whenever the activation changes the previous read is
//! aborted; anything that still lands is dropped by `update()`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::api::ModuleSource;
use crate::core::action::{Action, Effect, LoadRequest, update};
use crate::core::nav::NavigationController;
use crate::core::state::App;
use crate::core::view::View;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailEvent, ModuleDetailState, ModuleListEvent, ModuleListState, PathPrompt, PromptEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub module_list: ModuleListState,
    pub module_detail: ModuleDetailState,
    /// Path prompt in the footer (None = hidden)
    pub prompt: Option<PathPrompt>,
    /// Path the presentation state above belongs to
    route_path: String,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            module_list: ModuleListState::new(),
            module_detail: ModuleDetailState::new(),
            prompt: None,
            route_path: String::from("/"),
        }
    }

    /// Reset per-view presentation state when the route changed.
    fn sync_route(&mut self, path: &str) {
        if self.route_path != path {
            debug!("Route changed {} -> {}, resetting view state", self.route_path, path);
            self.module_list = ModuleListState::new();
            self.module_detail = ModuleDetailState::new();
            self.route_path = path.to_string();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Runs `update()` and performs the resulting effect.
struct Dispatcher {
    source: Arc<dyn ModuleSource>,
    tx: mpsc::Sender<Action>,
    in_flight: Option<AbortHandle>,
}

impl Dispatcher {
    /// Returns true when the app should quit.
    fn dispatch(&mut self, app: &mut App, action: Action) -> bool {
        let activation = app.activation;
        let effect = update(app, action);

        if app.activation != activation {
            if let Some(handle) = self.in_flight.take() {
                debug!("Aborting read for superseded activation {}", activation);
                handle.abort();
            }
        }

        match effect {
            Effect::Fetch(request) => {
                self.in_flight = Some(spawn_fetch(request, self.source.clone(), self.tx.clone()));
                false
            }
            Effect::Quit => true,
            Effect::None => false,
        }
    }
}

pub fn run(source: Arc<dyn ModuleSource>, start_path: &str) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    // Navigation chrome initialization
    NavigationController::new(&mut app.session).init();

    let (tx, rx) = mpsc::channel();
    let mut dispatcher = Dispatcher {
        source,
        tx,
        in_flight: None,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    dispatcher.dispatch(&mut app, Action::Navigate(start_path.to_string()));
    tui.sync_route(&app.path);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let loading = app.view.is_loading();
        if loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, event) {
                debug!("Key produced {:?}", action);
                should_quit |= dispatcher.dispatch(&mut app, action);
                tui.sync_route(&app.path);
            }
        }

        if should_quit {
            break;
        }

        // Handle background fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatcher.dispatch(&mut app, action);
        }
    }

    if let Some(handle) = dispatcher.in_flight.take() {
        handle.abort();
    }

    ratatui::restore();
    info!("Console closed");
    Ok(())
}

/// Map a terminal event to an `Action`, updating TUI-local state on the way.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }
    if event == TuiEvent::Resize {
        return None;
    }

    // While the prompt is open it gets every key
    if let Some(prompt) = tui.prompt.as_mut() {
        return match prompt.handle_event(&event)? {
            PromptEvent::Submit(path) => {
                tui.prompt = None;
                Some(Action::Navigate(path))
            }
            PromptEvent::Cancel => {
                tui.prompt = None;
                None
            }
        };
    }

    match event {
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::InputChar(':') => {
            tui.prompt = Some(PathPrompt::new());
            return None;
        }
        TuiEvent::InputChar('h') => return Some(Action::Navigate("/".to_string())),
        TuiEvent::InputChar('m') => return Some(Action::Navigate("/modules".to_string())),
        TuiEvent::InputChar('d') => return Some(Action::Navigate("/dashi".to_string())),
        TuiEvent::InputChar('r') => return Some(Action::Reload),
        _ => {}
    }

    match &app.view {
        View::Modules(controller) => {
            let modules = controller.modules.loaded()?;
            tui.module_list.set_len(modules.len());
            match tui.module_list.handle_event(&event)? {
                ModuleListEvent::Open(index) => modules.get(index).cloned().map(Action::OpenModule),
            }
        }
        View::Module(_) => match tui.module_detail.handle_event(&event)? {
            DetailEvent::Back => Some(Action::Navigate("/modules".to_string())),
        },
        View::Home(_) | View::Dashi(_) => None,
    }
}

fn spawn_fetch(
    request: LoadRequest,
    source: Arc<dyn ModuleSource>,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Spawning fetch of {} for activation {} via {}",
        request.endpoint.path(),
        request.activation,
        source.name()
    );

    let handle = tokio::spawn(async move {
        let activation = request.activation;
        let action = request.perform(source.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result for activation {}: receiver dropped", activation);
        }
    });

    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, ModuleRecord};
    use crate::test_support::{StaticSource, test_app};
    use serde_json::json;

    fn modules_app(records: Vec<ModuleRecord>) -> App {
        let mut app = test_app();
        let effect = update(&mut app, Action::Navigate("/modules".into()));
        let Effect::Fetch(request) = effect else {
            panic!("expected fetch");
        };
        update(
            &mut app,
            Action::ModulesLoaded {
                activation: request.activation,
                result: Ok(records),
            },
        );
        app
    }

    #[test]
    fn test_global_keys() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&app, &mut tui, TuiEvent::InputChar('m')),
            Some(Action::Navigate("/modules".into()))
        );
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::InputChar('r')), Some(Action::Reload));
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::InputChar('q')), Some(Action::Quit));
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::ForceQuit), Some(Action::Quit));
    }

    #[test]
    fn test_prompt_swallows_keys_and_navigates() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::InputChar(':')), None);
        assert!(tui.prompt.is_some());
        for c in "/nowhere".chars() {
            // 'q', 'h', 'd' etc. are text while the prompt is open
            assert_eq!(handle_event(&app, &mut tui, TuiEvent::InputChar(c)), None);
        }
        assert_eq!(
            handle_event(&app, &mut tui, TuiEvent::Submit),
            Some(Action::Navigate("/nowhere".into()))
        );
        assert!(tui.prompt.is_none());
    }

    #[test]
    fn test_prompt_escape_closes_without_action() {
        let app = test_app();
        let mut tui = TuiState::new();
        handle_event(&app, &mut tui, TuiEvent::InputChar(':'));
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::Escape), None);
        assert!(tui.prompt.is_none());
    }

    #[test]
    fn test_enter_on_list_opens_selected_module() {
        let second = ModuleRecord::new(json!({"id": 42, "name": "b"}));
        let app = modules_app(vec![ModuleRecord::new(json!({"id": 1})), second.clone()]);
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::CursorDown), None);
        assert_eq!(
            handle_event(&app, &mut tui, TuiEvent::Submit),
            Some(Action::OpenModule(second))
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let app = modules_app(vec![]);
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::Submit), None);
    }

    #[test]
    fn test_escape_on_detail_goes_back_to_list() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/module/3".into()));
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&app, &mut tui, TuiEvent::Escape),
            Some(Action::Navigate("/modules".into()))
        );
    }

    #[test]
    fn test_sync_route_resets_selection() {
        let mut tui = TuiState::new();
        tui.module_list.set_len(3);
        tui.module_list.selected = 2;
        tui.sync_route("/modules");
        assert_eq!(tui.module_list.selected, 0);
        tui.module_list.selected = 1;
        tui.sync_route("/modules");
        assert_eq!(tui.module_list.selected, 1);
    }

    #[tokio::test]
    async fn test_spawn_fetch_delivers_tagged_result() {
        let source: Arc<dyn ModuleSource> =
            Arc::new(StaticSource::with_modules(vec![ModuleRecord::new(json!({"id": 42}))]));
        let (tx, rx) = mpsc::channel();
        let handle = spawn_fetch(
            LoadRequest {
                activation: 7,
                endpoint: Endpoint::GetModule("42".into()),
            },
            source,
            tx,
        );
        // Wait for the task to finish
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::ModuleLoaded {
                activation: 7,
                result: Ok(ModuleRecord::new(json!({"id": 42}))),
            }
        );
    }

    #[tokio::test]
    async fn test_dispatcher_aborts_superseded_read() {
        let source: Arc<dyn ModuleSource> = Arc::new(StaticSource::with_modules(vec![]));
        let (tx, rx) = mpsc::channel();
        let mut dispatcher = Dispatcher {
            source,
            tx,
            in_flight: None,
        };
        let mut app = test_app();
        assert!(!dispatcher.dispatch(&mut app, Action::Navigate("/modules".into())));
        assert!(dispatcher.in_flight.is_some());
        // Moving to a view without a read clears the in-flight handle
        assert!(!dispatcher.dispatch(&mut app, Action::Navigate("/dashi".into())));
        assert!(dispatcher.in_flight.is_none());

        // Whatever the aborted task managed to send is stale now
        tokio::task::yield_now().await;
        while let Ok(action) = rx.try_recv() {
            dispatcher.dispatch(&mut app, action);
        }
        assert!(matches!(app.view, View::Dashi(_)));
        assert!(dispatcher.dispatch(&mut app, Action::Quit));
    }
}
