//! # Module List Component
//!
//! The `/modules` view: every module the backend reported, one per row,
//! with its `Active` flag as a [`BoolIcon`].
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ModuleListState` lives in `TuiState`
//! - `ModuleList` is created each frame with borrowed state and the
//!   controller's `LoadState` as a prop

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::ModuleRecord;
use crate::core::view::LoadState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::bool_icon::BoolIcon;
use crate::tui::components::error_view;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the module list.
#[derive(Debug, Default)]
pub struct ModuleListState {
    pub selected: usize,
    pub list_state: ListState,
    len: usize,
}

impl ModuleListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tell the state how many rows exist, clamping the selection.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the module list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleListEvent {
    /// Open the module at this row index.
    Open(usize),
}

impl EventHandler for ModuleListState {
    type Event = ModuleListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ModuleListEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.len - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(ModuleListEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the module list.
pub struct ModuleList<'a> {
    state: &'a mut ModuleListState,
    modules: &'a LoadState<Vec<ModuleRecord>>,
}

impl<'a> ModuleList<'a> {
    pub fn new(state: &'a mut ModuleListState, modules: &'a LoadState<Vec<ModuleRecord>>) -> Self {
        Self { state, modules }
    }
}

impl Component for ModuleList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Modules ")
            .title_bottom(Line::from(" ↑↓ Select  Enter Open  r Reload ").centered())
            .padding(Padding::horizontal(1));

        let modules = match self.modules {
            LoadState::Loaded(modules) => modules,
            LoadState::Failed(err) => {
                error_view::render(frame, area, &err.to_string());
                return;
            }
            LoadState::Loading => {
                render_notice(frame, area, block, "Loading modules…");
                return;
            }
            LoadState::NotLoaded => {
                render_notice(frame, area, block, "Press r to load modules.");
                return;
            }
        };

        if modules.is_empty() {
            render_notice(frame, area, block, "No modules.");
            return;
        }

        self.state.set_len(modules.len());
        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = modules
            .iter()
            .enumerate()
            .map(|(i, module)| module_row(module, i == self.state.selected, inner_width))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn render_notice(frame: &mut Frame, area: Rect, block: Block, text: &str) {
    let notice = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(notice, area);
}

/// Layout: `✔  12  name            description`
fn module_row(module: &ModuleRecord, selected: bool, inner_width: usize) -> ListItem<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };

    let icon = match module.active() {
        Some(active) => BoolIcon::new(active).span(),
        None => Span::raw(" "),
    };
    let id = format!("{:>4}", module.id().unwrap_or_else(|| "?".to_string()));
    let name_width = (inner_width / 3).max(8);
    let name = truncate_str(module.name().unwrap_or("(unnamed)"), name_width);
    let padded_name = format!("{:<width$}", name, width = name_width);

    let mut spans = vec![
        icon,
        Span::styled("  ", style),
        Span::styled(id, style),
        Span::styled("  ", style),
        Span::styled(padded_name, style),
    ];

    if let Some(descr) = module.description() {
        let used = 1 + 2 + 4 + 2 + name_width + 2;
        let descr = truncate_str(descr, inner_width.saturating_sub(used));
        spans.push(Span::styled("  ", style));
        spans.push(Span::styled(
            descr,
            if selected {
                style
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
    }

    ListItem::new(Line::from(spans))
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}
