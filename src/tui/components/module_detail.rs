//! # Module Detail Component
//!
//! The `/module/:id` view. Shows the loaded record either as a field listing
//! (booleans drawn with [`BoolIcon`]) or as raw pretty-printed JSON, switched
//! with a [`ToggleButton`] bound to `ModuleDetailState::show_raw`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use serde_json::Value;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::ModuleRecord;
use crate::core::view::{LoadState, ModuleController};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::bool_icon::BoolIcon;
use crate::tui::components::error_view;
use crate::tui::components::toggle_button::ToggleButton;
use crate::tui::event::TuiEvent;

const RAW_LABEL: &str = "raw json";

#[derive(Default)]
pub struct ModuleDetailState {
    pub show_raw: bool,
    pub scroll_state: ScrollViewState,
}

impl ModuleDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// Leave the detail view.
    Back,
}

impl EventHandler for ModuleDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(DetailEvent::Back),
            TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            other => {
                if ToggleButton::new(RAW_LABEL, &mut self.show_raw)
                    .handle_event(other)
                    .is_some()
                {
                    self.scroll_state.scroll_to_top();
                }
                None
            }
        }
    }
}

/// Transient render wrapper for the detail view.
pub struct ModuleDetail<'a> {
    state: &'a mut ModuleDetailState,
    controller: &'a ModuleController,
}

impl<'a> ModuleDetail<'a> {
    pub fn new(state: &'a mut ModuleDetailState, controller: &'a ModuleController) -> Self {
        Self { state, controller }
    }
}

impl Component for ModuleDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let title = Line::from(Span::styled(
            format!(" Module {}", self.controller.id),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, header_area);
        ToggleButton::new(RAW_LABEL, &mut self.state.show_raw).render(frame, header_area);

        let record = match &self.controller.module {
            LoadState::Loaded(record) => record,
            LoadState::Failed(err) => {
                error_view::render(frame, body_area, &err.to_string());
                return;
            }
            LoadState::Loading => {
                render_notice(frame, body_area, "Loading module…");
                return;
            }
            LoadState::NotLoaded => {
                render_notice(frame, body_area, "Press r to load this module.");
                return;
            }
        };

        let lines = if self.state.show_raw {
            raw_lines(record)
        } else {
            field_lines(record)
        };

        let content_width = body_area.width.saturating_sub(1);
        let content_height = lines.len() as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let notice = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}

fn raw_lines(record: &ModuleRecord) -> Vec<Line<'static>> {
    let pretty = serde_json::to_string_pretty(record.as_value())
        .unwrap_or_else(|_| record.as_value().to_string());
    pretty.lines().map(|l| Line::raw(l.to_string())).collect()
}

/// One line per top-level field. Non-object records fall back to raw JSON.
fn field_lines(record: &ModuleRecord) -> Vec<Line<'static>> {
    let Value::Object(map) = record.as_value() else {
        return raw_lines(record);
    };
    let key_width = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    map.iter()
        .map(|(key, value)| {
            let value_span = match value {
                Value::Bool(b) => BoolIcon::new(*b).span(),
                Value::String(s) => Span::raw(s.clone()),
                Value::Null => Span::styled("null", Style::default().fg(Color::DarkGray)),
                other => Span::raw(other.to_string()),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", key, width = key_width),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                value_span,
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn loaded(id: &str, value: Value) -> ModuleController {
        let mut controller = ModuleController::new(id);
        controller.finish_load(Ok(ModuleRecord::new(value)));
        controller
    }

    fn render_to_string(state: &mut ModuleDetailState, controller: &ModuleController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
        terminal
            .draw(|f| ModuleDetail::new(state, controller).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_field_lines_render_bools_as_icons() {
        let record = ModuleRecord::new(json!({"Active": true, "name": "time"}));
        let lines = field_lines(&record);
        assert_eq!(lines.len(), 2);
        let value_of = |key: &str| {
            lines
                .iter()
                .find(|l| l.spans[0].content.trim() == key)
                .map(|l| l.spans[2].content.to_string())
        };
        assert_eq!(value_of("Active").as_deref(), Some("✔"));
        assert_eq!(value_of("name").as_deref(), Some("time"));
    }

    #[test]
    fn test_non_object_falls_back_to_raw() {
        let record = ModuleRecord::new(json!([1, 2]));
        assert_eq!(field_lines(&record), raw_lines(&record));
    }

    #[test]
    fn test_toggle_and_back() {
        let mut state = ModuleDetailState::new();
        assert_eq!(state.handle_event(&TuiEvent::InputChar(' ')), None);
        assert!(state.show_raw);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(DetailEvent::Back));
        assert_eq!(state.handle_event(&TuiEvent::Backspace), Some(DetailEvent::Back));
    }

    #[test]
    fn test_render_fields_and_raw() {
        let controller = loaded("7", json!({"id": 7, "name": "X"}));
        let mut state = ModuleDetailState::new();
        let text = render_to_string(&mut state, &controller);
        assert!(text.contains("Module 7"));
        assert!(text.contains("[ OFF ]"));
        assert!(text.contains("name"));

        state.show_raw = true;
        let text = render_to_string(&mut state, &controller);
        assert!(text.contains("[ ON ]"));
        assert!(text.contains("\"name\": \"X\""));
    }

    #[test]
    fn test_render_failed() {
        let mut controller = ModuleController::new("9");
        controller.finish_load(Err(crate::api::ApiError::Api {
            status: 404,
            message: "gone".into(),
        }));
        let text = render_to_string(&mut ModuleDetailState::new(), &controller);
        assert!(text.contains("ERROR"));
        assert!(text.contains("404"));
    }
}
