//! # PathPrompt Component
//!
//! Single-line `:`-prompt for typing a path to navigate to. Replaces the
//! footer while open. Enter submits the buffer, Esc cancels.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(String),
    Cancel,
}

#[derive(Debug, Default)]
pub struct PathPrompt {
    pub buffer: String,
}

impl PathPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for PathPrompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => Some(PromptEvent::Submit(std::mem::take(&mut self.buffer))),
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for PathPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(self.buffer.as_str()),
        ]);
        frame.render_widget(line, area);

        let cursor_x = area.x + 1 + self.buffer.width() as u16;
        let cursor_x = cursor_x.min(area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, area.y));
    }
}
