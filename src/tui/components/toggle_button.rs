//! # ToggleButton Component
//!
//! A labelled ON/OFF switch bound two-way to a `bool` owned elsewhere.
//! Space or Enter flips the bound value; the component keeps no state of
//! its own, so it is created on demand around the model it edits.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct ToggleButton<'a> {
    pub label: &'a str,
    pub model: &'a mut bool,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str, model: &'a mut bool) -> Self {
        Self { label, model }
    }

    pub fn line(&self) -> Line<'a> {
        let (text, style) = if *self.model {
            (
                "[ ON ]",
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            ("[ OFF ]", Style::default().fg(Color::DarkGray))
        };
        Line::from(vec![
            Span::styled(self.label, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(text, style),
        ])
    }
}

impl Component for ToggleButton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line().right_aligned(), area);
    }
}

impl EventHandler for ToggleButton<'_> {
    /// The new value after a flip.
    type Event = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<bool> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                *self.model = !*self.model;
                Some(*self.model)
            }
            _ => None,
        }
    }
}
