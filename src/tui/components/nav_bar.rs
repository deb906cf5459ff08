//! # NavBar Component
//!
//! Top navigation chrome: brand, the three top-level destinations with the
//! active one highlighted, the current path, login state and status text.
//!
//! Stateless. Everything it shows is a prop:
//!
//! ```text
//!  Domos │ Home  Modules  Dashi │ /module/3 │ logged out │ Loaded module 3
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::nav::LoginState;
use crate::core::route::Template;
use crate::tui::component::Component;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TABS: &[(&str, &[Template])] = &[
    ("Home", &[Template::Homepage]),
    ("Modules", &[Template::Modules, Template::Module]),
    ("Dashi", &[Template::Dashi]),
];

pub struct NavBar<'a> {
    pub template: Template,
    pub path: &'a str,
    pub login: LoginState,
    pub status_message: &'a str,
    /// `Some(frame)` while the active view is loading.
    pub spinner_frame: Option<usize>,
}

impl<'a> NavBar<'a> {
    pub fn line(&self) -> Line<'a> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut spans = vec![Span::styled(
            " Domos",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        spans.push(separator.clone());

        for (i, (label, templates)) in TABS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if templates.contains(&self.template) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(*label, style));
        }

        spans.push(separator.clone());
        spans.push(Span::styled(self.path, Style::default().fg(Color::White)));
        spans.push(separator.clone());
        let login_style = match self.login {
            LoginState::LoggedIn => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(self.login.label(), login_style));

        if let Some(frame) = self.spinner_frame {
            spans.push(separator.clone());
            spans.push(Span::styled(
                SPINNER[frame % SPINNER.len()],
                Style::default().fg(Color::Yellow),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(separator);
            spans.push(Span::raw(self.status_message));
        }

        Line::from(spans)
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
