//! # Dashboard Component
//!
//! Placeholder view for `/dashi`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct DashiPage;

impl Component for DashiPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let placeholder = Paragraph::new("Nothing on the dashboard yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" Dashboard "));
        frame.render_widget(placeholder, area);
    }
}
