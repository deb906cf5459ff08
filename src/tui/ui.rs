use crate::core::state::App;
use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DashiPage, HomePage, ModuleDetail, ModuleList, NavBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [nav_area, main_area, footer_area] = layout.areas(frame.area());

    NavBar {
        template: app.template,
        path: &app.path,
        login: app.session.login,
        status_message: &app.status_message,
        spinner_frame: app.view.is_loading().then_some(spinner_frame),
    }
    .render(frame, nav_area);

    draw_view(frame, main_area, app, tui);

    match tui.prompt.as_mut() {
        Some(prompt) => prompt.render(frame, footer_area),
        None => draw_help(frame, footer_area, &app.view),
    }
}

fn draw_view(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    match &app.view {
        View::Home(_) => HomePage.render(frame, area),
        View::Dashi(_) => DashiPage.render(frame, area),
        View::Modules(controller) => {
            ModuleList::new(&mut tui.module_list, &controller.modules).render(frame, area)
        }
        View::Module(controller) => {
            ModuleDetail::new(&mut tui.module_detail, controller).render(frame, area)
        }
    }
}

fn help_text(view: &View) -> &'static str {
    match view {
        View::Modules(_) => " ↑↓ select  Enter open  r reload  h home  d dashi  : path  q quit",
        View::Module(_) => " ↑↓ scroll  Space raw json  Esc back  r reload  : path  q quit",
        View::Home(_) | View::Dashi(_) => " h home  m modules  d dashi  : path  q quit",
    }
}

fn draw_help(frame: &mut Frame, area: Rect, view: &View) {
    let help = Span::styled(help_text(view), Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
