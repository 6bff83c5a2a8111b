use super::settings::SettingsForm;
use crate::presentation::view_models::{DashboardViewModel, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Renderer-owned UI state the views need to draw.
pub struct UiState<'a> {
    pub search_editing: bool,
    pub search_input: &'a str,
    pub settings: &'a SettingsForm,
}

/// Full-screen placeholder while session presence is undetermined.
pub fn render_gate(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("Checking session...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::bordered().title("opsdeck"));
    frame.render_widget(message, area);
}

/// Full-screen notice when the presence check settles on no session.
pub fn render_signed_out(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("Not signed in. Run `opsdeck login` first.")
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::bordered().title("opsdeck"));
    frame.render_widget(message, area);
}

/// The signed-in shell: header, sidebar, active screen, footer.
pub fn render_shell(
    frame: &mut Frame,
    vm: &DashboardViewModel,
    name: &str,
    email: &str,
    ui: &UiState<'_>,
) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header, name, email);

    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(22), Constraint::Min(0)]).areas(body);
    super::sidebar::render_sidebar(frame, sidebar, vm.screen);

    match vm.screen {
        Screen::Overview => super::overview::render_overview(frame, content, &vm.overview),
        Screen::Users => super::users::render_users(frame, content, &vm.users, ui),
        Screen::Settings => super::settings::render_settings(frame, content, ui.settings),
    }

    super::status_bar::render_status_bar(frame, footer, vm);
}

fn render_header(frame: &mut Frame, area: Rect, name: &str, email: &str) {
    let line = Line::from(vec![
        Span::styled("Dashboard", Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            format!("{} <{}>", name, email),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let header = Paragraph::new(line).block(Block::bordered().title("opsdeck"));
    frame.render_widget(header, area);
}
