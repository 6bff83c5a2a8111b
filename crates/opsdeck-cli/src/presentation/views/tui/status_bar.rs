use crate::presentation::view_models::{DashboardViewModel, Screen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

pub fn render_status_bar(frame: &mut Frame, area: Rect, vm: &DashboardViewModel) {
    let hints = match vm.screen {
        Screen::Users => "Tab screens \u{00b7} / search \u{00b7} r role \u{00b7} s status \u{00b7} R retry \u{00b7} q quit",
        Screen::Settings => "Tab screens \u{00b7} Esc quit",
        Screen::Overview => "Tab screens \u{00b7} 1-3 jump \u{00b7} q quit",
    };

    let mut lines = vec![Line::styled(hints, Style::default().fg(Color::DarkGray))];
    if vm.screen == Screen::Users && !vm.share.is_empty() {
        lines.push(Line::styled(
            format!("share: ?{}", vm.share),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
