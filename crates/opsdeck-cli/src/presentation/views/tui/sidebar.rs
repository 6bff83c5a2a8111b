use crate::presentation::view_models::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

pub fn render_sidebar(frame: &mut Frame, area: Rect, active: Screen) {
    let lines: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(index, screen)| {
            let label = format!(" {} {}", index + 1, screen.title());
            if *screen == active {
                Line::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(label)
            }
        })
        .collect();

    let sidebar = Paragraph::new(lines).block(Block::bordered().title("Menu"));
    frame.render_widget(sidebar, area);
}
