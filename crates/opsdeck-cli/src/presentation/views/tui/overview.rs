use crate::presentation::view_models::OverviewViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

pub fn render_overview(frame: &mut Frame, area: Rect, vm: &OverviewViewModel) {
    let [cards_area, _rest] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    let constraints: Vec<Constraint> = vm
        .stats
        .iter()
        .map(|_| Constraint::Ratio(1, vm.stats.len().max(1) as u32))
        .collect();
    let columns = Layout::horizontal(constraints).split(cards_area);

    for (card, column) in vm.stats.iter().zip(columns.iter()) {
        let lines = vec![
            Line::styled(
                card.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(card.change.clone(), Style::default().fg(Color::Green)),
        ];
        let widget = Paragraph::new(lines).block(Block::bordered().title(card.title.clone()));
        frame.render_widget(widget, *column);
    }
}
