use super::shell::UiState;
use crate::presentation::view_models::{FetchViewModel, PaginationViewModel, UsersScreenViewModel};
use opsdeck_types::MATCH_ALL;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
};

pub fn render_users(frame: &mut Frame, area: Rect, vm: &UsersScreenViewModel, ui: &UiState<'_>) {
    let [filters, body, pager] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    render_filters(frame, filters, vm, ui);

    match &vm.fetch {
        FetchViewModel::Idle => {}
        FetchViewModel::Loading => render_message(frame, body, "Loading users...", Color::DarkGray),
        FetchViewModel::Empty => render_message(frame, body, "No users found", Color::DarkGray),
        FetchViewModel::Error { message } => {
            render_message(frame, body, &format!("{} (press R to retry)", message), Color::Red)
        }
        FetchViewModel::Table { rows, pagination } => {
            render_table(frame, body, rows);
            render_pager(frame, pager, pagination);
        }
    }
}

fn render_filters(frame: &mut Frame, area: Rect, vm: &UsersScreenViewModel, ui: &UiState<'_>) {
    let [search_area, role_area, status_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(18),
        Constraint::Length(18),
    ])
    .areas(area);

    let search_title = if vm.search_pending {
        "Search (/) ..."
    } else {
        "Search (/)"
    };
    let search_text: Line = if ui.search_editing {
        Line::styled(
            format!("{}\u{2588}", ui.search_input),
            Style::default().fg(Color::Yellow),
        )
    } else if vm.search.is_empty() {
        Line::styled(
            "Search by name or email...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::raw(vm.search.clone())
    };
    frame.render_widget(
        Paragraph::new(search_text).block(Block::bordered().title(search_title)),
        search_area,
    );

    let role_label = vm.role.map_or(MATCH_ALL.to_string(), |role| role.to_string());
    frame.render_widget(
        Paragraph::new(role_label).block(Block::bordered().title("Role (r)")),
        role_area,
    );

    let status_label = vm
        .status
        .map_or(MATCH_ALL.to_string(), |status| status.to_string());
    frame.render_widget(
        Paragraph::new(status_label).block(Block::bordered().title("Status (s)")),
        status_area,
    );
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let widget = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .block(Block::bordered().title("Users"));
    frame.render_widget(widget, area);
}

fn render_table(frame: &mut Frame, area: Rect, rows: &[crate::presentation::view_models::UserRow]) {
    let header = Row::new(["Name", "Email", "Role", "Status", "Join Date"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.name.clone()),
            Cell::from(row.email.clone()),
            Cell::from(Span::styled(
                row.role.clone(),
                Style::default().fg(role_color(&row.role)),
            )),
            Cell::from(Span::styled(
                row.status.clone(),
                Style::default().fg(status_color(&row.status)),
            )),
            Cell::from(row.join_date.clone()),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(20),
            Constraint::Length(26),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::bordered().title("Users"));

    frame.render_widget(table, area);
}

fn render_pager(frame: &mut Frame, area: Rect, pagination: &PaginationViewModel) {
    let strip = pagination
        .strip
        .iter()
        .map(|entry| match entry {
            Some(page) if *page == pagination.page => format!("[{}]", page),
            Some(page) => page.to_string(),
            None => "\u{2026}".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::raw(format!("{}  pages: {}", pagination.range_label, strip)),
        Line::styled(
            pager_hints(pagination),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn pager_hints(pagination: &PaginationViewModel) -> String {
    match (pagination.has_prev, pagination.has_next) {
        (true, true) => "\u{2190}/\u{2192} page".to_string(),
        (true, false) => "\u{2190} previous page".to_string(),
        (false, true) => "\u{2192} next page".to_string(),
        (false, false) => String::new(),
    }
}

fn role_color(role: &str) -> Color {
    match role {
        "admin" => Color::Magenta,
        "user" => Color::Blue,
        _ => Color::Gray,
    }
}

fn status_color(status: &str) -> Color {
    match status {
        "active" => Color::Green,
        "inactive" => Color::Red,
        "pending" => Color::Yellow,
        _ => Color::Gray,
    }
}
