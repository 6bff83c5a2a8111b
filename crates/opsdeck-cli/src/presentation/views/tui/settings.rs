use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

/// Profile form state. Owned by the renderer; edits are local and the save
/// is an acknowledgement only, matching the product mock.
pub struct SettingsForm {
    pub values: [String; 4],
    pub focus: usize,
    pub saved: bool,
    seeded: bool,
}

impl SettingsForm {
    pub const LABELS: [&'static str; 4] = ["Full Name", "Email Address", "Company", "Role"];

    pub fn new() -> Self {
        Self {
            values: [
                String::new(),
                String::new(),
                "Your Company".to_string(),
                "Administrator".to_string(),
            ],
            focus: 0,
            saved: false,
            seeded: false,
        }
    }

    /// Fill name and email from the session, once.
    pub fn seed(&mut self, name: &str, email: &str) {
        if self.seeded {
            return;
        }
        self.values[0] = name.to_string();
        self.values[1] = email.to_string();
        self.seeded = true;
    }

    pub fn edit(&mut self, c: char) {
        self.values[self.focus].push(c);
        self.saved = false;
    }

    pub fn erase(&mut self) {
        self.values[self.focus].pop();
        self.saved = false;
    }

    pub fn focus_up(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_down(&mut self) {
        self.focus = (self.focus + 1).min(Self::LABELS.len() - 1);
    }

    pub fn submit(&mut self) {
        self.saved = true;
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_settings(frame: &mut Frame, area: Rect, form: &SettingsForm) {
    let [fields_area, ack_area, _rest] = Layout::vertical([
        Constraint::Length(3 * SettingsForm::LABELS.len() as u16),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let field_constraints: Vec<Constraint> = SettingsForm::LABELS
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    let rows = Layout::vertical(field_constraints).split(fields_area);

    for (index, (label, row)) in SettingsForm::LABELS.iter().zip(rows.iter()).enumerate() {
        let focused = index == form.focus;
        let text = if focused {
            format!("{}\u{2588}", form.values[index])
        } else {
            form.values[index].clone()
        };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let field = Paragraph::new(text)
            .style(style)
            .block(Block::bordered().title(*label));
        frame.render_widget(field, *row);
    }

    let ack: Line = if form.saved {
        Line::styled("Saved!", Style::default().fg(Color::Green))
    } else {
        Line::styled(
            "\u{2191}/\u{2193} field \u{00b7} type to edit \u{00b7} Enter save",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(ack), ack_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fills_name_and_email_once() {
        let mut form = SettingsForm::new();
        form.seed("alice", "alice@example.com");
        form.seed("bob", "bob@example.com");

        assert_eq!(form.values[0], "alice");
        assert_eq!(form.values[1], "alice@example.com");
        assert_eq!(form.values[2], "Your Company");
    }

    #[test]
    fn test_editing_after_save_clears_the_acknowledgement() {
        let mut form = SettingsForm::new();
        form.submit();
        assert!(form.saved);

        form.edit('x');
        assert!(!form.saved);

        form.submit();
        form.erase();
        assert!(!form.saved);
    }

    #[test]
    fn test_focus_stays_in_bounds() {
        let mut form = SettingsForm::new();
        form.focus_up();
        assert_eq!(form.focus, 0);

        for _ in 0..10 {
            form.focus_down();
        }
        assert_eq!(form.focus, SettingsForm::LABELS.len() - 1);
    }
}
