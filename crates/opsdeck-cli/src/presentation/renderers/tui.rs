//! TUI renderer for the dashboard shell.
//!
//! Receives `DashboardViewModel` updates via channel and renders them with
//! Ratatui. The renderer owns UI-only state (search editing, the settings
//! form, the quit flag) and reports user intents back to the handler; it
//! never owns domain data.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use crate::presentation::view_models::{DashboardViewModel, GateViewModel, Screen};
use crate::presentation::views::tui::{SettingsForm, UiState, render_gate, render_shell, render_signed_out};
use opsdeck_types::{Role, Status};

/// Events sent from handler to renderer.
pub enum TuiEvent {
    /// Update the screen with a new view model.
    Update(Box<DashboardViewModel>),
    /// Unrecoverable condition; tear the terminal down.
    Fatal,
}

/// Intents sent from renderer to handler.
#[derive(Debug, Clone)]
pub enum UiIntent {
    ScreenSelected(Screen),
    SearchChanged(String),
    RoleSelected(Option<Role>),
    StatusSelected(Option<Status>),
    NextPage,
    PrevPage,
    Retry,
    Quit,
}

pub struct TuiRenderer {
    intents: Sender<UiIntent>,
    current: Option<DashboardViewModel>,
    search_editing: bool,
    search_input: String,
    settings: SettingsForm,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(intents: Sender<UiIntent>) -> Self {
        Self {
            intents,
            current: None,
            search_editing: false,
            search_input: String::new(),
            settings: SettingsForm::new(),
            should_quit: false,
        }
    }

    /// Set up the terminal, run the event loop, restore the terminal.
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Keyboard input with timeout, so view model updates still land
            // while the user is idle.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }

            while let Ok(tui_event) = rx.try_recv() {
                match tui_event {
                    TuiEvent::Update(vm) => self.apply_update(*vm),
                    TuiEvent::Fatal => self.should_quit = true,
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn apply_update(&mut self, vm: DashboardViewModel) {
        if let GateViewModel::Ready { name, email } = &vm.gate {
            self.settings.seed(name, email);
        }
        if !self.search_editing {
            self.search_input = vm.users.search.clone();
        }
        self.current = Some(vm);
    }

    fn render(&self, frame: &mut Frame) {
        let Some(vm) = &self.current else {
            render_gate(frame, frame.area());
            return;
        };

        match &vm.gate {
            GateViewModel::Checking => render_gate(frame, frame.area()),
            GateViewModel::SignedOut => render_signed_out(frame, frame.area()),
            GateViewModel::Ready { name, email } => {
                let ui = UiState {
                    search_editing: self.search_editing,
                    search_input: &self.search_input,
                    settings: &self.settings,
                };
                render_shell(frame, vm, name, email, &ui);
            }
        }
    }

    fn send(&self, intent: UiIntent) {
        let _ = self.intents.send(intent);
    }

    fn quit(&mut self) {
        self.send(UiIntent::Quit);
        self.should_quit = true;
    }

    fn select_screen(&mut self, screen: Screen) {
        self.search_editing = false;
        self.send(UiIntent::ScreenSelected(screen));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let screen = self.current.as_ref().map(|vm| vm.screen);

        if self.search_editing {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                if let Some(screen) = screen {
                    self.select_screen(screen.next());
                }
                return;
            }
            KeyCode::BackTab => {
                if let Some(screen) = screen {
                    self.select_screen(screen.prev());
                }
                return;
            }
            KeyCode::Esc => {
                self.quit();
                return;
            }
            _ => {}
        }

        match screen {
            Some(Screen::Users) => self.handle_users_key(key),
            Some(Screen::Settings) => self.handle_settings_key(key),
            _ => self.handle_overview_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.search_editing = false,
            KeyCode::Backspace => {
                self.search_input.pop();
                self.send(UiIntent::SearchChanged(self.search_input.clone()));
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.send(UiIntent::SearchChanged(self.search_input.clone()));
            }
            _ => {}
        }
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') => self.search_editing = true,
            KeyCode::Char('r') => {
                let role = self.current.as_ref().and_then(|vm| vm.users.role);
                self.send(UiIntent::RoleSelected(next_role(role)));
            }
            KeyCode::Char('s') => {
                let status = self.current.as_ref().and_then(|vm| vm.users.status);
                self.send(UiIntent::StatusSelected(next_status(status)));
            }
            KeyCode::Char('R') => self.send(UiIntent::Retry),
            KeyCode::Left => self.send(UiIntent::PrevPage),
            KeyCode::Right => self.send(UiIntent::NextPage),
            KeyCode::Char(c) => self.handle_jump_key(c),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.settings.focus_up(),
            KeyCode::Down => self.settings.focus_down(),
            KeyCode::Enter => self.settings.submit(),
            KeyCode::Backspace => self.settings.erase(),
            KeyCode::Char(c) => self.settings.edit(c),
            _ => {}
        }
    }

    fn handle_overview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c) => self.handle_jump_key(c),
            _ => {}
        }
    }

    fn handle_jump_key(&mut self, c: char) {
        let target = match c {
            '1' => Some(Screen::Overview),
            '2' => Some(Screen::Users),
            '3' => Some(Screen::Settings),
            _ => None,
        };
        if let Some(screen) = target {
            self.select_screen(screen);
        }
    }
}

fn next_role(current: Option<Role>) -> Option<Role> {
    match current {
        None => Some(Role::Admin),
        Some(Role::Admin) => Some(Role::User),
        Some(Role::User) => Some(Role::Viewer),
        Some(Role::Viewer) => None,
    }
}

fn next_status(current: Option<Status>) -> Option<Status> {
    match current {
        None => Some(Status::Active),
        Some(Status::Active) => Some(Status::Inactive),
        Some(Status::Inactive) => Some(Status::Pending),
        Some(Status::Pending) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_cycle_returns_to_match_all() {
        let mut role = None;
        for _ in 0..Role::ALL.len() {
            role = next_role(role);
            assert!(role.is_some());
        }
        assert_eq!(next_role(role), None);
    }

    #[test]
    fn test_status_cycle_returns_to_match_all() {
        let mut status = None;
        for _ in 0..Status::ALL.len() {
            status = next_status(status);
            assert!(status.is_some());
        }
        assert_eq!(next_status(status), None);
    }
}
