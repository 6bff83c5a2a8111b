//! Ratatui views for the dashboard shell.
//!
//! Views are draw-only: they take a view model (plus renderer-owned UI
//! state) and a target area, and never mutate anything.

mod overview;
mod settings;
mod shell;
mod sidebar;
mod status_bar;
mod users;

pub use settings::SettingsForm;
pub use shell::{UiState, render_gate, render_shell, render_signed_out};
