// NOTE: opsdeck Architecture Rationale
//
// Why a handler/renderer split for the dashboard?
// - The handler owns domain state (session gate, query snapshot, fetch
//   controller) on one thread; the renderer owns UI-only state (focus,
//   input buffers) on another
// - The two sides talk over channels, so every state transition is a value
//   that can be exercised in tests without a terminal
// - Fetches are generation-stamped: overlapping directory requests cannot
//   race the visible state, whichever order their responses arrive in
//
// Why a mock directory behind a trait?
// - The console is a front-end exercise; the directory boundary is where a
//   real backend would slot in
// - Artificial latency is configuration, not code, so tests run at full
//   speed against the same pipeline

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat, RoleFilterArg, StatusFilterArg, UsersArgs};
pub use commands::run;
