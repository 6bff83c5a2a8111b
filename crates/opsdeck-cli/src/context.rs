use crate::args::{Cli, OutputFormat};
use anyhow::Result;
use opsdeck_runtime::{Console, SessionStore, resolve_data_dir};
use std::path::PathBuf;

/// Resolved execution context shared by all handlers.
pub struct CliContext {
    data_dir: PathBuf,
    format: OutputFormat,
}

impl CliContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
        Ok(Self {
            data_dir,
            format: cli.format,
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(&self.data_dir)
    }

    pub fn open_console(&self) -> Result<Console> {
        Ok(Console::open(self.data_dir.clone())?)
    }
}
