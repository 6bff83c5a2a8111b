use crate::config::Config;
use crate::controller::{FetchComplete, ListController};
use crate::session::SessionStore;
use crate::Result;
use opsdeck_providers::UserDirectory;
use opsdeck_types::{QueryParams, UserPage};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Root handle for one console instance: configuration, the user directory
/// and the session store, all rooted at a data directory.
pub struct Console {
    config: Config,
    data_dir: PathBuf,
    directory: Arc<dyn UserDirectory>,
}

impl Console {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&data_dir.join("config.toml"))?;
        let directory = opsdeck_providers::create_directory(
            &config.directory.name,
            Duration::from_millis(config.directory.latency_ms),
        )?;

        Ok(Self {
            config,
            data_dir,
            directory: Arc::from(directory),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn directory(&self) -> Arc<dyn UserDirectory> {
        self.directory.clone()
    }

    pub fn sessions(&self) -> SessionStore {
        SessionStore::new(&self.data_dir)
    }

    /// Controller for an interactive users view; completions arrive on the
    /// caller's channel.
    pub fn users_controller(&self, completions: Sender<FetchComplete>) -> ListController {
        ListController::new(self.directory(), completions)
    }

    /// One-shot query straight through the directory, for the non-interactive
    /// CLI path.
    pub fn query_users(&self, params: &QueryParams) -> Result<UserPage> {
        Ok(self.directory.query(params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_console() -> Console {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.directory.latency_ms = 0;
        config.save_to(&dir.path().join("config.toml")).unwrap();
        Console::open(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_open_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let console = Console::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(console.config().page_size, 10);
        assert_eq!(console.directory().name(), "memory");
    }

    #[test]
    fn test_one_shot_query() {
        let console = fast_console();
        let page = console.query_users(&QueryParams::new()).unwrap();
        assert_eq!(page.total, 12);
    }

    #[test]
    fn test_unknown_directory_in_config_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.directory.name = "ldap".to_string();
        config.save_to(&dir.path().join("config.toml")).unwrap();

        assert!(Console::open(dir.path().to_path_buf()).is_err());
    }
}
