use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the console data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. OPSDECK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.opsdeck (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("OPSDECK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("opsdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".opsdeck"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Registry name of the user directory backend.
    pub name: String,
    /// Artificial per-query delay in milliseconds.
    pub latency_ms: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            name: "memory".to_string(),
            latency_ms: opsdeck_providers::DEFAULT_LATENCY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

fn default_page_size() -> usize {
    opsdeck_types::DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            directory: DirectoryConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.directory.name, "memory");
        assert_eq!(config.directory.latency_ms, 600);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.page_size = 25;
        config.directory.latency_ms = 0;
        config.save_to(&path).unwrap();

        let restored = Config::load_from(&path).unwrap();
        assert_eq!(restored.page_size, 25);
        assert_eq!(restored.directory.latency_ms, 0);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.directory.name, "memory");
    }

    #[test]
    fn test_explicit_path_wins_over_environment() {
        let resolved = resolve_data_dir(Some("/tmp/deck")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/deck"));
    }
}
