//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides an isolated data directory with a zero-latency directory config,
//! helpers to seed a session, and command execution through the real binary.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment for CLI integration tests.
///
/// # Example
/// ```no_run
/// use opsdeck_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.sign_in("admin@example.com").unwrap();
/// let result = world.run(&["users", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated environment with artificial latency disabled.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".opsdeck");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let config = "page_size = 10\n\n[directory]\nname = \"memory\"\nlatency_ms = 0\n";
        std::fs::write(data_dir.join("config.toml"), config).expect("Failed to write config");

        Self { temp_dir, data_dir }
    }

    /// Get the data directory path (.opsdeck).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Overwrite the config file.
    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    /// Seed a session file directly, skipping the login command's simulated
    /// credential check.
    pub fn sign_in(&self, email: &str) -> Result<()> {
        let name = email.split('@').next().unwrap_or(email);
        let session = serde_json::json!({
            "id": "test-session",
            "email": email,
            "name": name,
            "created_at": "2024-06-01T00:00:00Z",
        });
        std::fs::write(
            self.data_dir.join("session.json"),
            serde_json::to_string_pretty(&session)?,
        )?;
        Ok(())
    }

    /// Whether a session file is currently stored.
    pub fn has_session(&self) -> bool {
        self.data_dir.join("session.json").exists()
    }

    /// Execute a command using the project's binary and return the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("opsdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find opsdeck binary: {}", e))?;

        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir());
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured result of one CLI invocation.
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout)
            .map_err(|e| anyhow::anyhow!("stdout is not JSON: {}\n{}", e, self.stdout))
    }
}
