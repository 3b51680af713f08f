//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temp directory holding the data directory (and so
//! `config.toml`) and a report output directory. Commands run against an
//! API URL that refuses connections unless a test overrides it.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Nothing listens on port 1; list calls degrade to an empty collection
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/itens";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use itemreg_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["--format", "json", "list"]).unwrap();
/// assert!(result.success());
/// assert_eq!(result.stdout().trim(), "[]");
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    reports_dir: PathBuf,
    api_url: Option<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".itemreg");
        let reports_dir = temp_dir.path().join("reports");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            reports_dir,
            api_url: Some(UNREACHABLE_API.to_string()),
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Let the command resolve the API URL itself (env, then config file)
    pub fn without_api_override(mut self) -> Self {
        self.api_url = None;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if let Some(url) = &self.api_url {
            cmd.arg("--api-url").arg(url);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("ITEMREG_API_URL");
        cmd.env_remove("ITEMREG_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `itemreg` binary with `args` and capture the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("itemreg")
            .map_err(|e| anyhow::anyhow!("Failed to find itemreg binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
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
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
