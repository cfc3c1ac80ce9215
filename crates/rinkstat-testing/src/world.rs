//! TestWorld pattern for CLI integration tests.
//!
//! Provides an isolated temp directory holding a config file and event
//! logs, and configures commands so they never read the user's real
//! configuration.

use anyhow::Result;
use assert_cmd::Command;
use rinkstat_types::Event;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated CLI test environment.
///
/// # Example
/// ```no_run
/// use rinkstat_testing::{TestWorld, log_of};
/// use rinkstat_types::EventKind;
///
/// let world = TestWorld::new();
/// let path = world
///     .write_events("session.json", &log_of(&[EventKind::GameStart]))
///     .unwrap();
/// let result = world.run(&["replay", path.to_str().unwrap()]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
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
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config file handed to every command via `--config` (may not exist)
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` with the given TOML body.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Serialize events as a JSON array into the temp directory.
    pub fn write_events(&self, name: &str, events: &[Event]) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(events)?)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. `Command::cargo_bin("rinkstat")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `rinkstat` binary with `args`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Run the `rinkstat` binary with `args`, feeding `stdin` as input.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("rinkstat")
            .map_err(|e| anyhow::anyhow!("Failed to find rinkstat binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured result of one CLI invocation.
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

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
