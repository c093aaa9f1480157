//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that start from an empty process environment
//! - Base configuration fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Seed node addresses used across tests.
#[allow(dead_code)]
pub const SEED_A: &str = "akka.tcp://Sys@localhost:9140";
#[allow(dead_code)]
pub const SEED_B: &str = "akka.tcp://Sys@localhost:9141";

/// A YAML base configuration resembling a typical cluster node.
#[allow(dead_code)]
pub const BASE_YAML: &str = "\
akka:
  actor:
    provider: cluster
  loglevel: INFO
  remote:
    dot-netty:
      tcp:
        hostname: 127.0.0.1
        port: 0
  cluster:
    seed-nodes: []
";

/// Test environment with an isolated temporary directory.
///
/// Commands built from it never inherit the test runner's environment, so
/// only the variables a test sets explicitly are visible to `envboot`.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with an empty environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("envboot").expect("Failed to find envboot binary");
        cmd.env_clear();
        cmd
    }

    /// Get a command builder with `--config` pointing at `config`.
    pub fn command_with_config(&self, config: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("--config").arg(config);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the standard YAML base configuration.
    pub fn base_config(&self) -> PathBuf {
        self.write_file("app.yaml", BASE_YAML)
    }

    /// Run a command and return its stdout, asserting success.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run envboot");
        assert!(
            output.status.success(),
            "envboot failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
