#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary data file
pub struct CliTestHarness {
    temp_dir: TempDir,
    data_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary data file location
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let data_path = temp_dir.path().join("todos.json");

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("todo").expect("Failed to find todo binary");

        // Run inside the temp dir so no stray todo.toml is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env("TODO_FILE", &self.data_path);
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Get the data file path for this test instance
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Parsed content of the data file
    pub fn read_document(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.data_path).expect("Failed to read data file");
        serde_json::from_str(&raw).expect("Data file is not valid JSON")
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert a specific exit code
    pub fn run_with_code(&self, args: &[&str], code: i32) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().code(code)
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Adds the two todos used throughout the filter tests: ids 1 and 2
    pub fn seed_bills_and_milk(harness: &CliTestHarness) {
        harness.run_success(&["add", "pay", "bills", "--priority", "1", "--due", "2026-01-20"]);
        harness.run_success(&["add", "buy", "milk", "--priority", "2", "--due", "2026-02-01"]);
    }
}
