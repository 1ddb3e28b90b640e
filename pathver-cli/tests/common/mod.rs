//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment with its own working and config directories
//! - Command builder helpers
//! - JSON output parsing

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const PATHVER_VARS: [&str; 5] = [
    "PATHVER_DIALECT",
    "PATHVER_OUTPUT_FORMAT",
    "PATHVER_PROJECT_ROOT",
    "PATHVER_CONFIG_DIR",
    "PATHVER_LOG_MODE",
];

/// Test environment with isolated working and config directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for spawned commands
    pub work_dir: PathBuf,
    /// Directory passed as --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Get a command builder with a clean environment and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathver").expect("Failed to find pathver binary");
        for var in PATHVER_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Get a command builder with `--config-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Write the user config.yaml.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        write_file(&self.config_dir, "config.yaml", content)
    }

    /// Write a file into the working directory.
    pub fn write_project_file(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.work_dir, name, content)
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run pathver");
        assert!(
            output.status.success(),
            "pathver {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    /// Run a command with `--format json` and parse its stdout.
    pub fn json_of(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.extend(["--format", "json"]);
        serde_json::from_str(&self.stdout_of(&full)).expect("Output is not valid JSON")
    }
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
