//! Test environment for isolated relo testing.
//!
//! Provides `TestEnv` - temp directories for the project (working directory)
//! and for HOME, plus helpers to run the relo binary against them with a
//! scrubbed `RELO_*` environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables that would leak the developer's own settings into a test run
const RELO_VARS: &[&str] = &[
    "RELO_SIGNAL",
    "RELO_WAIT",
    "RELO_GROUP",
    "RELO_PARALLEL",
    "RELO_VERBOSITY",
    "RELO_FORMAT",
    "RELO_LOG",
];

/// Result of running the relo binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory used as the working directory
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    relo_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            relo_bin: PathBuf::from(env!("CARGO_BIN_EXE_relo")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run relo in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run relo from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.relo_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"));

        for var in RELO_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute relo");

        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }
}

fn write_file(full_path: &Path, content: &str) {
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(full_path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
