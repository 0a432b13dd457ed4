//! Common test utilities for adc-matrix integration tests.
//!
//! Provides `TestEnv`, an isolated temp working directory plus helpers to
//! run the compiled binary in it.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running an adc-matrix CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get a path relative to the environment root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a config file into the environment root
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path("adc-matrix.toml");
        std::fs::write(&path, content).expect("failed to write config");
        path
    }

    /// Run the adc-matrix binary from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    /// Run the adc-matrix binary from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_adc-matrix"))
            .current_dir(cwd)
            .args(args)
            .output()
            .expect("failed to execute adc-matrix");

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
