//! # SupportBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the real `supportbot` binary inside its own temporary directory with an
//! explicit (empty by default) config file, so user or project configuration
//! on the machine running the tests never leaks in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FALLBACK: &str =
    "I'm sorry, I didn't understand that. Let me connect you to our support team.";
pub const HOURS: &str = "Our working hours are 9 AM to 5 PM, Monday through Friday.";

/// An isolated working directory with a config file in it.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    /// Sandbox with an empty config file (all defaults).
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(config_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("config.toml"), config_toml).expect("Failed to write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    /// Where the default config sends unknown queries.
    pub fn default_log_path(&self) -> PathBuf {
        self.path().join("chatbot_unknowns.log")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    /// `supportbot --config <sandbox config>` running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = supportbot_cmd();
        cmd.current_dir(self.path())
            .env_remove("SUPPORTBOT_CONFIG")
            .env_remove("SUPPORTBOT_CATALOG")
            .env_remove("SUPPORTBOT_LOG_FILE")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

/// `assert_cmd::Command` for the compiled `supportbot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn supportbot_cmd() -> Command {
    Command::cargo_bin("supportbot").expect("Failed to find supportbot binary for testing")
}
