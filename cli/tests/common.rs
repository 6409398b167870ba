//! # ShellKit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `run.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and
//! runs the compiled `shellkit` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get ShellKit Command (`shellkit_cmd`)
///
/// An `assert_cmd::Command` for the `shellkit` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn shellkit_cmd() -> Command {
    Command::cargo_bin("shellkit").expect("Failed to find shellkit binary for testing")
}

/// Writes a configuration file that turns off colors and the terminal title,
/// so output can be compared exactly.
pub fn plain_config(dir: &Path) -> PathBuf {
    let path = dir.join("shellkit.toml");
    std::fs::write(&path, "[console]\ncolor = false\nset_title = false\n")
        .expect("Failed to write test configuration");
    path
}

/// `shellkit_cmd` preloaded with `--config <plain config>`.
pub fn plain_cmd(dir: &Path) -> Command {
    let mut cmd = shellkit_cmd();
    cmd.arg("--config").arg(plain_config(dir));
    cmd
}
