//! # ShellKit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout ShellKit. Conditions
//! that a caller may want to react to (a failed command, a command that never
//! started, an empty directory stack) get their own `ShellError` variant;
//! everything else (plain I/O failures) travels as an `anyhow::Error` with
//! context attached.
//!
//! ## Architecture
//!
//! - `ShellError`: a `thiserror` enum naming the distinguishable conditions.
//! - `Result<T>`: an alias for `anyhow::Result<T>`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! match helper.run_command(&line, RunOptions::default()).await {
//!     Ok(output) => println!("{}", output.stdout),
//!     Err(e) => match e.downcast_ref::<ShellError>() {
//!         Some(ShellError::CommandFailed { exit_code, .. }) => {
//!             println!("exited with {:?}", exit_code);
//!         }
//!         _ => return Err(e),
//!     },
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for ShellKit.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard input closed before a prompt received an answer.
    #[error("Terminated by user")]
    UserTerminated,

    #[error("There is no location to pop")]
    EmptyLocationStack,

    #[error("Failed to change directory to '{}': {source}", .path.display())]
    ChangeDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Command line is empty")]
    EmptyCommand,

    /// The child process could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The child process ran and exited unsuccessfully.
    #[error("Command '{command}' failed ({})", describe_exit(.exit_code))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl ShellError {
    /// Exit code of a failed command, if this is a `CommandFailed` that exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ShellError::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
