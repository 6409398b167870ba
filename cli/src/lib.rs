//! # ShellKit Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Small conveniences for tools that behave like shell scripts: colored
//! status lines, yes/no prompts, a `pushd`/`popd` directory stack with
//! scoped changes, whole-file text I/O, child processes (awaited with live
//! output, or detached), and a listening-port to pid lookup.
//!
//! ## Architecture
//!
//! - `core`: configuration (`core::config`) and errors (`core::error`).
//! - `common`: the individual components (`fs`, `network`, `process`, `ui`).
//! - `ShellHelper`: a facade over all of them, built once from a `Config`.
//!
pub mod common;
pub mod core;
mod helper;

pub use crate::common::process::{CommandLine, CommandOutput, RunOptions};
pub use crate::common::ui::console::OnError;
pub use crate::common::ui::prompt::Answer;
pub use crate::core::error::ShellError;
pub use crate::helper::ShellHelper;
