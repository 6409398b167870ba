//! # ShellKit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! The building blocks `ShellHelper` is assembled from. Each submodule
//! covers one concern and can be used on its own:
//!
//! - **`fs`**: whole-file text I/O and the working-directory stack.
//! - **`network`**: pid lookup for a listening port via a network-status command.
//! - **`process`**: running child processes, with or without waiting.
//! - **`ui`**: colored console lines and interactive prompts.
//!
//! ```rust,ignore
//! use shellkit::common::{fs, process, ui};
//!
//! let console = ui::console::Console::default();
//! let runner = process::ProcessRunner::new(console.clone());
//! let text = fs::io::read_text_file(Path::new("Cargo.toml"))?;
//! ```
//!

/// Filesystem operations (text I/O, directory stack).
pub mod fs;
/// Port owner lookup.
pub mod network;
/// Child process execution.
pub mod process;
/// Terminal output and prompts.
pub mod ui;
