//! # ShellKit UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything the user sees or answers on the terminal:
//!
//! - **`console`**: colored status lines (info, success, warning, error),
//!   the terminal title, and live echo of child process output.
//! - **`prompt`**: yes/no and default-value questions read from stdin.
//!
//! ```rust,ignore
//! use shellkit::common::ui::{console::{Console, OnError}, prompt};
//!
//! let console = Console::default();
//! console.show_message("Building...");
//! let answer = prompt::ask(&mut stdin.lock(), &mut stdout, "Continue?", None)?;
//! if !answer.is_yes() {
//!     console.show_error("Aborted", OnError::Exit);
//! }
//! ```
//!

/// Colored status lines and terminal title.
pub mod console;
/// Interactive questions on stdin.
pub mod prompt;
