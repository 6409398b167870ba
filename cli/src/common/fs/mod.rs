//! # ShellKit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers, split by concern:
//!
//! - **`io`**: whole-file UTF-8 reads and writes (`read_text_file`, `write_text_file`).
//! - **`location`**: the working-directory stack (`LocationStack`) and its
//!   scope guard (`LocationGuard`).
//!
//! Import from the submodule directly, e.g. `shellkit::common::fs::io::read_text_file`.
//!

/// Whole-file text reads and writes.
pub mod io;
/// Working-directory stack with scoped changes.
pub mod location;
