//! # ShellKit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Whole-file text I/O. Both functions are synchronous wrappers around
//! `std::fs` that treat content as UTF-8 and attach the offending path to
//! any error via `anyhow::Context`.
//!
//! - **`read_text_file`**: reads the entire file into a `String`. Fails if
//!   the file is missing, unreadable, or not valid UTF-8.
//! - **`write_text_file`**: writes a `&str`, replacing any existing
//!   content. The parent directory must already exist.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shellkit::common::fs::io;
//! use std::path::Path;
//!
//! let path = Path::new("./version.txt");
//! io::write_text_file(path, "1.4.2\n")?;
//! assert_eq!(io::read_text_file(path)?, "1.4.2\n");
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the entire content of a UTF-8 text file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened or read, or if its
/// bytes are not valid UTF-8, with context indicating which file failed.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file as UTF-8, overwriting it if it exists.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be created or written (missing
/// parent directory, permissions, I/O error).
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
