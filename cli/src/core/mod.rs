//! # ShellKit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every component:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: `ShellError` and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use shellkit::core::config;
//! use shellkit::core::error::{ShellError, Result};
//! ```
//!
pub mod config;
pub mod error;
