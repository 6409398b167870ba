//! # ShellKit Command Handlers
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per group of subcommands. Each defines its Clap `Args`
//! structs and a `handle_*` function that receives the `ShellHelper`
//! built in `main`.
//!
//! - **`ask`**: `shellkit ask`
//! - **`file`**: `shellkit read`, `shellkit write`
//! - **`port`**: `shellkit port-pid`
//! - **`run`**: `shellkit run`, `shellkit spawn`, `shellkit wait`
//!
pub mod ask;
pub mod file;
pub mod port;
pub mod run;
