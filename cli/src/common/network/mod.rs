//! # ShellKit Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Finds which process owns a listening TCP port by asking the operating
//! system's network-status command. The default command is `netstat -ano`,
//! whose Windows output looks like:
//!
//! ```text
//!   Proto  Local Address          Foreign Address        State           PID
//!   TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1032
//!   TCP    0.0.0.0:8080           0.0.0.0:0              LISTENING       4321
//! ```
//!
//! The first line whose local-address column (the second one) equals
//! `<wildcard>:<port>` wins, and its last column is read as the pid. The
//! foreign-address column is never matched, so `0.0.0.0:0` there does not
//! make every listening line look like port 0. Other platforms can point
//! `network.netstat_command` at anything that prints the pid last.
//!
//! ## Architecture
//!
//! - `find_pid_for_port`: pure parser over the command's text output.
//! - `process_id_by_port`: runs the command quietly and applies the parser.
//!
use crate::common::process::{CommandLine, ProcessRunner, RunOptions};
use crate::core::config::NetworkConfig;
use crate::core::error::Result;
use tracing::debug;

/// Looks up the pid listening on `port` on the wildcard address.
///
/// Returns `Ok(None)` when no matching line is found. Fails if the
/// network-status command cannot be started or exits unsuccessfully.
pub async fn process_id_by_port(
    runner: &ProcessRunner,
    config: &NetworkConfig,
    port: u16,
) -> Result<Option<u32>> {
    let line = CommandLine::parse(&config.netstat_command)?;
    let output = runner.run_command(&line, RunOptions::quiet()).await?;
    let pid = find_pid_for_port(&output.stdout, port, &config.wildcard_address);
    debug!("Port {} owner lookup result: {:?}", port, pid);
    Ok(pid)
}

/// Extracts the pid from the first listing line bound to `wildcard:port`.
pub fn find_pid_for_port(listing: &str, port: u16, wildcard: &str) -> Option<u32> {
    let local_address = format!("{}:{}", wildcard, port);
    listing
        .split(['\r', '\n'])
        .find(|line| line.split_whitespace().nth(1) == Some(local_address.as_str()))?
        .split_whitespace()
        .last()?
        .parse()
        .ok()
}
