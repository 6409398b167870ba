//! # ShellKit Port Owner Command
//!
//! File: cli/src/commands/port.rs
//!
//! `shellkit port-pid <PORT>` prints the pid listening on `0.0.0.0:<PORT>`
//! according to the configured network-status command, or fails with
//! exit status 1 when nothing is listening there.
//!
use anyhow::Result;
use clap::Parser;
use shellkit::ShellHelper;

/// Arguments for the 'port-pid' subcommand.
#[derive(Parser, Debug)]
pub struct PortPidArgs {
    /// TCP port to look up.
    port: u16,
}

/// Handler function for the 'port-pid' subcommand.
pub async fn handle_port_pid(helper: &ShellHelper, args: PortPidArgs) -> Result<()> {
    tracing::info!("Looking up owner of port {}", args.port);
    match helper.process_id_by_port(args.port).await? {
        Some(pid) => {
            println!("{}", pid);
            Ok(())
        }
        None => anyhow::bail!("No process is listening on port {}", args.port),
    }
}
