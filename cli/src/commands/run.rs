//! # ShellKit Process Commands
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! - `shellkit run [--quiet] [--in DIR] <COMMAND>...`: runs a command to
//!   completion with live output. With `--in`, the command runs inside
//!   `DIR` and the working directory is restored afterwards. A non-zero
//!   exit becomes this process's exit status.
//! - `shellkit spawn <COMMAND>...`: starts a detached command, prints its pid.
//! - `shellkit wait <MILLISECONDS>`: sleeps.
//!
//! A single quoted argument such as `"git status"` is split on whitespace;
//! several arguments are passed through as given.
//!
use anyhow::Result;
use clap::Parser;
use shellkit::{CommandLine, RunOptions, ShellError, ShellHelper};
use std::path::PathBuf;

/// Arguments for the 'run' subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Capture stdout without echoing it.
    #[arg(long, short)]
    quiet: bool,
    /// Directory to run the command in.
    #[arg(long = "in", value_name = "DIR")]
    in_dir: Option<PathBuf>,
    /// Program and arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

/// Arguments for the 'spawn' subcommand.
#[derive(Parser, Debug)]
pub struct SpawnArgs {
    /// Program and arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

/// Arguments for the 'wait' subcommand.
#[derive(Parser, Debug)]
pub struct WaitArgs {
    /// How long to sleep.
    milliseconds: u64,
}

/// Handler function for the 'run' subcommand.
pub async fn handle_run(helper: &mut ShellHelper, args: RunArgs) -> Result<()> {
    let line = command_line(&args.command)?;
    let options = if args.quiet {
        RunOptions::quiet()
    } else {
        helper.run_options()
    };
    tracing::info!("Handling run command: {} (in: {:?})", line, args.in_dir);

    match args.in_dir {
        Some(dir) => {
            let runner = helper.runner().clone();
            helper
                .in_location_async(&dir, || async move { runner.run_command(&line, options).await })
                .await??;
        }
        None => {
            helper.run_command(&line, options).await?;
        }
    }
    Ok(())
}

/// Handler function for the 'spawn' subcommand.
pub fn handle_spawn(helper: &ShellHelper, args: SpawnArgs) -> Result<()> {
    let line = command_line(&args.command)?;
    let pid = helper.run_command_no_wait(&line)?;
    println!("{}", pid);
    Ok(())
}

/// Handler function for the 'wait' subcommand.
pub async fn handle_wait(helper: &ShellHelper, args: WaitArgs) -> Result<()> {
    helper.delay(args.milliseconds).await;
    Ok(())
}

fn command_line(parts: &[String]) -> Result<CommandLine> {
    let (program, args) = parts.split_first().ok_or(ShellError::EmptyCommand)?;
    CommandLine::new(program, args.iter().cloned())
}
