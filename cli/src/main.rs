//! # ShellKit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Command-line front end over the `shellkit` library. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the single `ShellHelper`
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Ask a yes/no question
//! shellkit ask "Deploy now?"
//!
//! # Run a command inside another directory, quietly
//! shellkit run --quiet --in ./web -- npm install
//!
//! # Who is listening on 8080?
//! shellkit -v port-pid 8080
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration, build the helper, route to the handler
//! 4. Report any error; a failed child command's exit code is passed through
//!
use clap::{Parser, Subcommand};
use shellkit::core::config;
use shellkit::{ShellError, ShellHelper};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handlers for each subcommand.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "shellkit",
    about = "Shell helper toolkit: prompts, colored output, directory stack, files and processes",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Load this configuration file instead of searching for one.
    #[arg(long, global = true, env = "SHELLKIT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a yes/no question, or a question with a default value
    Ask(commands::ask::AskArgs),
    /// Run a command and wait for it, echoing its output
    Run(commands::run::RunArgs),
    /// Start a command detached and print its pid
    Spawn(commands::run::SpawnArgs),
    /// Sleep for a number of milliseconds
    Wait(commands::run::WaitArgs),
    /// Print the pid listening on a port
    PortPid(commands::port::PortPidArgs),
    /// Print a text file
    Read(commands::file::ReadArgs),
    /// Write text to a file, replacing its content
    Write(commands::file::WriteArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(exit_status(&e));
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    let mut helper = ShellHelper::new(&config);

    match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(&helper, args),
        Commands::Run(args) => commands::run::handle_run(&mut helper, args).await,
        Commands::Spawn(args) => commands::run::handle_spawn(&helper, args),
        Commands::Wait(args) => commands::run::handle_wait(&helper, args).await,
        Commands::PortPid(args) => commands::port::handle_port_pid(&helper, args).await,
        Commands::Read(args) => commands::file::handle_read(&helper, args),
        Commands::Write(args) => commands::file::handle_write(&helper, args),
    }
}

/// A failed child command's own exit code, otherwise 1.
fn exit_status(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ShellError>()
        .and_then(ShellError::exit_code)
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
