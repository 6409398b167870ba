//! # ShellKit Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `shellkit ask <QUESTION> [--default VALUE]` prompts on stdin and prints
//! the answer: `true`/`false` for a yes/no question, otherwise the
//! upper-cased value. Closing stdin without answering exits with status 1.
//!
//! ```bash
//! shellkit ask "Deploy now?"           # Deploy now? [Y/n] y -> true
//! shellkit ask "Target" --default prod # Target Default=PROD  -> PROD
//! ```
//!
use anyhow::Result;
use clap::Parser;
use shellkit::ShellHelper;

/// Arguments for the 'ask' subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to show.
    question: String,
    /// Value returned on an empty answer; switches to free-form input.
    #[arg(long)]
    default: Option<String>,
}

/// Handler function for the 'ask' subcommand.
pub fn handle_ask(helper: &ShellHelper, args: AskArgs) -> Result<()> {
    tracing::info!("Handling ask command...");
    let answer = helper.ask(&args.question, args.default.as_deref());
    println!("{}", answer);
    Ok(())
}
