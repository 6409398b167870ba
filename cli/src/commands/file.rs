//! # ShellKit File Commands
//!
//! File: cli/src/commands/file.rs
//!
//! `shellkit read <FILE>` prints a UTF-8 text file verbatim;
//! `shellkit write <FILE> <TEXT>` replaces a file's content with `TEXT`.
//!
use anyhow::Result;
use clap::Parser;
use shellkit::ShellHelper;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the 'read' subcommand.
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// File to print.
    file: PathBuf,
}

/// Arguments for the 'write' subcommand.
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to write.
    file: PathBuf,
    /// New content.
    text: String,
}

/// Handler function for the 'read' subcommand.
pub fn handle_read(helper: &ShellHelper, args: ReadArgs) -> Result<()> {
    let content = helper.read_text_file(&args.file)?;
    let mut stdout = std::io::stdout();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Handler function for the 'write' subcommand.
pub fn handle_write(helper: &ShellHelper, args: WriteArgs) -> Result<()> {
    helper.write_text_file(&args.file, &args.text)?;
    tracing::info!("Wrote {:?}", args.file);
    Ok(())
}
