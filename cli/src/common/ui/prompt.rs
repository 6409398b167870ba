//! # ShellKit Interactive Prompt
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! ## Overview
//!
//! One-line questions answered on standard input. Two forms:
//!
//! - **Yes/no** (no default): `Question [Y/n] `. Empty input or `y`/`Y`
//!   confirms; anything else declines.
//! - **Default value**: `Question Default=VALUE `. Empty input yields the
//!   upper-cased default; otherwise the trimmed, upper-cased input.
//!
//! End of input is `ShellError::UserTerminated`. The reading function is
//! generic over `BufRead`/`Write`; `ShellHelper::ask` wires it to the real
//! stdin/stdout and turns `UserTerminated` into a fatal report.
//!
use crate::core::error::{Result, ShellError};
use anyhow::Context;
use std::io::{BufRead, Write};

/// Result of `ask`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer to a yes/no question.
    Confirmed(bool),
    /// Answer to a question with a default value, upper-cased.
    Value(String),
}

impl Answer {
    /// `true` only for a confirmed yes/no question.
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Confirmed(true))
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Answer::Value(value) => Some(value),
            Answer::Confirmed(_) => None,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Confirmed(yes) => write!(f, "{}", yes),
            Answer::Value(value) => f.write_str(value),
        }
    }
}

/// The text shown to the user, including the trailing space.
pub fn format_question(question: &str, default: Option<&str>) -> String {
    match default {
        None => format!("{} [Y/n] ", question),
        Some(value) => format!("{} Default={} ", question, value.to_uppercase()),
    }
}

/// Maps a raw response line to an `Answer`.
pub fn interpret(response: &str, default: Option<&str>) -> Answer {
    let response = response.trim().to_uppercase();
    match default {
        None => Answer::Confirmed(response.is_empty() || response == "Y"),
        Some(value) if response.is_empty() => Answer::Value(value.to_uppercase()),
        Some(_) => Answer::Value(response),
    }
}

/// Writes the question to `output` and reads one line from `input`.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: Option<&str>,
) -> Result<Answer> {
    write!(output, "{}", format_question(question, default)).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer from input")?;
    if read == 0 {
        return Err(ShellError::UserTerminated.into());
    }
    Ok(interpret(&line, default))
}
