//! # ShellKit Console Reporter
//!
//! File: cli/src/common/ui/console.rs
//!
//! ## Overview
//!
//! User-facing status lines on stdout, one color per severity:
//!
//! | Severity  | Color  |
//! |-----------|--------|
//! | `Info`    | cyan   |
//! | `Success` | green  |
//! | `Warning` | yellow |
//! | `Error`   | red    |
//!
//! Informational messages also set the terminal title (`ESC ] 0 ; text BEL`).
//! Errors carry an explicit `OnError` so a caller always states whether the
//! process should terminate after printing.
//!
//! Colors come from the `colored` crate, which already drops them when
//! `NO_COLOR` is set or stdout is not a terminal. `ConsoleConfig::color`
//! turns them off unconditionally.
//!
use crate::core::config::ConsoleConfig;
use colored::{Color, Colorize};
use std::io::{self, Write};

/// Severity of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// The fixed color for this severity.
    pub fn color(self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

/// What `show_error` does after printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Terminate the process with exit status 1.
    Exit,
    /// Return to the caller.
    Continue,
}

/// Severity used when echoing a chunk of child stderr.
pub fn stderr_severity(chunk: &str) -> Severity {
    if chunk.to_lowercase().contains("warn") {
        Severity::Warning
    } else {
        Severity::Error
    }
}

/// Escape sequence that sets the terminal window title.
pub fn title_sequence(title: &str) -> String {
    format!("\x1b]0;{}\x07", title)
}

/// Prints colored status lines. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Console {
    color: bool,
    set_title: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            color: config.color,
            set_title: config.set_title,
        }
    }

    /// Formats `message` for `severity` without printing it.
    pub fn render(&self, severity: Severity, message: &str) -> String {
        if self.color {
            message.color(severity.color()).to_string()
        } else {
            message.to_string()
        }
    }

    /// Informational line in cyan; also sets the terminal title.
    pub fn show_message(&self, message: &str) {
        to_stdout(|out| self.write_message(out, message));
    }

    pub fn show_success(&self, message: &str) {
        to_stdout(|out| self.write_line(out, Severity::Success, message));
    }

    pub fn show_warning(&self, message: &str) {
        to_stdout(|out| self.write_line(out, Severity::Warning, message));
    }

    /// Prints `message` in red, then exits with status 1 if `on_error` is `Exit`.
    pub fn show_error(&self, message: &str, on_error: OnError) {
        match on_error {
            OnError::Exit => self.fatal(message),
            OnError::Continue => to_stdout(|out| self.write_line(out, Severity::Error, message)),
        }
    }

    /// Prints `message` in red and terminates the process.
    pub fn fatal(&self, message: &str) -> ! {
        to_stdout(|out| self.write_line(out, Severity::Error, message));
        tracing::debug!("Fatal error reported, exiting: {}", message);
        std::process::exit(1)
    }

    /// Echoes a chunk of child stdout verbatim.
    pub fn echo_stdout(&self, chunk: &str) {
        to_stdout(|out| out.write_all(chunk.as_bytes()));
    }

    /// Echoes a chunk of child stderr, yellow for warnings and red otherwise.
    pub fn echo_stderr(&self, chunk: &str) {
        to_stdout(|out| self.write_stderr_chunk(out, chunk));
    }

    /// Writes `message` as one line colored for `severity`.
    pub fn write_line<W: Write>(
        &self,
        out: &mut W,
        severity: Severity,
        message: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.render(severity, message))
    }

    /// Writes what `show_message` prints: the cyan line, then the title sequence.
    pub fn write_message<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        self.write_line(out, Severity::Info, message)?;
        if self.set_title {
            write!(out, "{}", title_sequence(message))?;
        }
        Ok(())
    }

    /// Writes a chunk of child stderr without adding a newline.
    pub fn write_stderr_chunk<W: Write>(&self, out: &mut W, chunk: &str) -> io::Result<()> {
        write!(out, "{}", self.render(stderr_severity(chunk), chunk))
    }
}

fn to_stdout(write: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) {
    let mut stdout = io::stdout().lock();
    // A closed stdout is not worth failing a report over.
    let _ = write(&mut stdout).and_then(|()| stdout.flush());
}
