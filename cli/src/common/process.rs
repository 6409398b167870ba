//! # ShellKit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Wrappers around child processes:
//!
//! - **`ProcessRunner::run_command`**: spawns a program, streams its stdout and
//!   stderr as chunks arrive (echoing them to the console), and waits for it
//!   to exit. Exit code 0 yields a `CommandOutput`; anything else yields
//!   `ShellError::CommandFailed` carrying the exit code and both captured
//!   streams. A program that cannot be started yields `ShellError::Spawn`.
//! - **`ProcessRunner::run_command_no_wait`**: launches a command through the
//!   platform shell, detached from this process, with no output capture.
//! - **`delay`**: async sleep.
//!
//! ## Architecture
//!
//! Commands are normalized into a `CommandLine` first: a single string such
//! as `"git status --short"` is split on whitespace when no separate argument
//! list is supplied.
//!
//! Output is read with `tokio::process` and `tokio::select!` over both pipes,
//! so neither pipe can fill up and stall the child while the other is being
//! drained. Bytes are accumulated per stream and decoded (lossily) as UTF-8
//! once the child has exited, so multi-byte characters split across chunks
//! survive intact. The live echo holds back a trailing partial character
//! until the next chunk completes it (`EchoDecoder`).
//!
//! Detached children are waited on by a background thread, so an exited
//! child does not stay in the process table as a zombie.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let runner = ProcessRunner::new(Console::default());
//! let line = CommandLine::parse("cargo --version")?;
//! let output = runner.run_command(&line, RunOptions::quiet()).await?;
//! println!("{}", output.stdout.trim());
//! ```
//!
use crate::common::ui::console::{Console, OnError};
use crate::core::error::{Result, ShellError};
use anyhow::Context;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

const CHUNK_SIZE: usize = 8 * 1024;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Builds a command line from a program and argument list.
    ///
    /// When `args` is empty and `command` contains whitespace, `command` is
    /// treated as a full command line and split on whitespace.
    pub fn new<I, S>(command: &str, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Self::parse(command);
        }
        let program = command.trim();
        if program.is_empty() {
            return Err(ShellError::EmptyCommand.into());
        }
        Ok(Self {
            program: program.to_string(),
            args,
        })
    }

    /// Splits a whole command line on whitespace.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ShellError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Output of a command that exited successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

/// Per-call options for `run_command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Echo stdout chunks to the console as they arrive.
    pub echo_stdout: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { echo_stdout: true }
    }
}

impl RunOptions {
    /// Capture stdout without echoing it.
    pub fn quiet() -> Self {
        Self { echo_stdout: false }
    }
}

/// Spawns child processes and relays their output through a `Console`.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    console: Console,
}

impl ProcessRunner {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Runs `line` to completion, capturing and echoing its output.
    ///
    /// # Errors
    ///
    /// - `ShellError::Spawn` if the program could not be started (the OS
    ///   error is also printed in red).
    /// - `ShellError::CommandFailed` if it exited with a non-zero code or was
    ///   killed by a signal (`exit_code: None`).
    /// - Other I/O errors while reading the pipes or waiting, with context.
    pub async fn run_command(
        &self,
        line: &CommandLine,
        options: RunOptions,
    ) -> Result<CommandOutput> {
        info!("Running command: {}", line);
        let mut child = match Command::new(&line.program)
            .args(&line.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(source) => {
                self.console.show_error(&source.to_string(), OnError::Continue);
                return Err(ShellError::Spawn {
                    command: line.to_string(),
                    source,
                }
                .into());
            }
        };

        let mut stdout_pipe = child.stdout.take().context("Child stdout was not captured")?;
        let mut stderr_pipe = child.stderr.take().context("Child stderr was not captured")?;

        let mut stdout_bytes = Vec::new();
        let mut stderr_bytes = Vec::new();
        let mut stdout_chunk = [0u8; CHUNK_SIZE];
        let mut stderr_chunk = [0u8; CHUNK_SIZE];
        let mut stdout_open = true;
        let mut stderr_open = true;
        let mut stdout_echo = EchoDecoder::default();
        let mut stderr_echo = EchoDecoder::default();

        while stdout_open || stderr_open {
            tokio::select! {
                read = stdout_pipe.read(&mut stdout_chunk), if stdout_open => {
                    let n = read.with_context(|| format!("Failed to read stdout of '{}'", line))?;
                    let text = if n == 0 {
                        stdout_open = false;
                        stdout_echo.finish()
                    } else {
                        stdout_bytes.extend_from_slice(&stdout_chunk[..n]);
                        stdout_echo.push(&stdout_chunk[..n])
                    };
                    if options.echo_stdout && !text.is_empty() {
                        self.console.echo_stdout(&text);
                    }
                }
                read = stderr_pipe.read(&mut stderr_chunk), if stderr_open => {
                    let n = read.with_context(|| format!("Failed to read stderr of '{}'", line))?;
                    let text = if n == 0 {
                        stderr_open = false;
                        stderr_echo.finish()
                    } else {
                        stderr_bytes.extend_from_slice(&stderr_chunk[..n]);
                        stderr_echo.push(&stderr_chunk[..n])
                    };
                    if !text.is_empty() {
                        self.console.echo_stderr(&text);
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for '{}'", line))?;
        let stdout = String::from_utf8_lossy(&stdout_bytes).into_owned();
        let stderr = String::from_utf8_lossy(&stderr_bytes).into_owned();
        debug!("Command '{}' finished with {}", line, status);

        if status.success() {
            Ok(CommandOutput {
                stdout,
                stderr,
                exit_code: status.code(),
            })
        } else {
            Err(ShellError::CommandFailed {
                command: line.to_string(),
                exit_code: status.code(),
                stdout,
                stderr,
            }
            .into())
        }
    }

    /// Starts `line` through the platform shell and returns its pid without
    /// waiting. The child gets no stdio and is detached from this process; a
    /// background thread reaps it when it exits.
    pub fn run_command_no_wait(&self, line: &CommandLine) -> Result<u32> {
        let script = line.to_string();
        let mut command = shell_command(&script);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut command);

        let mut child = command.spawn().map_err(|source| ShellError::Spawn {
            command: script.clone(),
            source,
        })?;
        let pid = child.id();
        info!("Started detached command '{}' (pid {})", script, pid);

        std::thread::Builder::new()
            .name(format!("reap-{}", pid))
            .spawn(move || match child.wait() {
                Ok(status) => debug!("Detached pid {} exited with {}", pid, status),
                Err(e) => warn!("Failed to wait for detached pid {}: {}", pid, e),
            })
            .with_context(|| format!("Failed to start waiter thread for pid {}", pid))?;
        Ok(pid)
    }
}

/// Decodes a byte stream for live echo, holding back a trailing partial
/// UTF-8 sequence until the next chunk completes it.
#[derive(Debug, Default)]
struct EchoDecoder {
    pending: Vec<u8>,
}

impl EchoDecoder {
    fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let complete = self.pending.len() - incomplete_tail_len(&self.pending);
        let text = String::from_utf8_lossy(&self.pending[..complete]).into_owned();
        self.pending.drain(..complete);
        text
    }

    /// Whatever is still held back once the stream has ended.
    fn finish(&mut self) -> String {
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        text
    }
}

/// Length of an unfinished multi-byte sequence at the end of `bytes`.
fn incomplete_tail_len(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        if byte & 0xC0 == 0x80 {
            continue; // continuation byte
        }
        let width = match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return 0,
        };
        return if width > back { back } else { 0 };
    }
    0
}

/// Suspends the current task for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(windows)]
fn shell_command(script: &str) -> std::process::Command {
    let mut command = std::process::Command::new("cmd");
    command.arg("/C").arg(script);
    command
}

#[cfg(not(windows))]
fn shell_command(script: &str) -> std::process::Command {
    let mut command = std::process::Command::new("sh");
    command.arg("-c").arg(script);
    command
}

#[cfg(windows)]
fn detach(command: &mut std::process::Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(unix)]
fn detach(command: &mut std::process::Command) {
    use std::os::unix::process::CommandExt;
    // Own process group: terminal signals aimed at us do not reach the child.
    command.process_group(0);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut std::process::Command) {}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConsoleConfig;

    fn runner() -> ProcessRunner {
        ProcessRunner::new(Console::new(&ConsoleConfig {
            color: false,
            set_title: false,
        }))
    }

    #[test]
    fn test_command_line_splits_single_string() -> Result<()> {
        let line = CommandLine::new("git status --short", Vec::<String>::new())?;
        assert_eq!(line.program, "git");
        assert_eq!(line.args, vec!["status", "--short"]);
        Ok(())
    }

    #[test]
    fn test_command_line_keeps_explicit_args() -> Result<()> {
        let line = CommandLine::new("my tool", ["a b", "c"])?;
        assert_eq!(line.program, "my tool");
        assert_eq!(line.args, vec!["a b", "c"]);
        Ok(())
    }

    #[test]
    fn test_command_line_parse_collapses_whitespace() -> Result<()> {
        let line = CommandLine::parse("  netstat   -ano \t")?;
        assert_eq!(line.program, "netstat");
        assert_eq!(line.args, vec!["-ano"]);
        assert_eq!(line.to_string(), "netstat -ano");
        Ok(())
    }

    #[test]
    fn test_command_line_empty_is_error() {
        for bad in ["", "   "] {
            let err = CommandLine::parse(bad).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ShellError>(),
                Some(ShellError::EmptyCommand)
            ));
        }
        assert!(CommandLine::new(" ", ["x"]).is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_captures_both_streams() -> Result<()> {
        let line = CommandLine::new("sh", ["-c", "printf 'out-1\\nout-2'; printf 'err' >&2"])?;
        let output = runner().run_command(&line, RunOptions::quiet()).await?;
        assert_eq!(output.stdout, "out-1\nout-2");
        assert_eq!(output.stderr, "err");
        assert_eq!(output.exit_code, Some(0));
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_large_output_does_not_stall() -> Result<()> {
        // Well past a pipe buffer on both streams.
        let script = "i=0; while [ $i -lt 4000 ]; do \
                      echo xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx; \
                      echo yyyyyyyyyyyyyyyyyyyyyyyy >&2; \
                      i=$((i+1)); done";
        let line = CommandLine::new("sh", ["-c", script])?;
        let output = runner().run_command(&line, RunOptions::quiet()).await?;
        assert_eq!(output.stdout.lines().count(), 4000);
        assert_eq!(output.stderr.lines().count(), 4000);
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_command_nonzero_exit_is_command_failed() -> Result<()> {
        let line = CommandLine::new("sh", ["-c", "echo partial; echo bad >&2; exit 7"])?;
        let err = runner()
            .run_command(&line, RunOptions::quiet())
            .await
            .unwrap_err();
        match err.downcast_ref::<ShellError>() {
            Some(ShellError::CommandFailed {
                exit_code,
                stdout,
                stderr,
                ..
            }) => {
                assert_eq!(*exit_code, Some(7));
                assert_eq!(stdout, "partial\n");
                assert_eq!(stderr, "bad\n");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_run_command_missing_program_is_spawn_error() {
        let line = CommandLine::parse("shellkit-definitely-not-a-real-program --flag").unwrap();
        let err = runner()
            .run_command(&line, RunOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShellError>(),
            Some(ShellError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_no_wait_returns_pid() -> Result<()> {
        let line = CommandLine::parse("sleep 0")?;
        let pid = runner().run_command_no_wait(&line)?;
        assert!(pid > 0);
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_run_command_no_wait_reaps_exited_child() -> Result<()> {
        let pid = runner().run_command_no_wait(&CommandLine::parse("true")?)?;
        let stat_path = format!("/proc/{}/stat", pid);
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        // The entry disappears once the exited child has been waited on.
        while let Ok(stat) = std::fs::read_to_string(&stat_path) {
            assert!(
                std::time::Instant::now() < deadline,
                "detached child was never reaped: {}",
                stat
            );
            std::thread::sleep(Duration::from_millis(20));
        }
        Ok(())
    }

    #[test]
    fn test_echo_decoder_joins_split_characters() {
        let bytes = "héllo €".as_bytes();
        let mut decoder = EchoDecoder::default();
        // Split inside 'é' (2 bytes) and inside '€' (3 bytes).
        let mut echoed = decoder.push(&bytes[..2]);
        assert_eq!(echoed, "h");
        echoed.push_str(&decoder.push(&bytes[2..8]));
        echoed.push_str(&decoder.push(&bytes[8..]));
        echoed.push_str(&decoder.finish());
        assert_eq!(echoed, "héllo €");
        assert!(!echoed.contains('\u{FFFD}'));
    }

    #[test]
    fn test_echo_decoder_flushes_truncated_tail() {
        let mut decoder = EchoDecoder::default();
        assert_eq!(decoder.push(b"ok\xE2\x82"), "ok");
        assert_eq!(decoder.finish(), "\u{FFFD}");
        assert_eq!(decoder.finish(), "");
    }

    #[tokio::test]
    async fn test_delay_waits() {
        let start = std::time::Instant::now();
        delay(20).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
