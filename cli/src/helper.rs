//! # ShellKit Helper Facade
//!
//! File: cli/src/helper.rs
//!
//! ## Overview
//!
//! `ShellHelper` bundles the console reporter, prompt, directory stack,
//! file I/O, process runner and port lookup behind one object. Build it
//! once at startup from the loaded `Config` and pass it (or the pieces it
//! hands out) to whatever needs it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut helper = ShellHelper::new(&config::load_config()?);
//! helper.show_message("Installing dependencies");
//! if helper.ask("Run npm install?", None).is_yes() {
//!     let runner = helper.runner().clone();
//!     let line = CommandLine::parse("npm install")?;
//!     helper
//!         .in_location_async(Path::new("web"), || async move {
//!             runner.run_command(&line, RunOptions::default()).await
//!         })
//!         .await??;
//! }
//! helper.show_success("Done");
//! ```
//!
use crate::common::fs::{io, location::LocationStack};
use crate::common::network;
use crate::common::process::{self, CommandLine, CommandOutput, ProcessRunner, RunOptions};
use crate::common::ui::console::{Console, OnError};
use crate::common::ui::prompt::{self, Answer};
use crate::core::config::{Config, NetworkConfig};
use crate::core::error::{Result, ShellError};
use std::future::Future;
use std::path::{Path, PathBuf};

/// One shared facility for shell-scripting style tasks.
#[derive(Debug)]
pub struct ShellHelper {
    console: Console,
    runner: ProcessRunner,
    locations: LocationStack,
    network: NetworkConfig,
    echo_stdout: bool,
}

impl Default for ShellHelper {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ShellHelper {
    pub fn new(config: &Config) -> Self {
        let console = Console::new(&config.console);
        Self {
            runner: ProcessRunner::new(console.clone()),
            console,
            locations: LocationStack::new(),
            network: config.network.clone(),
            echo_stdout: config.process.echo_stdout,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// The process runner, cloneable for use inside `in_location_async` actions.
    pub fn runner(&self) -> &ProcessRunner {
        &self.runner
    }

    pub fn locations(&self) -> &LocationStack {
        &self.locations
    }

    /// Run options honouring the configured stdout echo.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            echo_stdout: self.echo_stdout,
        }
    }

    // --- Console ---

    pub fn show_message(&self, message: &str) {
        self.console.show_message(message);
    }

    pub fn show_success(&self, message: &str) {
        self.console.show_success(message);
    }

    pub fn show_warning(&self, message: &str) {
        self.console.show_warning(message);
    }

    pub fn show_error(&self, message: &str, on_error: OnError) {
        self.console.show_error(message, on_error);
    }

    /// Reports `ERROR: <level>[ in <location>]` and exits when `error_level` is non-empty.
    pub fn report_exit(&self, error_level: Option<&str>, location: Option<&str>) {
        if let Some(message) = exit_report(error_level, location) {
            self.console.fatal(&message);
        }
    }

    // --- Prompt ---

    /// Asks a question on stdin. End of input terminates the process.
    pub fn ask(&self, question: &str, default: Option<&str>) -> Answer {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        match prompt::ask(&mut stdin.lock(), &mut stdout, question, default) {
            Ok(answer) => answer,
            Err(e) => {
                // Other read failures end the prompt the same way.
                if !matches!(e.downcast_ref::<ShellError>(), Some(ShellError::UserTerminated)) {
                    tracing::warn!("Prompt failed: {:#}", e);
                }
                self.console.fatal(&ShellError::UserTerminated.to_string())
            }
        }
    }

    // --- Directory stack ---

    pub fn push_location(&mut self, path: &Path) -> Result<()> {
        self.locations.push(path)
    }

    /// Pops the directory stack. An empty stack is reported without exiting.
    pub fn pop_location(&mut self) -> Result<PathBuf> {
        let popped = self.locations.pop();
        if let Err(e) = &popped {
            if matches!(e.downcast_ref::<ShellError>(), Some(ShellError::EmptyLocationStack)) {
                self.console.show_error(&e.to_string(), OnError::Continue);
            }
        }
        popped
    }

    pub fn in_location<T, F>(&mut self, path: &Path, action: F) -> Result<T>
    where
        F: FnOnce(&mut LocationStack) -> T,
    {
        self.locations.in_location(path, action)
    }

    pub async fn in_location_async<T, F, Fut>(&mut self, path: &Path, action: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.locations.in_location_async(path, action).await
    }

    // --- Files ---

    pub fn read_text_file(&self, path: &Path) -> Result<String> {
        io::read_text_file(path)
    }

    pub fn write_text_file(&self, path: &Path, data: &str) -> Result<()> {
        io::write_text_file(path, data)
    }

    // --- Processes ---

    pub async fn run_command(
        &self,
        line: &CommandLine,
        options: RunOptions,
    ) -> Result<CommandOutput> {
        self.runner.run_command(line, options).await
    }

    pub fn run_command_no_wait(&self, line: &CommandLine) -> Result<u32> {
        self.runner.run_command_no_wait(line)
    }

    pub async fn delay(&self, ms: u64) {
        process::delay(ms).await;
    }

    pub async fn process_id_by_port(&self, port: u16) -> Result<Option<u32>> {
        network::process_id_by_port(&self.runner, &self.network, port).await
    }
}

fn exit_report(error_level: Option<&str>, location: Option<&str>) -> Option<String> {
    let level = error_level.filter(|level| !level.is_empty())?;
    Some(match location.filter(|location| !location.is_empty()) {
        Some(location) => format!("ERROR: {} in {}", level, location),
        None => format!("ERROR: {}", level),
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::fs::location::lock_cwd;
    use crate::core::config::ConsoleConfig;
    use tempfile::tempdir;

    fn quiet_helper() -> ShellHelper {
        ShellHelper::new(&Config {
            console: ConsoleConfig {
                color: false,
                set_title: false,
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_exit_report_formatting() {
        assert_eq!(exit_report(None, Some("build")), None);
        assert_eq!(exit_report(Some(""), None), None);
        assert_eq!(exit_report(Some("3"), None), Some("ERROR: 3".to_string()));
        assert_eq!(
            exit_report(Some("3"), Some("deploy.sh")),
            Some("ERROR: 3 in deploy.sh".to_string())
        );
    }

    #[test]
    fn test_report_exit_without_level_returns() {
        quiet_helper().report_exit(None, Some("anywhere"));
    }

    #[test]
    fn test_pop_location_on_empty_stack_does_not_exit() {
        let mut helper = quiet_helper();
        let err = helper.pop_location().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShellError>(),
            Some(ShellError::EmptyLocationStack)
        ));
    }

    #[test]
    fn test_push_pop_through_helper() -> Result<()> {
        let _lock = lock_cwd();
        let target = tempdir()?;
        let before = std::env::current_dir()?.canonicalize()?;
        let mut helper = quiet_helper();

        helper.push_location(target.path())?;
        assert_eq!(helper.locations().len(), 1);
        let popped = helper.pop_location()?;
        assert_eq!(popped.canonicalize()?, before);
        assert_eq!(std::env::current_dir()?.canonicalize()?, before);
        Ok(())
    }

    #[test]
    fn test_file_round_trip_through_helper() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.txt");
        let helper = quiet_helper();
        helper.write_text_file(&path, "hello\n")?;
        assert_eq!(helper.read_text_file(&path)?, "hello\n");
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_in_location_async_runs_command_in_dir() -> Result<()> {
        let _lock = lock_cwd();
        let target = tempdir()?;
        let mut helper = quiet_helper();
        let runner = helper.runner().clone();
        let line = CommandLine::parse("pwd")?;

        let output = helper
            .in_location_async(target.path(), || async move {
                runner.run_command(&line, RunOptions::quiet()).await
            })
            .await??;
        assert_eq!(
            std::path::PathBuf::from(output.stdout.trim()).canonicalize()?,
            target.path().canonicalize()?
        );
        Ok(())
    }

    #[test]
    fn test_run_options_follow_config() {
        let mut config = Config::default();
        config.process.echo_stdout = false;
        assert_eq!(ShellHelper::new(&config).run_options(), RunOptions::quiet());
        assert_eq!(ShellHelper::default().run_options(), RunOptions::default());
    }
}
