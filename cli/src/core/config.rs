//! # ShellKit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the ShellKit configuration. The
//! configuration is small: it decides whether console lines are colored,
//! whether informational messages set the terminal title, whether child
//! stdout is echoed by default, and which network-status command backs the
//! port owner lookup.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.shellkit.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config dir (`directories`)
//! 3. Default values defined in the code
//!
//! A single explicit file can be loaded instead with `load_config_from_path`
//! (used by the binary's `--config` flag).
//!
//! ## Examples
//!
//! ```toml
//! [console]
//! color = false
//!
//! [network]
//! netstat_command = "netstat -ano"
//! wildcard_address = "0.0.0.0"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let helper = ShellHelper::new(&cfg);
//! ```
//!
use crate::core::error::{Result, ShellError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub process: ProcessConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Console reporter settings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Emit ANSI color codes around console lines.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Set the terminal title on informational messages.
    #[serde(default = "default_true")]
    pub set_title: bool,
}

/// Process runner settings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProcessConfig {
    /// Echo child stdout live unless a call opts out.
    #[serde(default = "default_true")]
    pub echo_stdout: bool,
}

/// Port owner lookup settings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Command whose output lists sockets with the owning pid in the last column.
    #[serde(default = "default_netstat_command")]
    pub netstat_command: String,
    /// Local address a listening socket is bound to.
    #[serde(default = "default_wildcard_address")]
    pub wildcard_address: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            set_title: true,
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self { echo_stdout: true }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            netstat_command: default_netstat_command(),
            wildcard_address: default_wildcard_address(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_netstat_command() -> String {
    "netstat -ano".to_string()
}
fn default_wildcard_address() -> String {
    "0.0.0.0".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".shellkit.toml";

/// Loads the merged user + project configuration and validates it.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// Loads and validates a single configuration file, skipping the search.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let config = parse_config_file(path)?;
    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ShellKit", "shellkit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            parse_config_file(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        parse_config_file(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.shellkit.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.shellkit.toml`,
/// stopping at the first directory that holds a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();

    fn pick<T: PartialEq>(project: T, user: T, default: &T) -> T {
        if project != *default {
            project
        } else {
            user
        }
    }

    Config {
        console: ConsoleConfig {
            color: pick(project.console.color, user.console.color, &defaults.console.color),
            set_title: pick(
                project.console.set_title,
                user.console.set_title,
                &defaults.console.set_title,
            ),
        },
        process: ProcessConfig {
            echo_stdout: pick(
                project.process.echo_stdout,
                user.process.echo_stdout,
                &defaults.process.echo_stdout,
            ),
        },
        network: NetworkConfig {
            netstat_command: pick(
                project.network.netstat_command,
                user.network.netstat_command,
                &defaults.network.netstat_command,
            ),
            wildcard_address: pick(
                project.network.wildcard_address,
                user.network.wildcard_address,
                &defaults.network.wildcard_address,
            ),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if config.network.netstat_command.trim().is_empty() {
        return Err(anyhow!(ShellError::Config(
            "network.netstat_command cannot be empty".to_string()
        )));
    }
    let wildcard = config.network.wildcard_address.trim();
    if wildcard.is_empty() || wildcard.contains(char::is_whitespace) {
        return Err(anyhow!(ShellError::Config(format!(
            "Invalid network.wildcard_address: '{}'",
            config.network.wildcard_address
        ))));
    }
    Ok(())
}
