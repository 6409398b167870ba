//! # ShellKit Directory Stack
//!
//! File: cli/src/common/fs/location.rs
//!
//! ## Overview
//!
//! A `pushd`/`popd` style stack over the process working directory.
//! `push` records the current directory and changes to a new one; `pop`
//! changes back to the most recently recorded directory.
//!
//! ## Architecture
//!
//! - `LocationStack`: owns the history (`Vec<PathBuf>`). All mutation goes
//!   through `&mut self`, so a single owner is enforced by the borrow checker.
//! - `LocationGuard`: returned by `LocationStack::enter`. Dropping it restores
//!   the directory that was current before `enter`, including when the
//!   scope is left through `?`, a panic, or a dropped future. The guard
//!   dereferences to the stack, so scopes nest.
//!
//! The working directory is process-wide state. Only one stack should be
//! driving it at a time.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut locations = LocationStack::new();
//! locations.in_location(Path::new("~/projects/app"), |nested| {
//!     nested.in_location(Path::new("frontend"), |_| build_frontend())
//! })??;
//! ```
//!
use crate::core::error::{Result, ShellError};
use anyhow::Context;
use std::env;
use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stack of previously visited working directories.
#[derive(Debug, Default)]
pub struct LocationStack {
    history: Vec<PathBuf>,
}

impl LocationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded directories.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Records the current directory, then changes to `path` (`~` is expanded).
    ///
    /// Nothing is recorded if the directory change fails.
    pub fn push(&mut self, path: &Path) -> Result<()> {
        let target = expand_tilde(path);
        let current = env::current_dir().context("Failed to get current directory")?;
        change_dir(&target)?;
        debug!("Pushed location {:?}, now in {:?}", current, target);
        self.history.push(current);
        Ok(())
    }

    /// Changes back to the most recently pushed directory and returns it.
    ///
    /// # Errors
    ///
    /// `ShellError::EmptyLocationStack` if nothing was pushed, or
    /// `ShellError::ChangeDirectory` if the recorded directory is gone.
    pub fn pop(&mut self) -> Result<PathBuf> {
        let previous = self
            .history
            .pop()
            .ok_or(ShellError::EmptyLocationStack)?;
        change_dir(&previous)?;
        debug!("Popped location, back in {:?}", previous);
        Ok(previous)
    }

    /// Pushes `path` and returns a guard that restores the prior directory on drop.
    #[must_use = "the previous directory is restored as soon as the guard is dropped"]
    pub fn enter(&mut self, path: &Path) -> Result<LocationGuard<'_>> {
        self.push(path)?;
        let depth = self.history.len();
        Ok(LocationGuard { stack: self, depth })
    }

    /// Runs `action` with `path` as the working directory, restoring the
    /// previous directory afterwards on every exit path.
    pub fn in_location<T, F>(&mut self, path: &Path, action: F) -> Result<T>
    where
        F: FnOnce(&mut LocationStack) -> T,
    {
        let mut guard = self.enter(path)?;
        Ok(action(&mut *guard))
    }

    /// Async form of `in_location`. The directory is also restored if the
    /// returned future is dropped before it completes.
    pub async fn in_location_async<T, F, Fut>(&mut self, path: &Path, action: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _guard = self.enter(path)?;
        Ok(action().await)
    }
}

/// Scoped directory change created by `LocationStack::enter`.
#[derive(Debug)]
pub struct LocationGuard<'a> {
    stack: &'a mut LocationStack,
    /// History length right after this guard's push.
    depth: usize,
}

impl Deref for LocationGuard<'_> {
    type Target = LocationStack;

    fn deref(&self) -> &LocationStack {
        self.stack
    }
}

impl DerefMut for LocationGuard<'_> {
    fn deref_mut(&mut self) -> &mut LocationStack {
        self.stack
    }
}

impl Drop for LocationGuard<'_> {
    fn drop(&mut self) {
        // Entries pushed inside the scope and never popped are unwound too.
        let history = &mut self.stack.history;
        if history.len() < self.depth {
            warn!("Location pushed by this scope was already popped; nothing to restore.");
            return;
        }
        let previous = history[self.depth - 1].clone();
        history.truncate(self.depth - 1);
        match change_dir(&previous) {
            Ok(()) => debug!("Left scoped location, back in {:?}", previous),
            Err(e) => warn!("Failed to restore working directory: {:#}", e),
        }
    }
}

fn change_dir(path: &Path) -> Result<()> {
    env::set_current_dir(path).map_err(|source| ShellError::ChangeDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Expands a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(shellexpand::tilde(text).as_ref()),
        None => path.to_path_buf(),
    }
}

/// Serializes tests that change the process working directory.
#[cfg(test)]
pub(crate) fn lock_cwd() -> std::sync::MutexGuard<'static, ()> {
    static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
