//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds all the state a command handler needs: the
//! working directory, the process runner, and access to the configuration
//! store. It is built once in `main` after CLI parsing, before dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gitmorph_config::{ConfigPaths, ConfigStore};
use gitmorph_exec::{GitRepoDetector, ShellRunner};

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Directory every verb operates on.
    pub cwd: PathBuf,

    runner: ShellRunner,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` rooted at the process working directory.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine working directory")?;
        Ok(Self::new(cwd))
    }

    pub fn new(cwd: PathBuf) -> Self {
        let runner = ShellRunner::in_dir(&cwd);
        Self { cwd, runner }
    }

    /// The runner for external commands, rooted at [`Self::cwd`].
    pub fn runner(&self) -> &ShellRunner {
        &self.runner
    }

    /// Repository detection through the context's runner.
    pub fn repo_detector(&self) -> GitRepoDetector<&ShellRunner> {
        GitRepoDetector::new(&self.runner)
    }

    /// Open the configuration store for this working directory.
    pub fn config_store(&self) -> Result<ConfigStore<GitRepoDetector<&ShellRunner>>> {
        let paths = ConfigPaths::discover(&self.cwd)?;
        Ok(ConfigStore::new(paths, self.repo_detector()))
    }

    /// Resolve `relative` against the working directory.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(relative)
    }
}
