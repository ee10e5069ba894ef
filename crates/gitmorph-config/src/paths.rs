//! Where the configuration documents live.
//!
//! Paths are resolved once, up front, into a [`ConfigPaths`] value that is
//! handed to the store. Nothing here is consulted again afterwards, so tests
//! can point the store at a scratch directory.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Directory under the home profile that holds the global document.
const GLOBAL_DIR_NAME: &str = ".gitmorph";

/// File name of the global document inside [`GLOBAL_DIR_NAME`].
const GLOBAL_FILE_NAME: &str = "config.json";

/// File name of the local document in the working directory.
pub const LOCAL_FILE_NAME: &str = ".gitmorph.json";

/// Environment variable that replaces `~/.gitmorph` as the global directory.
pub const CONFIG_DIR_ENV: &str = "GITMORPH_CONFIG_DIR";

/// Which document an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Local,
}

impl ConfigScope {
    /// Resolve the target scope from the `--global` / `--local` flags.
    ///
    /// Local is chosen only when `--local` is given without `--global`.
    /// Passing both is not an error; global wins.
    pub fn from_flags(global: bool, local: bool) -> Self {
        if local && !global {
            ConfigScope::Local
        } else {
            ConfigScope::Global
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigScope::Global => "global",
            ConfigScope::Local => "local",
        }
    }
}

/// Resolved locations of the global and local documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub global: PathBuf,
    pub local: PathBuf,
}

impl ConfigPaths {
    /// Build paths from an explicit global directory and working directory.
    pub fn new(global_dir: &Path, cwd: &Path) -> Self {
        Self {
            global: global_dir.join(GLOBAL_FILE_NAME),
            local: cwd.join(LOCAL_FILE_NAME),
        }
    }

    /// Resolve paths for `cwd` from the environment.
    ///
    /// The global directory is `$GITMORPH_CONFIG_DIR` when set and non-empty,
    /// otherwise `~/.gitmorph`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] if neither the override nor a home
    /// directory is available.
    pub fn discover(cwd: &Path) -> Result<Self> {
        let global_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or(ConfigError::NoHomeDir)?
                .join(GLOBAL_DIR_NAME),
        };
        Ok(Self::new(&global_dir, cwd))
    }

    pub fn for_scope(&self, scope: ConfigScope) -> &Path {
        match scope {
            ConfigScope::Global => &self.global,
            ConfigScope::Local => &self.local,
        }
    }
}
