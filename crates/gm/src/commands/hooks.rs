//! `gm hooks` -- list, add and remove scripts in `.git/hooks`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::cli::HooksArgs;
use crate::context::RuntimeContext;
use crate::output::{display_feedback, print_notice, report_error};

pub const HOOKS_DIR: &str = ".git/hooks";

const HOOK_TEMPLATE: &str = "#!/bin/sh\n\n# Add your hook logic here\n";

/// Hook names git knows how to invoke (see githooks(5)).
pub const KNOWN_HOOKS: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "proc-receive",
    "post-receive",
    "post-update",
    "reference-transaction",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-changelist",
    "p4-prepare-changelist",
    "p4-post-changelist",
    "p4-pre-submit",
    "post-index-change",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookError {
    #[error("Unknown hook '{0}'")]
    UnknownHook(String),
}

/// Execute the `gm hooks` command.
pub fn run(ctx: &RuntimeContext, args: &HooksArgs) -> Result<()> {
    let dir = ctx.path(HOOKS_DIR);

    if args.list {
        print_notice("Available hooks:");
        for name in list(&dir)? {
            println!("{name}");
        }
    } else if let Some(name) = &args.add {
        match add(&dir, name) {
            Ok(path) => {
                display_feedback(&format!("File created: {}", relative(&path)));
                display_feedback(&format!("Hook {name} added successfully."));
            }
            Err(e) => match e.downcast_ref::<HookError>() {
                Some(hook_err) => report_error(&hook_err.to_string()),
                None => return Err(e),
            },
        }
    } else if let Some(name) = &args.remove {
        remove(&dir, name)?;
        display_feedback(&format!("Hook {name} removed successfully."));
    } else {
        print_notice("Use --list, --add, or --remove to manage hooks.");
    }
    Ok(())
}

/// Entry names in the hooks directory, sorted.
pub fn list(dir: &Path) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read {}", dir.display()))?;
    names.sort();
    Ok(names)
}

/// Write the starter script for `name` and make it executable.
pub fn add(dir: &Path, name: &str) -> Result<PathBuf> {
    validate(name)?;
    let path = dir.join(name);
    debug!(path = %path.display(), "writing hook");
    fs::write(&path, HOOK_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    make_executable(&path)?;
    Ok(path)
}

/// Delete the hook file. A missing file is an error.
pub fn remove(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    debug!(path = %path.display(), "removing hook");
    fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))
}

pub fn validate(name: &str) -> Result<(), HookError> {
    if KNOWN_HOOKS.contains(&name) {
        Ok(())
    } else {
        Err(HookError::UnknownHook(name.to_string()))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

fn relative(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("{HOOKS_DIR}/{}", name.to_string_lossy()),
        None => path.display().to_string(),
    }
}
