//! `gm todo` -- a per-directory list of TODO notes in `.gm_todos`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::TodoArgs;
use crate::context::RuntimeContext;
use crate::output::{display_feedback, print_captured, print_notice};

pub const TODO_FILE: &str = ".gm_todos";

/// Execute the `gm todo` command.
///
/// `--add` appends first; the list is shown when `--list` is given or when
/// nothing was added.
pub fn run(ctx: &RuntimeContext, args: &TodoArgs) -> Result<()> {
    let path = ctx.path(TODO_FILE);

    if let Some(task) = &args.add {
        append(&path, task)?;
        display_feedback(&format!("Added TODO: {task}"));
    }

    if args.list || args.add.is_none() {
        match read(&path)? {
            Some(todos) => {
                print_notice("TODOs:");
                print_captured(&todos);
            }
            None => print_notice("No TODOs found."),
        }
    }
    Ok(())
}

/// Append `TODO: <task>` as one line.
pub fn append(path: &Path, task: &str) -> Result<()> {
    debug!(path = %path.display(), "appending todo");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writeln!(file, "TODO: {task}").with_context(|| format!("failed to write {}", path.display()))
}

/// The whole TODO file, or `None` when it does not exist.
pub fn read(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}
