//! `gm scaffold` -- lay out an empty project skeleton.
//!
//! Entries ending in `/` are directories (created recursively); every other
//! entry is written as an empty file, truncating whatever was there. Entries
//! are processed in declared order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::cli::ScaffoldArgs;
use crate::context::RuntimeContext;
use crate::output::{display_feedback, report_error};

/// Verb-local validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaffoldError {
    #[error("Unsupported project type '{0}'")]
    UnsupportedTemplate(String),
}

const TEMPLATES: &[(&str, &[&str])] = &[
    (
        "node",
        &[
            "src/",
            "test/",
            "src/index.js",
            "test/index.test.js",
            "package.json",
            "README.md",
        ],
    ),
    (
        "react",
        &[
            "src/",
            "public/",
            "src/App.js",
            "src/index.js",
            "public/index.html",
            "package.json",
            "README.md",
        ],
    ),
];

/// One filesystem action taken while scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStep {
    Directory(String),
    File(String),
}

/// Execute the `gm scaffold` command.
pub fn run(ctx: &RuntimeContext, args: &ScaffoldArgs) -> Result<()> {
    let entries = match template(&args.template) {
        Ok(entries) => entries,
        Err(e) => {
            report_error(&e.to_string());
            return Ok(());
        }
    };

    for step in scaffold(&ctx.cwd, entries)? {
        match step {
            ScaffoldStep::Directory(dir) => display_feedback(&format!("Created directory: {dir}")),
            ScaffoldStep::File(file) => display_feedback(&format!("File created: {file}")),
        }
    }
    display_feedback(&format!(
        "{} project structure scaffolded successfully.",
        args.template
    ));
    Ok(())
}

/// Look up the entries of template `name`.
pub fn template(name: &str) -> Result<&'static [&'static str], ScaffoldError> {
    TEMPLATES
        .iter()
        .find(|(template, _)| *template == name)
        .map(|(_, entries)| *entries)
        .ok_or_else(|| ScaffoldError::UnsupportedTemplate(name.to_string()))
}

/// Create `entries` under `root`.
pub fn scaffold(root: &Path, entries: &[&str]) -> Result<Vec<ScaffoldStep>> {
    let mut steps = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = root.join(entry);
        if entry.ends_with('/') {
            fs::create_dir_all(&path)
                .with_context(|| format!("failed to create directory {}", path.display()))?;
            steps.push(ScaffoldStep::Directory((*entry).to_string()));
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        debug!(path = %path.display(), "writing empty file");
        fs::write(&path, "").with_context(|| format!("failed to create {}", path.display()))?;
        steps.push(ScaffoldStep::File((*entry).to_string()));
    }
    Ok(steps)
}
