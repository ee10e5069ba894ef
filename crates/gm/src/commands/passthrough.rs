//! Thin pass-through verbs.
//!
//! Most verbs only translate their arguments into a `git` (or `npm`/`npx`)
//! command line, run it, and either echo the captured output or print a fixed
//! success line. Each of them implements [`PassThrough`] and is executed by
//! [`run`].
//!
//! Arguments are interpolated without shell escaping. Only the commit and
//! stash messages are wrapped in double quotes.

use anyhow::Result;
use gitmorph_exec::{CommandRunner, ExecError};
use tracing::debug;

use crate::cli::{
    ApplyStashArgs, BlameArgs, BranchArgs, CloneArgs, DeleteArgs, DependenciesArgs, DiffArgs,
    DownloadArgs, HistoryArgs, InitArgs, LintArgs, MergeArgs, RebaseArgs, SaveArgs, StageArgs,
    StashArgs, StatusArgs, SwitchArgs, TestArgs, UploadArgs,
};
use crate::context::RuntimeContext;
use crate::output::{Outcome, Report};

/// A verb that is nothing more than one external command line.
pub trait PassThrough {
    /// The command line to execute.
    fn command_line(&self) -> String;

    /// Fixed success line to print instead of the captured output, if any.
    fn success_message(&self) -> Option<String> {
        None
    }
}

/// Run `verb` through `runner` and turn the result into a [`Report`].
///
/// The command's stderr is kept as diagnostics even on success, so git's own
/// feedback (push summaries, checkout notices, warnings) still reaches the
/// user.
///
/// # Errors
///
/// Any [`ExecError`] from the runner is returned unchanged.
pub fn execute<V: PassThrough + ?Sized>(
    runner: &dyn CommandRunner,
    verb: &V,
) -> Result<Report, ExecError> {
    let line = verb.command_line();
    debug!(command = %line, "pass-through");
    let output = runner.run(&line)?;
    let outcome = match verb.success_message() {
        Some(message) => Outcome::Success(message),
        None => Outcome::Captured(output.stdout),
    };
    Ok(Report {
        outcome,
        diagnostics: output.stderr,
    })
}

/// Execute `verb` in the context's working directory and print its outcome.
pub fn run<V: PassThrough + ?Sized>(ctx: &RuntimeContext, verb: &V) -> Result<()> {
    execute(ctx.runner(), verb)?.emit();
    Ok(())
}

// ---------------------------------------------------------------------------
// Git verbs
// ---------------------------------------------------------------------------

impl PassThrough for InitArgs {
    fn command_line(&self) -> String {
        match &self.branch {
            Some(branch) => format!("git init -b {branch}"),
            None => "git init".to_string(),
        }
    }

    fn success_message(&self) -> Option<String> {
        Some("Git repository initialized successfully.".to_string())
    }
}

impl PassThrough for CloneArgs {
    fn command_line(&self) -> String {
        let mut line = format!("git clone {}", self.url);
        if let Some(branch) = &self.branch {
            line.push_str(&format!(" -b {branch}"));
        }
        if let Some(depth) = self.depth {
            line.push_str(&format!(" --depth {depth}"));
        }
        line
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Repository cloned successfully from {}", self.url))
    }
}

impl PassThrough for StageArgs {
    fn command_line(&self) -> String {
        format!("git add {}", self.files.join(" "))
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("File(s) {} staged successfully.", self.files.join(" ")))
    }
}

impl PassThrough for SaveArgs {
    fn command_line(&self) -> String {
        let mut line = "git commit".to_string();
        if self.all {
            line.push_str(" -a");
        }
        line.push_str(&format!(" -m \"{}\"", self.message));
        line
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Changes committed with message: '{}'", self.message))
    }
}

impl PassThrough for UploadArgs {
    fn command_line(&self) -> String {
        match &self.branch {
            Some(branch) => format!("git push origin {branch}"),
            None => "git push".to_string(),
        }
    }

    fn success_message(&self) -> Option<String> {
        Some("Changes pushed to remote successfully.".to_string())
    }
}

impl PassThrough for DownloadArgs {
    fn command_line(&self) -> String {
        match &self.branch {
            Some(branch) => format!("git pull origin {branch}"),
            None => "git pull".to_string(),
        }
    }

    fn success_message(&self) -> Option<String> {
        Some("Changes pulled from remote successfully.".to_string())
    }
}

impl PassThrough for StatusArgs {
    fn command_line(&self) -> String {
        if self.short {
            "git status -s".to_string()
        } else {
            "git status".to_string()
        }
    }
}

impl PassThrough for HistoryArgs {
    fn command_line(&self) -> String {
        let mut line = "git log".to_string();
        if let Some(number) = self.number {
            line.push_str(&format!(" -n {number}"));
        }
        if self.oneline {
            line.push_str(" --oneline");
        }
        line
    }
}

impl PassThrough for BranchArgs {
    fn command_line(&self) -> String {
        format!("git branch {}", self.name)
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Branch '{}' created successfully.", self.name))
    }
}

impl PassThrough for SwitchArgs {
    fn command_line(&self) -> String {
        format!("git checkout {}", self.branch)
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Switched to branch '{}' successfully.", self.branch))
    }
}

impl PassThrough for MergeArgs {
    fn command_line(&self) -> String {
        format!("git merge {}", self.branch)
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Branch '{}' merged successfully.", self.branch))
    }
}

impl PassThrough for DeleteArgs {
    fn command_line(&self) -> String {
        let flag = if self.force { "-D" } else { "-d" };
        format!("git branch {flag} {}", self.branch)
    }

    fn success_message(&self) -> Option<String> {
        Some(format!("Branch '{}' deleted successfully.", self.branch))
    }
}

impl PassThrough for StashArgs {
    fn command_line(&self) -> String {
        match &self.message {
            Some(message) => format!("git stash push -m \"{message}\""),
            None => "git stash".to_string(),
        }
    }

    fn success_message(&self) -> Option<String> {
        Some("Changes stashed successfully.".to_string())
    }
}

impl PassThrough for ApplyStashArgs {
    fn command_line(&self) -> String {
        match self.index {
            Some(index) => format!("git stash apply stash@{{{index}}}"),
            None => "git stash apply".to_string(),
        }
    }

    fn success_message(&self) -> Option<String> {
        Some("Stashed changes applied successfully.".to_string())
    }
}

impl PassThrough for RebaseArgs {
    fn command_line(&self) -> String {
        format!("git rebase {}", self.branch)
    }

    fn success_message(&self) -> Option<String> {
        Some(format!(
            "Current branch rebased onto '{}' successfully.",
            self.branch
        ))
    }
}

impl PassThrough for DiffArgs {
    /// `--staged` takes precedence over `--commit`.
    fn command_line(&self) -> String {
        if self.staged {
            "git diff --staged".to_string()
        } else if let Some(commit) = &self.commit {
            format!("git diff {commit}^..{commit}")
        } else {
            "git diff".to_string()
        }
    }
}

impl PassThrough for BlameArgs {
    fn command_line(&self) -> String {
        format!("git blame {}", self.file)
    }
}

// ---------------------------------------------------------------------------
// npm / npx verbs
// ---------------------------------------------------------------------------

impl PassThrough for LintArgs {
    fn command_line(&self) -> String {
        if self.fix {
            "npx eslint . --fix".to_string()
        } else {
            "npx eslint .".to_string()
        }
    }
}

impl PassThrough for TestArgs {
    fn command_line(&self) -> String {
        if self.watch {
            "npm test -- --watch".to_string()
        } else {
            "npm test".to_string()
        }
    }
}

impl PassThrough for DependenciesArgs {
    fn command_line(&self) -> String {
        if self.outdated {
            "npm outdated".to_string()
        } else {
            "npm list --depth=0".to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
