//! `gm analyze` -- commit count, contributors and most changed files.

use anyhow::Result;
use gitmorph_exec::{CommandRunner, ExecError, RepoDetector};
use gitmorph_ui::styles::{render_heading, render_warn};

use crate::context::RuntimeContext;
use crate::output::report_error;

const TOTAL_COMMITS: &str = "git rev-list --count HEAD";
const CONTRIBUTORS: &str = "git shortlog -sn --no-merges HEAD";
const MOST_CHANGED: &str =
    "git log --pretty=format: --name-only | sort | uniq -c | sort -rg | head -10";

/// Repository statistics, each trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStats {
    pub total_commits: String,
    pub contributors: String,
    pub most_changed: String,
}

/// Execute the `gm analyze` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if !ctx.repo_detector().is_repository() {
        report_error("Not a git repository");
        return Ok(());
    }

    let stats = collect(ctx.runner())?;
    println!("{}", render_heading("Repository Analysis:"));
    println!("{} {}", render_warn("Total Commits:"), stats.total_commits);
    println!("\n{}", render_warn("Top Contributors:"));
    println!("{}", stats.contributors);
    println!("\n{}", render_warn("Most Changed Files:"));
    println!("{}", stats.most_changed);
    Ok(())
}

pub fn collect(runner: &dyn CommandRunner) -> Result<RepoStats, ExecError> {
    let capture = |line: &str| -> Result<String, ExecError> {
        Ok(runner.run(line)?.stdout.trim().to_string())
    };
    Ok(RepoStats {
        total_commits: capture(TOTAL_COMMITS)?,
        contributors: capture(CONTRIBUTORS)?,
        most_changed: capture(MOST_CHANGED)?,
    })
}
