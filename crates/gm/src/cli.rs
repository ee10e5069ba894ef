//! Clap CLI definitions for the `gm` command.
//!
//! This module defines the complete CLI structure using clap 4 derive macros.
//! Each verb gets its own `*Args` struct; the dispatcher in `main.rs` maps a
//! parsed [`Commands`] variant to its handler.

use clap::{ArgGroup, Args, Parser, Subcommand};

/// gm -- GitMorph.
///
/// Simplified Git operations and beyond.
#[derive(Parser, Debug)]
#[command(
    name = "gm",
    about = "GitMorph - Simplified Git operations and beyond",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Git =====
    /// Initialize a new Git repository.
    Init(InitArgs),

    /// Clone a repository.
    Clone(CloneArgs),

    /// Stage files.
    Stage(StageArgs),

    /// Commit changes.
    Save(SaveArgs),

    /// Push to remote.
    Upload(UploadArgs),

    /// Pull from remote.
    Download(DownloadArgs),

    /// Check status.
    Status(StatusArgs),

    /// Check log.
    History(HistoryArgs),

    /// Create a new branch.
    Branch(BranchArgs),

    /// Switch to a different branch.
    Switch(SwitchArgs),

    /// Merge branches.
    Merge(MergeArgs),

    /// Delete a branch.
    Delete(DeleteArgs),

    /// Stash changes.
    Stash(StashArgs),

    /// Apply stashed changes.
    ApplyStash(ApplyStashArgs),

    /// Rebase current branch.
    Rebase(RebaseArgs),

    /// Show changes between commits, commit and working tree, etc.
    Diff(DiffArgs),

    /// Show what revision and author last modified each line of a file.
    Blame(BlameArgs),

    /// Manage Git hooks.
    Hooks(HooksArgs),

    /// Analyze repository statistics.
    Analyze,

    // ===== Beyond Git =====
    /// Create a .gitignore file with common patterns.
    CreateIgnore(CreateIgnoreArgs),

    /// List or add TODO notes for this project.
    Todo(TodoArgs),

    /// Scaffold a basic project structure.
    Scaffold(ScaffoldArgs),

    /// Search for a string in all files.
    Search(SearchArgs),

    /// Lint your code.
    Lint(LintArgs),

    /// Run a simple benchmark test.
    Benchmark(BenchmarkArgs),

    /// Analyze project dependencies.
    Dependencies(DependenciesArgs),

    /// Generate a basic Dockerfile for the project.
    Docker,

    /// Run tests.
    Test(TestArgs),

    /// Manage GitMorph configuration.
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),
}

// ---------------------------------------------------------------------------
// Git pass-through verbs
// ---------------------------------------------------------------------------

/// Arguments for `gm init`.
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Specify the initial branch name.
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Arguments for `gm clone`.
#[derive(Args, Debug, Default)]
pub struct CloneArgs {
    /// Repository URL.
    pub url: String,

    /// Specify a branch to clone.
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Create a shallow clone with a specified depth.
    #[arg(short, long)]
    pub depth: Option<u32>,
}

/// Arguments for `gm stage`.
#[derive(Args, Debug, Default)]
pub struct StageArgs {
    /// Files to stage.
    #[arg(required = true)]
    pub files: Vec<String>,
}

/// Arguments for `gm save`.
#[derive(Args, Debug, Default)]
pub struct SaveArgs {
    /// Commit message.
    pub message: String,

    /// Automatically stage files that have been modified and deleted.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `gm upload`.
#[derive(Args, Debug, Default)]
pub struct UploadArgs {
    /// Specify the branch to push.
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Arguments for `gm download`.
#[derive(Args, Debug, Default)]
pub struct DownloadArgs {
    /// Specify the branch to pull.
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Arguments for `gm status`.
#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Give the output in the short-format.
    #[arg(short, long)]
    pub short: bool,
}

/// Arguments for `gm history`.
#[derive(Args, Debug, Default)]
pub struct HistoryArgs {
    /// Limit the number of commits to output.
    #[arg(short, long)]
    pub number: Option<u32>,

    /// Show each commit on a single line.
    #[arg(long)]
    pub oneline: bool,
}

/// Arguments for `gm branch`.
#[derive(Args, Debug, Default)]
pub struct BranchArgs {
    /// Branch name.
    pub name: String,
}

/// Arguments for `gm switch`.
#[derive(Args, Debug, Default)]
pub struct SwitchArgs {
    /// Branch name.
    pub branch: String,
}

/// Arguments for `gm merge`.
#[derive(Args, Debug, Default)]
pub struct MergeArgs {
    /// Branch to merge.
    pub branch: String,
}

/// Arguments for `gm delete`.
#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    /// Branch to delete.
    pub branch: String,

    /// Force deletion of branch.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for `gm stash`.
#[derive(Args, Debug, Default)]
pub struct StashArgs {
    /// Stash with a message.
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for `gm apply-stash`.
#[derive(Args, Debug, Default)]
pub struct ApplyStashArgs {
    /// Apply a specific stash by index.
    #[arg(short, long)]
    pub index: Option<u32>,
}

/// Arguments for `gm rebase`.
#[derive(Args, Debug, Default)]
pub struct RebaseArgs {
    /// Branch to rebase onto.
    pub branch: String,
}

/// Arguments for `gm diff`.
#[derive(Args, Debug, Default)]
pub struct DiffArgs {
    /// Show diff of staged changes.
    #[arg(short, long)]
    pub staged: bool,

    /// Show diff of a specific commit.
    #[arg(short, long)]
    pub commit: Option<String>,
}

/// Arguments for `gm blame`.
#[derive(Args, Debug, Default)]
pub struct BlameArgs {
    /// File to blame.
    pub file: String,
}

/// Arguments for `gm hooks`.
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("action").args(["list", "add", "remove"])))]
pub struct HooksArgs {
    /// List available hooks.
    #[arg(short, long)]
    pub list: bool,

    /// Add a new hook.
    #[arg(short, long, value_name = "HOOK")]
    pub add: Option<String>,

    /// Remove a hook.
    #[arg(short, long, value_name = "HOOK")]
    pub remove: Option<String>,
}

// ---------------------------------------------------------------------------
// Beyond git
// ---------------------------------------------------------------------------

/// Arguments for `gm create-ignore`.
#[derive(Args, Debug, Default)]
pub struct CreateIgnoreArgs {
    /// Include all patterns.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `gm todo`.
#[derive(Args, Debug, Default)]
pub struct TodoArgs {
    /// Add a new TODO.
    #[arg(short, long, value_name = "TASK")]
    pub add: Option<String>,

    /// List all TODOs.
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for `gm scaffold`.
#[derive(Args, Debug, Default)]
pub struct ScaffoldArgs {
    /// Project type (e.g., node, react).
    pub template: String,
}

/// Arguments for `gm search`.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Search query.
    pub query: String,

    /// Ignore case.
    #[arg(short, long)]
    pub ignore_case: bool,
}

/// Arguments for `gm lint`.
#[derive(Args, Debug, Default)]
pub struct LintArgs {
    /// Automatically fix problems.
    #[arg(short, long)]
    pub fix: bool,
}

/// Arguments for `gm benchmark`.
#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    /// Command to benchmark.
    pub command: String,

    /// Number of runs.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,
}

/// Arguments for `gm dependencies`.
#[derive(Args, Debug, Default)]
pub struct DependenciesArgs {
    /// Check for outdated dependencies.
    #[arg(short, long)]
    pub outdated: bool,
}

/// Arguments for `gm test`.
#[derive(Args, Debug, Default)]
pub struct TestArgs {
    /// Run tests in watch mode.
    #[arg(short, long)]
    pub watch: bool,
}

/// Arguments for `gm config`.
///
/// `--set`, `--delete` and `--view` are mutually exclusive.
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("action").args(["set", "delete", "view"])))]
pub struct ConfigArgs {
    /// Use global configuration (the default).
    #[arg(short, long)]
    pub global: bool,

    /// Use local configuration.
    #[arg(short, long)]
    pub local: bool,

    /// Set a configuration value.
    #[arg(short, long, num_args = 2, value_names = ["KEY", "VALUE"])]
    pub set: Option<Vec<String>>,

    /// Delete a configuration value.
    #[arg(short, long, value_name = "KEY")]
    pub delete: Option<String>,

    /// View the current configuration.
    #[arg(short, long)]
    pub view: bool,
}

/// Arguments for `gm completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
