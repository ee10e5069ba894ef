//! Repository detection.
//!
//! Asks `git` itself whether the working directory is inside a work tree,
//! rather than walking the filesystem for a `.git` entry, so worktrees,
//! submodules and `GIT_DIR` overrides are all answered the way git sees them.

use tracing::debug;

use crate::runner::CommandRunner;

/// The probe used to decide whether we are inside a work tree. It has no
/// side effects.
pub const WORK_TREE_PROBE: &str = "git rev-parse --is-inside-work-tree";

/// Answers whether the current directory is inside a git working tree.
pub trait RepoDetector {
    fn is_repository(&self) -> bool;
}

impl<D: RepoDetector + ?Sized> RepoDetector for &D {
    fn is_repository(&self) -> bool {
        (**self).is_repository()
    }
}

/// [`RepoDetector`] that runs [`WORK_TREE_PROBE`] through a [`CommandRunner`].
///
/// Any failure of the probe (not a repository, git missing, spawn error) is a
/// negative answer. The probe's stderr is captured and dropped so a legitimate
/// "no" never prints noise.
#[derive(Debug, Clone)]
pub struct GitRepoDetector<R> {
    runner: R,
}

impl<R: CommandRunner> GitRepoDetector<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> RepoDetector for GitRepoDetector<R> {
    fn is_repository(&self) -> bool {
        match self.runner.run(WORK_TREE_PROBE) {
            // Inside `.git` itself the probe exits 0 but prints "false".
            Ok(output) => output.stdout.trim() == "true",
            Err(e) => {
                debug!(error = %e, "work tree probe failed");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
