//! External process execution for GitMorph.
//!
//! Every git-facing feature shells out to a pre-installed `git` binary (or
//! `grep`, `npm`, `npx`) and trusts its output verbatim. This crate owns that
//! boundary: [`runner`] executes a command line and normalizes failure, and
//! [`repo`] answers whether the working directory is inside a git work tree.

pub mod repo;
pub mod runner;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use repo::{GitRepoDetector, RepoDetector};
pub use runner::{CommandRunner, ExecError, ProcessOutput, Result, ShellRunner};
