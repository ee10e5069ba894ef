//! Shell command execution.
//!
//! Provides a thin wrapper around subprocess invocation so that the rest of
//! the codebase never deals with `std::process::Command` directly. Commands
//! are handed over as a single, fully assembled command line and run through
//! the platform shell (`sh -c` on Unix, `cmd /C` on Windows).
//!
//! The runner does not escape or validate anything inside the command line.
//! Verbs that interpolate user input into it accept that the input can alter
//! the resulting command.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The shell could not be found or spawned.
    #[error("failed to start shell: {0}")]
    Spawn(#[from] std::io::Error),

    /// The command exited with a non-zero status.
    #[error("command failed ({}): {command}", describe_exit(.code))]
    Failed {
        /// The command line that was executed.
        command: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The captured stderr, trimmed.
        stderr: String,
    },
}

impl ExecError {
    /// The exit code of a failed command, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::Failed { code, .. } => *code,
            ExecError::Spawn(_) => None,
        }
    }

    /// The captured stderr of a failed command.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ExecError::Failed { stderr, .. } => Some(stderr),
            ExecError::Spawn(_) => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// A specialized `Result` type for process execution.
pub type Result<T> = std::result::Result<T, ExecError>;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Captured result of a process that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code (always `Some(0)` for real processes).
    pub code: Option<i32>,
    /// Captured stdout, untrimmed.
    pub stdout: String,
    /// Captured stderr, untrimmed.
    pub stderr: String,
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Executes a command line synchronously and captures its output.
///
/// Implementations block until the process exits. There is no timeout: a
/// command that never exits blocks the caller forever.
pub trait CommandRunner {
    /// Run `command_line` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Spawn`] if the shell cannot be started, or
    /// [`ExecError::Failed`] if the command exits with a non-zero status.
    fn run(&self, command_line: &str) -> Result<ProcessOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command_line: &str) -> Result<ProcessOutput> {
        (**self).run(command_line)
    }
}

/// [`CommandRunner`] backed by the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    cwd: Option<PathBuf>,
}

impl ShellRunner {
    /// A runner that executes in the current process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner that executes every command in `cwd`.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    /// The directory commands run in, if one was set.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<ProcessOutput> {
        debug!(command = command_line, "executing");

        let mut cmd = shell_command(command_line);
        cmd.stdin(Stdio::null());
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        let code = output.status.code();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(command = command_line, ?code, "command failed");
            return Err(ExecError::Failed {
                command: command_line.to_string(),
                code,
                stderr,
            });
        }

        Ok(ProcessOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command_line]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command_line]);
    cmd
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn captures_stdout_verbatim() {
        let out = ShellRunner::new().run("printf 'a\\nb\\n'").unwrap();
        assert_eq!(out.stdout, "a\nb\n");
        assert_eq!(out.code, Some(0));
    }

    #[test]
    fn non_zero_exit_is_failed() {
        let err = ShellRunner::new()
            .run("echo boom >&2; exit 3")
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert_eq!(err.stderr(), Some("boom"));
        match err {
            ExecError::Failed { command, .. } => assert_eq!(command, "echo boom >&2; exit 3"),
            other => panic!("expected Failed, got: {other:?}"),
        }
    }

    #[test]
    fn failed_display_names_command_and_code() {
        let err = ShellRunner::new().run("exit 2").unwrap_err();
        assert_eq!(err.to_string(), "command failed (exit code 2): exit 2");
    }

    #[test]
    fn runs_in_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let out = ShellRunner::in_dir(dir.path()).run("ls").unwrap();
        assert!(out.stdout.contains("marker.txt"));
    }

    #[test]
    fn stdin_is_closed() {
        // `cat` with no input must see EOF instead of blocking.
        let out = ShellRunner::new().run("cat").unwrap();
        assert_eq!(out.stdout, "");
    }

    #[test]
    fn bad_cwd_is_spawn_error() {
        let err = ShellRunner::in_dir("/nonexistent/directory/xyz")
            .run("true")
            .unwrap_err();
        assert!(matches!(err, ExecError::Spawn(_)));
    }
}
