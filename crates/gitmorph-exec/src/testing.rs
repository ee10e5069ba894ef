//! Scripted test doubles for [`CommandRunner`] and [`RepoDetector`].

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::repo::RepoDetector;
use crate::runner::{CommandRunner, ExecError, ProcessOutput, Result};

/// A canned response for one [`ScriptedRunner::run`] call.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Exit 0 with the given stdout and stderr.
    Success { stdout: String, stderr: String },
    /// Exit with `code` and the given stderr.
    Failure { code: i32, stderr: String },
}

/// Records every command line it is asked to run and replays queued
/// responses in order. Once the queue is empty every call succeeds with
/// empty stdout.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn succeed(self, stdout: impl Into<String>) -> Self {
        self.succeed_with_stderr(stdout, "")
    }

    /// Queue a successful response that also wrote to stderr.
    pub fn succeed_with_stderr(
        self,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        self.responses.borrow_mut().push_back(Scripted::Success {
            stdout: stdout.into(),
            stderr: stderr.into(),
        });
        self
    }

    /// Queue a failing response.
    pub fn fail(self, code: i32, stderr: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Scripted::Failure {
            code,
            stderr: stderr.into(),
        });
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command_line: &str) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(command_line.to_string());
        match self.responses.borrow_mut().pop_front() {
            None => Ok(ProcessOutput {
                code: Some(0),
                ..ProcessOutput::default()
            }),
            Some(Scripted::Success { stdout, stderr }) => Ok(ProcessOutput {
                code: Some(0),
                stdout,
                stderr,
            }),
            Some(Scripted::Failure { code, stderr }) => Err(ExecError::Failed {
                command: command_line.to_string(),
                code: Some(code),
                stderr,
            }),
        }
    }
}

/// A [`RepoDetector`] with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedRepo(pub bool);

impl RepoDetector for FixedRepo {
    fn is_repository(&self) -> bool {
        self.0
    }
}
