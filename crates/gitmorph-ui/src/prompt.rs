//! Interactive prompts.
//!
//! Callers depend on the [`MultiSelect`] trait so that a scripted selection
//! can stand in for the terminal during tests.

use inquire::InquireError;
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("cannot prompt: not running in an interactive terminal")]
    NotInteractive,

    #[error("prompt failed: {0}")]
    Io(String),
}

/// Lets the user pick any subset of `options`.
pub trait MultiSelect {
    /// Returns the chosen options, in the order they were offered.
    fn select(&self, message: &str, options: &[&str]) -> Result<Vec<String>, PromptError>;
}

/// Checkbox prompt on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalMultiSelect;

impl MultiSelect for TerminalMultiSelect {
    fn select(&self, message: &str, options: &[&str]) -> Result<Vec<String>, PromptError> {
        let chosen = inquire::MultiSelect::new(message, options.to_vec())
            .prompt()
            .map_err(|e| match e {
                InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                    PromptError::Cancelled
                }
                InquireError::NotTTY => PromptError::NotInteractive,
                other => PromptError::Io(other.to_string()),
            })?;
        Ok(chosen.into_iter().map(str::to_string).collect())
    }
}

/// A [`MultiSelect`] that always answers with a fixed selection.
#[derive(Debug, Default, Clone)]
pub struct FixedSelection(pub Vec<String>);

impl MultiSelect for FixedSelection {
    fn select(&self, _message: &str, _options: &[&str]) -> Result<Vec<String>, PromptError> {
        Ok(self.0.clone())
    }
}
