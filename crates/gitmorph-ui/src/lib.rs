//! Terminal UI components for GitMorph.
//!
//! Provides colour styling with terminal detection for CLI feedback, and the
//! interactive multi-select prompt used when choosing `.gitignore` categories.

pub mod prompt;
pub mod styles;
pub mod terminal;
