//! Output formatting helpers for the `gm` CLI.
//!
//! Fixed-template feedback goes to stdout prefixed with a green `Success:`
//! label; recoverable verb errors go to stderr with a red `Error:` label.
//! Output captured from external tools is printed verbatim, stdout to stdout
//! and stderr to stderr.

use std::io::{self, Write};

use gitmorph_ui::styles::{render_fail, render_pass, render_warn};

/// What a verb reports once it finished successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the captured output of the external command as-is.
    Captured(String),
    /// Print a fixed-template success line.
    Success(String),
}

impl Outcome {
    pub fn emit(&self) {
        match self {
            Outcome::Captured(text) => print_captured(text),
            Outcome::Success(message) => display_feedback(message),
        }
    }
}

/// An [`Outcome`] together with whatever the external command wrote to
/// stderr while succeeding (git's progress and summary lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub diagnostics: String,
}

impl Report {
    /// Forward the diagnostics to stderr, then emit the outcome.
    pub fn emit(&self) {
        forward_diagnostics(&self.diagnostics);
        self.outcome.emit();
    }
}

/// Print `Success: <message>`.
pub fn display_feedback(message: &str) {
    println!("{} {}", render_pass("Success:"), message);
}

/// Print `Error: <message>` on stderr for a condition the verb recovered from.
pub fn report_error(message: &str) {
    eprintln!("{} {}", render_fail("Error:"), message);
}

/// Print an informational line (headings, "nothing found" notices).
pub fn print_notice(message: &str) {
    println!("{}", render_warn(message));
}

/// Write a child's stderr to our stderr verbatim. Empty text prints nothing.
pub fn forward_diagnostics(text: &str) {
    if text.is_empty() {
        return;
    }
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_all(text.as_bytes());
    if !text.ends_with('\n') {
        let _ = writeln!(handle);
    }
}

/// Print captured text verbatim, followed by a newline.
pub fn print_captured(text: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Ignore broken pipe errors (e.g., piped to `head`)
    let _ = handle.write_all(text.as_bytes());
    if !text.ends_with('\n') {
        let _ = writeln!(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_smoke() {
        // Just ensure it doesn't panic
        Outcome::Captured("line\n".into()).emit();
        Outcome::Captured(String::new()).emit();
        Outcome::Success("done".into()).emit();
        Report {
            outcome: Outcome::Success("pushed".into()),
            diagnostics: "To origin\n".into(),
        }
        .emit();
        forward_diagnostics("");
        report_error("recoverable");
        print_notice("notice");
    }
}
