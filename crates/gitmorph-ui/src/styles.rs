//! Colour styling for GitMorph CLI output.
//!
//! Only labels and headings are coloured; captured output from external tools
//! is always printed untouched.

use owo_colors::{AnsiColors, OwoColorize};

use crate::terminal::supports_color;

/// Applies an ANSI foreground colour, falling back to plain text when colour
/// is not supported.
fn color_str(s: &str, color: AnsiColors) -> String {
    if supports_color() {
        s.color(color).to_string()
    } else {
        s.to_string()
    }
}

/// Renders text with success (green) styling.
pub fn render_pass(s: &str) -> String {
    color_str(s, AnsiColors::Green)
}

/// Renders text with warning (yellow) styling. Also used for section
/// headings and informational notices.
pub fn render_warn(s: &str) -> String {
    color_str(s, AnsiColors::Yellow)
}

/// Renders text with failure (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, AnsiColors::Red)
}

/// Renders text with accent (cyan) styling.
pub fn render_accent(s: &str) -> String {
    color_str(s, AnsiColors::Cyan)
}

/// Renders text with heading (blue) styling.
pub fn render_heading(s: &str) -> String {
    color_str(s, AnsiColors::Blue)
}
