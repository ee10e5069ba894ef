//! `gm create-ignore` -- write a `.gitignore` from a fixed pattern catalog.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gitmorph_ui::prompt::{MultiSelect, PromptError, TerminalMultiSelect};
use gitmorph_ui::terminal::stdin_is_tty;
use tracing::debug;

use crate::cli::CreateIgnoreArgs;
use crate::context::RuntimeContext;
use crate::output::display_feedback;

pub const IGNORE_FILE: &str = ".gitignore";

const PREAMBLE: &str = "# GitMorph generated .gitignore";

/// Pattern categories in the order they are offered and rendered.
pub const CATALOG: &[(&str, &str)] = &[
    ("node", "node_modules/\nnpm-debug.log\nyarn-error.log\n.npm/"),
    ("python", "__pycache__/\n*.py[cod]\n*.egg-info/\n.venv/\nvenv/"),
    ("java", "*.class\n*.jar\n*.war\ntarget/"),
    ("ruby", "*.gem\n.bundle/\nvendor/bundle/"),
    ("go", "*.exe\n*.test\n*.out\nvendor/"),
    ("rust", "target/\n**/*.rs.bk"),
    ("csharp", "bin/\nobj/\n*.suo\n*.user"),
    ("web", "dist/\nbuild/\n.cache/\n.env"),
    ("ide", ".idea/\n.vscode/\n*.swp\n*.swo"),
    ("database", "*.sqlite\n*.sqlite3\n*.db"),
    ("logs", "logs/\n*.log"),
    ("os", ".DS_Store\nThumbs.db\ndesktop.ini"),
    ("archives", "*.zip\n*.tar\n*.tar.gz\n*.rar\n*.7z"),
    ("images", "*.png\n*.jpg\n*.jpeg\n*.gif\n*.ico"),
];

/// Execute the `gm create-ignore` command.
pub fn run(ctx: &RuntimeContext, args: &CreateIgnoreArgs) -> Result<()> {
    let selected = if args.all {
        all_categories()
    } else if stdin_is_tty() {
        select_categories(&TerminalMultiSelect)?
    } else {
        return Err(PromptError::NotInteractive).context("use --all to include every category");
    };
    let path = ctx.path(IGNORE_FILE);
    write_ignore(&path, &selected)?;
    display_feedback(&format!("File created: {IGNORE_FILE}"));
    println!(".gitignore file created successfully with selected patterns.");
    Ok(())
}

pub fn all_categories() -> Vec<String> {
    CATALOG.iter().map(|(name, _)| (*name).to_string()).collect()
}

/// Ask `prompt` which categories to include.
pub fn select_categories(prompt: &dyn MultiSelect) -> Result<Vec<String>> {
    let names: Vec<&str> = CATALOG.iter().map(|(name, _)| *name).collect();
    let chosen = prompt.select(
        "Select the patterns you want to include in your .gitignore:",
        &names,
    )?;
    Ok(chosen)
}

/// Render the ignore file for `selected`.
///
/// Categories appear in catalog order and at most once each, regardless of
/// the order or repetition of `selected`. Unknown names are skipped.
pub fn render(selected: &[String]) -> String {
    let mut content = format!("{PREAMBLE}\n\n");
    for (name, patterns) in CATALOG {
        if selected.iter().any(|s| s == name) {
            content.push_str(&format!("# {}\n{patterns}\n\n", capitalize(name)));
        }
    }
    content.trim().to_string()
}

fn write_ignore(path: &Path, selected: &[String]) -> Result<()> {
    debug!(path = %path.display(), categories = ?selected, "writing ignore file");
    fs::write(path, render(selected))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
