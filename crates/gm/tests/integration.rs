//! End-to-end tests for the `gm` binary.
//!
//! Every test runs in a fresh temporary working directory with the global
//! configuration redirected through `GITMORPH_CONFIG_DIR`.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
    work: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
        }
    }

    fn in_repo() -> Self {
        let sandbox = Self::new();
        let status = StdCommand::new("git")
            .args(["init", "-q"])
            .current_dir(sandbox.work.path())
            .status()
            .expect("git must be installed");
        assert!(status.success());
        sandbox
    }

    fn gm(&self) -> Command {
        let mut cmd = Command::cargo_bin("gm").unwrap();
        cmd.current_dir(self.work.path())
            .env("GITMORPH_CONFIG_DIR", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG");
        cmd
    }

    fn global_config(&self) -> std::path::PathBuf {
        self.home.path().join("config.json")
    }

    fn work(&self) -> &Path {
        self.work.path()
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_prints_usage() {
    Sandbox::new()
        .gm()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_verb_is_rejected() {
    Sandbox::new().gm().arg("teleport").assert().failure();
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_set_view_delete_global() {
    let sb = Sandbox::new();

    sb.gm()
        .args(["config", "--set", "editor", "vim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Configuration updated: editor = vim"));
    assert_eq!(
        read_json(&sb.global_config()),
        serde_json::json!({ "editor": "vim" })
    );

    sb.gm()
        .args(["config", "--view", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current configuration:"))
        .stdout(predicate::str::contains("\"editor\": \"vim\""));

    sb.gm()
        .args(["config", "--delete", "editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration key deleted: editor"));
    assert_eq!(read_json(&sb.global_config()), serde_json::json!({}));
}

#[test]
fn config_without_action_prints_hint() {
    let sb = Sandbox::new();
    sb.gm()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Use --set, --delete, or --view to manage configuration.",
        ));
    assert!(!sb.global_config().exists());
}

#[test]
fn config_local_outside_repository_is_reported() {
    let sb = Sandbox::new();
    sb.gm()
        .args(["config", "--local", "--set", "k", "v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: not a git repository"));
    assert!(!sb.work().join(".gitmorph.json").exists());
}

#[test]
fn config_local_inside_repository_is_written() {
    let sb = Sandbox::in_repo();
    sb.gm()
        .args(["config", "--local", "--set", "k", "v"])
        .assert()
        .success();
    assert_eq!(
        read_json(&sb.work().join(".gitmorph.json")),
        serde_json::json!({ "k": "v" })
    );
    assert!(!sb.global_config().exists());
}

#[test]
fn config_both_scopes_targets_global() {
    let sb = Sandbox::in_repo();
    sb.gm()
        .args(["config", "--global", "--local", "--set", "k", "v"])
        .assert()
        .success();
    assert!(sb.global_config().exists());
    assert!(!sb.work().join(".gitmorph.json").exists());
}

#[test]
fn config_malformed_document_is_fatal() {
    let sb = Sandbox::new();
    fs::write(sb.global_config(), "[1, 2").unwrap();
    sb.gm()
        .args(["config", "--view"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config file"));
    assert_eq!(fs::read_to_string(sb.global_config()).unwrap(), "[1, 2");
}

#[test]
fn config_actions_are_mutually_exclusive() {
    Sandbox::new()
        .gm()
        .args(["config", "--view", "--delete", "k"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Files in the working directory
// ---------------------------------------------------------------------------

#[test]
fn create_ignore_all_writes_every_category() {
    let sb = Sandbox::new();
    sb.gm()
        .args(["create-ignore", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: File created: .gitignore\n.gitignore file created successfully with selected patterns.\n",
        ));
    let content = fs::read_to_string(sb.work().join(".gitignore")).unwrap();
    assert!(content.starts_with("# GitMorph generated .gitignore\n\n# Node\n"));
    assert!(content.contains("# Images\n"));
    assert_eq!(content.matches("# Rust\n").count(), 1);
}

#[test]
fn todo_add_then_list() {
    let sb = Sandbox::new();
    sb.gm()
        .arg("todo")
        .assert()
        .success()
        .stdout(predicate::str::contains("No TODOs found."));

    sb.gm()
        .args(["todo", "--add", "write docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added TODO: write docs"));

    sb.gm()
        .args(["todo", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TODOs:\nTODO: write docs\n"));
}

#[test]
fn scaffold_node_creates_layout() {
    let sb = Sandbox::new();
    sb.gm()
        .args(["scaffold", "node"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "node project structure scaffolded successfully.",
        ));
    assert!(sb.work().join("src/index.js").is_file());
    assert!(sb.work().join("test/index.test.js").is_file());
}

#[test]
fn scaffold_unknown_template_changes_nothing() {
    let sb = Sandbox::new();
    sb.gm()
        .args(["scaffold", "cobol"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unsupported project type 'cobol'"));
    assert_eq!(fs::read_dir(sb.work()).unwrap().count(), 0);
}

#[test]
fn scaffold_empties_existing_files() {
    let sb = Sandbox::new();
    fs::write(sb.work().join("package.json"), r#"{"name":"x"}"#).unwrap();
    sb.gm().args(["scaffold", "node"]).assert().success();
    assert_eq!(
        fs::read_to_string(sb.work().join("package.json")).unwrap(),
        ""
    );
}

#[test]
fn config_empty_document_is_fatal() {
    let sb = Sandbox::new();
    fs::write(sb.global_config(), "").unwrap();
    sb.gm()
        .args(["config", "--view"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn docker_writes_dockerfile() {
    let sb = Sandbox::new();
    sb.gm().arg("docker").assert().success();
    let text = fs::read_to_string(sb.work().join("Dockerfile")).unwrap();
    assert!(text.starts_with("FROM node:14"));
}

// ---------------------------------------------------------------------------
// External commands
// ---------------------------------------------------------------------------

#[test]
fn search_without_matches_exits_zero() {
    let sb = Sandbox::new();
    fs::write(sb.work().join("notes.txt"), "hello\n").unwrap();
    sb.gm()
        .args(["search", "absent-needle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches found."));
}

#[test]
fn search_finds_matches() {
    let sb = Sandbox::new();
    fs::write(sb.work().join("notes.txt"), "hello world\n").unwrap();
    sb.gm()
        .args(["search", "-i", "HELLO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt:hello world"));
}

#[test]
fn benchmark_reports_each_run() {
    let sb = Sandbox::new();
    let assert = sb
        .gm()
        .args(["benchmark", "true", "--runs", "3"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Number of runs: 3"));
    assert_eq!(stdout.matches("Run ").count(), 3);
    assert!(stdout.contains("Average time:"));
}

#[test]
fn failing_command_exits_one_with_output() {
    let sb = Sandbox::new();
    sb.gm()
        .args(["blame", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: command failed"))
        .stderr(predicate::str::contains("Output:"));
}

#[test]
fn analyze_outside_repository_is_reported() {
    Sandbox::new()
        .gm()
        .arg("analyze")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Not a git repository"));
}

#[test]
fn hooks_add_list_remove() {
    let sb = Sandbox::in_repo();
    sb.gm()
        .args(["hooks", "--add", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hook pre-commit added successfully."));

    sb.gm()
        .args(["hooks", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available hooks:"))
        .stdout(predicate::str::contains("pre-commit\n"));

    sb.gm()
        .args(["hooks", "--remove", "pre-commit"])
        .assert()
        .success();
    assert!(!sb.work().join(".git/hooks/pre-commit").exists());

    sb.gm()
        .args(["hooks", "--remove", "pre-commit"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn hooks_unknown_name_is_reported() {
    let sb = Sandbox::in_repo();
    sb.gm()
        .args(["hooks", "--add", "pre-lunch"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown hook 'pre-lunch'"));
}

#[test]
fn completion_bash_prints_script() {
    Sandbox::new()
        .gm()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_gm()"));
}
