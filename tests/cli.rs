use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_in(cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rulelint"))
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run rulelint")
}

fn run(repo: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rulelint"))
        .arg("--repo-root")
        .arg(repo)
        .args(extra)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run rulelint")
}

fn write(repo: &Path, rel: &str, content: &str) {
    let p = repo.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

#[test]
fn empty_tree_succeeds() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::create_dir_all(dir.path().join("configs")).unwrap();
    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Files checked: 0"));
    assert!(stdout.contains("✓ All rule files are valid"));
}

#[test]
fn scalar_paths_exits_one() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    write(dir.path(), "configs/x/rules/core.md", "---\npaths: \"**/*.ts\"\n---\n");
    write(dir.path(), "configs/x/rules/misc.md", "# Misc\n");
    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✗ configs/x/rules/core.md: 'paths' must be an array"));
    assert!(stdout.contains("⚠ configs/x/rules/misc.md: no frontmatter found"));
    assert!(stdout.contains("Files checked: 2"));
    assert!(stdout.lines().any(|l| l == "Errors: 1"));
    assert!(stdout.lines().any(|l| l == "Warnings: 1"));
    assert!(!stdout.contains("All rule files are valid"));
}

#[test]
fn warnings_alone_exit_zero_in_json() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    write(dir.path(), "configs/x/rules/misc.md", "# Misc\n");
    write(dir.path(), "configs/CLAUDE.md", "# Project\n");
    let out = run(dir.path(), &["--output", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["summary"]["files"], 2);
    assert_eq!(report["summary"]["warnings"], 1);
    assert_eq!(report["diagnostics"][0]["file"], "configs/x/rules/misc.md");
}

#[test]
fn malformed_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("rulelint.toml"), "root = [").unwrap();
    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid config"));
}

#[test]
fn finds_repo_root_from_nested_dir() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    write(dir.path(), "configs/x/rules/core.md", "---\npaths: \"**/*.ts\"\n---\n");
    let out = run_in(&dir.path().join("configs/x"));
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✗ configs/x/rules/core.md: 'paths' must be an array"));
    assert!(stdout.contains("Files checked: 1"));
}
