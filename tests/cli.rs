// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the commit-guard binary.

use assert_cmd::Command;
use git2::{Repository, Signature};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const GOOD: &str = "Fix bug\n\nThis fixes the bug.\n\nSigned-off-by: A <a@x.com>\n";

/// A command isolated from the caller's configuration and environment.
fn guard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commit-guard").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("RUST_LOG")
        .env_remove("GITHUB_TOKEN")
        .env_remove("COMMIT_GUARD_SUB_LIMIT")
        .env_remove("COMMIT_GUARD_DESC_LIMIT")
        .env_remove("COMMIT_GUARD_CHECK_BLANK_LINE")
        .env_remove("COMMIT_GUARD_ENABLE")
        .env_remove("COMMIT_GUARD_DISABLE")
        .env_remove("COMMIT_GUARD_JOBS")
        .arg("--no-color");
    cmd
}

fn write_message(dir: &Path, message: &str) -> String {
    let path = dir.join("COMMIT_EDITMSG");
    std::fs::write(&path, message).unwrap();
    path.display().to_string()
}

fn json_lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn file_with_well_formed_message_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_message(dir.path(), GOOD);

    guard(dir.path())
        .args(["file", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 commit(s) passed validation."));
}

#[test]
fn file_without_description_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_message(dir.path(), "fix bug\n");

    guard(dir.path())
        .args(["--enable", "subject-imperative-mood", "file", &path])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("description-present"))
        .stdout(predicate::str::contains("subject-imperative-mood"))
        .stdout(predicate::str::contains("signoff-present").not());
}

#[test]
fn stdin_message() {
    let dir = TempDir::new().unwrap();

    guard(dir.path())
        .args(["file", "-"])
        .write_stdin(GOOD)
        .assert()
        .success();
}

#[test]
fn check_blank_line_toggle() {
    let dir = TempDir::new().unwrap();
    let path = write_message(dir.path(), "Fix bug\nThis fixes it.\n");

    guard(dir.path())
        .args(["file", &path])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("subject-body-separator"));

    guard(dir.path())
        .args(["--check-blank-line", "false", "file", &path])
        .assert()
        .success();
}

#[test]
fn description_limit_from_environment() {
    let dir = TempDir::new().unwrap();
    let message = format!("Fix bug\n\n{}\n", "x".repeat(80));
    let path = write_message(dir.path(), &message);

    guard(dir.path())
        .args(["file", &path])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("description-line-length (line 3)"));

    guard(dir.path())
        .env("COMMIT_GUARD_DESC_LIMIT", "100")
        .args(["file", &path])
        .assert()
        .success();
}

#[test]
fn config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("commit-guard.toml"),
        "[rules.enabled]\nsignoff-present = true\n",
    )
    .unwrap();
    let path = write_message(dir.path(), "Fix bug\n\nBody without trailer.\n");

    guard(dir.path())
        .args(["file", &path])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("signoff-present"));
}

#[test]
fn unknown_rule_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_message(dir.path(), GOOD);

    guard(dir.path())
        .args(["--enable", "no-such-rule", "file", &path])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule: 'no-such-rule'"));
}

#[test]
fn zero_limit_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("strict.toml");
    std::fs::write(&config, "[rules]\nsub_limit = 0\n").unwrap();
    let path = write_message(dir.path(), GOOD);

    guard(dir.path())
        .args(["--config", config.to_str().unwrap(), "file", &path])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sub_limit"));
}

#[test]
fn unknown_config_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("commit-guard.toml"),
        "[rules]\ndesc-limit = 100\n",
    )
    .unwrap();
    let path = write_message(dir.path(), GOOD);

    guard(dir.path())
        .args(["file", &path])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("desc-limit"));
}

#[test]
fn out_of_range_page_size_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("commit-guard.toml"),
        "[github]\nper_page = 250\n",
    )
    .unwrap();

    guard(dir.path())
        .env("GITHUB_TOKEN", "t")
        .args(["pr", "--repo", "octo/repo", "--pr-number", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("github.per_page"));
}

#[test]
fn pr_without_token_is_fatal() {
    let dir = TempDir::new().unwrap();

    guard(dir.path())
        .args(["pr", "--repo", "octo/repo", "--pr-number", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn range_reports_failing_commits_in_order() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("A Author", "a@x.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let mut shas = Vec::new();
    let mut parent: Option<git2::Oid> = None;
    for message in ["Initial commit", GOOD, "fix it", GOOD] {
        let parent_commit = parent.map(|oid| repo.find_commit(oid).unwrap());
        let parents: Vec<&git2::Commit<'_>> = parent_commit.iter().collect();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
        shas.push(oid.to_string());
        parent = Some(oid);
    }

    let output = guard(dir.path())
        .args(["--format", "json", "--jobs", "2", "range", "HEAD~3..HEAD"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 4);
    let emitted: Vec<&str> = lines[..3]
        .iter()
        .map(|line| line["sha"].as_str().unwrap())
        .collect();
    assert_eq!(
        emitted,
        vec![shas[1].as_str(), shas[2].as_str(), shas[3].as_str()]
    );

    let summary = &lines[3]["summary"];
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["failed"], 1);
    assert_eq!(summary["failing_shas"], serde_json::json!([shas[2]]));
}

#[test]
fn rules_listing() {
    let dir = TempDir::new().unwrap();

    guard(dir.path())
        .args(["--enable", "signoff-present", "--format", "json", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"signoff-present""#));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    guard(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("commit-guard.toml").exists());

    guard(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    guard(dir.path()).args(["init", "--force"]).assert().success();
}
