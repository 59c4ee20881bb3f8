//! CLI integration tests
//!
//! These stay off the network: they exercise argument parsing, config
//! discovery, pre-request validation, and the pure token check.

use assert_cmd::Command;
use predicates::prelude::*;

fn gitfolio() -> Command {
    Command::cargo_bin("gitfolio").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    gitfolio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("token"));
}

#[test]
fn test_stats_without_username_fails_before_any_request() {
    let temp = tempfile::tempdir().unwrap();
    gitfolio()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("VALIDATION_ERROR"));
}

#[test]
fn test_generate_rejects_blank_username() {
    let temp = tempfile::tempdir().unwrap();
    gitfolio()
        .current_dir(temp.path())
        .args(["generate", "--username", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("VALIDATION_ERROR"));
}

#[test]
fn test_generate_with_broken_config_reports_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("gitfolio.toml"), "not valid toml [").unwrap();

    gitfolio()
        .current_dir(temp.path())
        .args(["generate", "--username", "octocat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_PARSE_ERROR"));
}

#[test]
fn test_explicit_config_path_must_exist() {
    let temp = tempfile::tempdir().unwrap();
    gitfolio()
        .current_dir(temp.path())
        .args(["stats", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_PARSE_ERROR"));
}

#[test]
fn test_token_valid_fine_grained() {
    let token = format!("github_pat_{}_{}", "a".repeat(22), "b".repeat(59));
    gitfolio()
        .args(["token", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid (fine-grained)"));
}

#[test]
fn test_token_valid_classic() {
    let token = "x".repeat(30);
    gitfolio()
        .args(["token", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid (classic)"));
}

#[test]
fn test_token_invalid_short() {
    gitfolio()
        .args(["token", "tooshort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid"));
}

#[test]
fn test_token_json_output() {
    gitfolio()
        .args(["token", "tooshort", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\":false"));
}
