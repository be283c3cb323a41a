use crate::cli::support::{waygraph, write_campus};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    waygraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waygraph"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("campus"))
        .stdout(predicate::str::contains("tasks"));
}

#[test]
fn test_version_flag() {
    waygraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waygraph"));
}

#[test]
fn test_no_command_prints_banner() {
    waygraph()
        .assert()
        .success()
        .stdout(predicate::str::contains("waygraph --help"));
}

#[test]
fn test_subcommand_help() {
    waygraph()
        .args(["campus", "route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest walking route"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    waygraph()
        .args(["--format", "yaml", "tasks", "sort", "x.toml"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    let output = waygraph()
        .args(["--format", "json", "frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    waygraph()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "campus", "buildings"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    let config = dir.path().join("settings.toml");
    std::fs::write(
        &config,
        "[campus]\nbuildings = \"buildings.csv\"\npaths = \"paths.csv\"\n[output]\nprecision = 1\n",
    )
    .unwrap();

    waygraph()
        .env("WAYGRAPH_CONFIG", &config)
        .args(["campus", "route", "CSE", "MGH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total cost: 10.5\n"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args([
            "--verbose",
            "campus",
            "--buildings",
            "buildings.csv",
            "--paths",
            "paths.csv",
            "buildings",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CSE: Computer Science"))
        .stderr(predicate::str::contains("campus_built"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    waygraph()
        .args(["--quiet", "tasks", "sort", "does-not-exist.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
