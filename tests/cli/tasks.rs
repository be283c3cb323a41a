use crate::cli::support::{waygraph, CYCLIC_TASKS, TASKS};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn task_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_sort_human() {
    let (_dir, path) = task_file(TASKS);

    waygraph()
        .args(["tasks", "sort"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "Task \"design\":\nDescription: Sketch the schema\nTeam: core\n\
             Task \"build\":\nDescription: Compile everything\nTeam: core\n\
             Task \"test\":\nDescription: Run the suite\nTeam: qa\n",
        );
}

#[test]
fn test_sort_json() {
    let (_dir, path) = task_file(TASKS);

    let output = waygraph()
        .args(["--format", "json", "tasks", "sort"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sorted"], true);
    let names: Vec<&str> = json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["design", "build", "test"]);
}

#[test]
fn test_sort_cycle_is_success() {
    let (_dir, path) = task_file(CYCLIC_TASKS);

    waygraph()
        .args(["tasks", "sort"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Cycle in dependencies, cannot be sorted!\n");
}

#[test]
fn test_sort_cycle_json() {
    let (_dir, path) = task_file(CYCLIC_TASKS);

    let output = waygraph()
        .args(["--format", "json", "tasks", "sort"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "sorted": false }));
}

#[test]
fn test_show_task() {
    let (_dir, path) = task_file(TASKS);

    waygraph()
        .args(["tasks", "show"])
        .arg(&path)
        .arg("test")
        .assert()
        .success()
        .stdout("Task \"test\":\nDescription: Run the suite\nTeam: qa\n");
}

#[test]
fn test_show_unknown_task() {
    let (_dir, path) = task_file(TASKS);

    waygraph()
        .args(["tasks", "show"])
        .arg(&path)
        .arg("deploy")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown task: deploy"));
}

#[test]
fn test_deps() {
    let (_dir, path) = task_file(TASKS);

    waygraph()
        .args(["tasks", "deps"])
        .arg(&path)
        .arg("design")
        .assert()
        .success()
        .stdout("Dependency: design -> build\nDependency: design -> test\n");

    waygraph()
        .args(["tasks", "deps"])
        .arg(&path)
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_deps_json() {
    let (_dir, path) = task_file(TASKS);

    let output = waygraph()
        .args(["--format", "json", "tasks", "deps"])
        .arg(&path)
        .arg("build")
        .output()
        .unwrap();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "before": "build", "after": "test" }])
    );
}

#[test]
fn test_invalid_task_file_exit_code_3() {
    let (_dir, path) = task_file("[[task]]\nname = \"a\"\n[[task]]\nname = \"a\"\n");

    waygraph()
        .args(["tasks", "sort"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate task 'a'"));
}
