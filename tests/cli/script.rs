use crate::cli::support::waygraph;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SCRIPT: &str = "\
# two routes from a to c
CreateGraph g
AddNode g a
AddNode g b
AddNode g c
AddEdge g a b 1
AddEdge g b c 2
AddEdge g a c 5
FindPath g a c
FindPath g c a
";

const EXPECTED: &str = "\
# two routes from a to c
created graph g
added node a to g
added node b to g
added node c to g
added edge 1.000 from a to b in g
added edge 2.000 from b to c in g
added edge 5.000 from a to c in g
path from a to c:
a to b with weight 1.000
b to c with weight 2.000
total cost: 3.000
path from c to a:
no path found
";

#[test]
fn test_script_from_stdin() {
    waygraph()
        .arg("script")
        .write_stdin(SCRIPT)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_script_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.script");
    fs::write(&path, SCRIPT).unwrap();

    waygraph()
        .arg("script")
        .arg(&path)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_script_errors_continue() {
    waygraph()
        .arg("script")
        .write_stdin("ListNodes nope\nCreateGraph g\nListNodes g\n")
        .assert()
        .success()
        .stdout("error: unknown graph: nope\ncreated graph g\ng contains:\n");
}

#[test]
fn test_script_missing_file() {
    let dir = tempdir().unwrap();
    waygraph()
        .arg("script")
        .arg(dir.path().join("absent.script"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_script_json() {
    let output = waygraph()
        .args(["--format", "json", "script"])
        .write_stdin("CreateGraph g\nAddNode g\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["commands"], 2);
    assert_eq!(json["failures"], 1);
    assert_eq!(json["output"][0], "created graph g");
}
