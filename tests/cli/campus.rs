use crate::cli::support::{waygraph, write_campus};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn campus_args<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "campus",
        "--buildings",
        "buildings.csv",
        "--paths",
        "paths.csv",
    ];
    args.extend_from_slice(rest);
    args
}

#[test]
fn test_route_human() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["route", "CSE", "MGH"]))
        .assert()
        .success()
        .stdout(
            "path from CSE to MGH:\n\
             (0, 0) to (5, 0) with weight 5.000\n\
             (5, 0) to (10, 0) with weight 5.500\n\
             total cost: 10.500\n",
        );
}

#[test]
fn test_route_reverse_direction() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["route", "MGH", "ODG"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("(5, 0) to (0, 0) with weight 5.000"))
        .stdout(predicate::str::ends_with("total cost: 30.500\n"));
}

#[test]
fn test_route_same_building() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["route", "ODG", "ODG"]))
        .assert()
        .success()
        .stdout("path from ODG to ODG:\ntotal cost: 0.000\n");
}

#[test]
fn test_route_disconnected_is_not_an_error() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["route", "CSE", "ISO"]))
        .assert()
        .success()
        .stdout("path from CSE to ISO:\nno path found\n");
}

#[test]
fn test_route_unknown_buildings_exit_code_3() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["route", "XYZ", "QQQ"]))
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown building: XYZ, QQQ"));
}

#[test]
fn test_route_unknown_building_json_envelope() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    let mut args = vec!["--format", "json"];
    args.extend(campus_args(&["route", "CSE", "NOPE"]));
    let output = waygraph()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "unknown_identifier");
    assert_eq!(json["error"]["names"], serde_json::json!(["NOPE"]));
}

#[test]
fn test_route_json() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    let mut args = vec!["--format", "json"];
    args.extend(campus_args(&["route", "CSE", "MGH"]));
    let output = waygraph()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["start"]["long_name"], "Computer Science");
    assert_eq!(json["path"]["total_cost"], 10.5);
    assert_eq!(json["path"]["segments"].as_array().unwrap().len(), 2);
}

#[test]
fn test_route_json_not_found() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    let mut args = vec!["--format", "json"];
    args.extend(campus_args(&["route", "ISO", "CSE"]));
    let output = waygraph()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert!(json.get("path").is_none());
}

#[test]
fn test_buildings_listing() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["buildings"]))
        .assert()
        .success()
        .stdout(
            "CSE: Computer Science\n\
             ISO: Isolated Annex\n\
             MGH: Mary Gates Hall\n\
             ODG: Odegaard Library\n",
        );
}

#[test]
fn test_data_files_from_local_config() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    fs::write(
        dir.path().join("waygraph.toml"),
        "[campus]\nbuildings = \"buildings.csv\"\npaths = \"paths.csv\"\n",
    )
    .unwrap();

    waygraph()
        .current_dir(dir.path())
        .args(["campus", "route", "CSE", "ODG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total cost: 20.000"));
}

#[test]
fn test_missing_data_files_is_usage_error() {
    let dir = tempdir().unwrap();

    waygraph()
        .current_dir(dir.path())
        .args(["campus", "buildings"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no buildings file given"));
}

#[test]
fn test_malformed_paths_file_exit_code_3() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    fs::write(
        dir.path().join("paths.csv"),
        "x1,y1,x2,y2,distance\n0,0,5,0,-5\n",
    )
    .unwrap();

    waygraph()
        .current_dir(dir.path())
        .args(campus_args(&["buildings"]))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("paths.csv line 2"));
}
