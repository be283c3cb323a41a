use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for waygraph with no ambient configuration
pub fn waygraph() -> Command {
    let mut cmd = cargo_bin_cmd!("waygraph");
    cmd.env_remove("WAYGRAPH_CONFIG")
        .env_remove("WAYGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub const BUILDINGS: &str = "\
shortName,longName,x,y
CSE,Computer Science,0,0
MGH,Mary Gates Hall,10,0
ODG,Odegaard Library,0,20
ISO,Isolated Annex,99,99
";

pub const PATHS: &str = "\
x1,y1,x2,y2,distance
0,0,5,0,5
5,0,10,0,5.5
0,0,0,20,20
";

/// Write the sample campus files into `dir`
pub fn write_campus(dir: &Path) {
    fs::write(dir.join("buildings.csv"), BUILDINGS).unwrap();
    fs::write(dir.join("paths.csv"), PATHS).unwrap();
}

pub const TASKS: &str = r#"
[[task]]
name = "build"
description = "Compile everything"
team = "core"

[[task]]
name = "design"
description = "Sketch the schema"
team = "core"

[[task]]
name = "test"
description = "Run the suite"
team = "qa"

[[dependency]]
before = "design"
after = "build"

[[dependency]]
before = "build"
after = "test"

[[dependency]]
before = "design"
after = "test"
"#;

pub const CYCLIC_TASKS: &str = r#"
[[task]]
name = "a"
[[task]]
name = "b"
[[task]]
name = "c"

[[dependency]]
before = "a"
after = "b"
[[dependency]]
before = "b"
after = "c"
[[dependency]]
before = "c"
after = "b"
"#;
