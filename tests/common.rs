use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn mazegraph() -> Command {
    cargo_bin_cmd!("mazegraph")
}

/// A -> B (2), B -> C (3)
#[allow(dead_code)]
pub const ABC_GRAPH: &str = r#"
vertices = ["A", "B", "C"]

[[edges]]
from = "A"
to = "B"
weight = 2

[[edges]]
from = "B"
to = "C"
weight = 3
"#;

/// Write `content` to `dir/name` and return the full path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test document");
    path
}

/// An open maze of the given size without a `default_weight`
#[allow(dead_code)]
pub fn open_maze(width: usize, height: usize) -> String {
    format!("width = {}\nheight = {}\n", width, height)
}
