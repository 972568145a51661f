#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use rschedule::utils::table::strip_ansi;

pub fn rsch() -> Command {
    cargo_bin_cmd!("rschedule")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rschedule.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh database holding the seeded week
pub fn init_seeded(name: &str) -> String {
    let db_path = setup_test_db(name);
    rsch()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// stdout of a successful `list`, with the ANSI styling removed
pub fn list_output(db_path: &str, day: Option<&str>) -> String {
    let mut cmd = rsch();
    cmd.args(["--db", db_path, "list"]);
    if let Some(d) = day {
        cmd.args(["--day", d]);
    }
    let out = cmd.assert().success().get_output().stdout.clone();
    strip_ansi(&String::from_utf8_lossy(&out))
}

/// Position of `needle` in `hay`, panicking with context when absent
pub fn pos(hay: &str, needle: &str) -> usize {
    hay.find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in:\n{}", needle, hay))
}
