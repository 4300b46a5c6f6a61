//! Shared integration-test harness for running the `sitegen` binary
//! against temporary site directories.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Runs the `sitegen` binary with the given arguments.
#[must_use]
pub fn run_sitegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitegen"))
        .args(args)
        .output()
        .expect("failed to run sitegen")
}

/// Runs the `sitegen` binary with `dir` as its working directory.
///
/// Exercises the default `--site-dir .` behavior.
#[must_use]
pub fn run_sitegen_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitegen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run sitegen")
}

/// Creates the three hand-maintained site assets in `dir`.
pub fn touch_assets(dir: &Path) {
    for name in sitegen::structure::REQUIRED_FILES {
        fs::write(dir.join(name), "placeholder").expect("failed to create asset");
    }
}

/// Stdout as UTF-8.
#[must_use]
pub fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as UTF-8.
#[must_use]
pub fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Reads and parses a JSON file.
#[must_use]
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()))
}
