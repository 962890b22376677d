//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the demo binary.
pub fn demo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_growable-demo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the demo and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], expected: Expect) {
    let output = demo()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}

/// Run the demo and check that stderr matches the expected output.
pub fn check_stderr(args: &[&str], expected: Expect) {
    let output = demo()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    expected.assert_eq(&stderr);
}
