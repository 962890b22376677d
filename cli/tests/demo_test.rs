//! Integration tests for the `growable-demo` binary.

mod common;

use common::{check_stderr, check_stdout, demo};
use expect_test::expect;
use predicates::prelude::*;

// ============================================================================
// Success tests with full output verification
// ============================================================================

#[test]
fn builtin_scenario() {
    check_stdout(&[], expect!["50 10 20 30 40\n"]);
}

#[test]
fn builtin_scenario_reversed() {
    check_stdout(&["--reverse"], expect!["40 30 20 10 50\n"]);
}

#[test]
fn custom_values() {
    check_stdout(&["a", "b", "c"], expect!["a b c\n"]);
}

#[test]
fn custom_separator() {
    check_stdout(&["a", "b", "--separator", ", "], expect!["a, b\n"]);
}

#[test]
fn insert_and_remove() {
    check_stdout(
        &["a", "b", "c", "--insert", "0:z", "--insert", "4:end", "--remove", "1"],
        expect!["z b c end\n"],
    );
}

#[test]
fn growth_past_default_capacity() {
    let values: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let args: Vec<&str> = values.iter().map(String::as_str).collect();
    check_stdout(
        &args,
        expect!["0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19\n"],
    );
}

#[test]
fn debug_logging_goes_to_stderr() {
    demo()
        .env("RUST_LOG", "debug")
        .args(["x", "--insert", "0:y"])
        .assert()
        .success()
        .stdout("y x\n")
        .stderr(predicate::str::contains("inserted"));
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn remove_from_empty_array() {
    check_stderr(
        &["--remove", "0", "--no-color"],
        expect!["error: array is empty\n"],
    );
    demo().args(["--remove", "0"]).assert().failure().code(1);
}

#[test]
fn insert_out_of_range() {
    check_stderr(
        &["a", "--insert", "3:x", "--no-color"],
        expect!["error: index 3 out of range for array of length 1\n"],
    );
}

#[test]
fn remove_out_of_range() {
    demo()
        .args(["a", "b", "--remove", "2", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("index 2 out of range"));
}

#[test]
fn malformed_insertion() {
    demo()
        .args(["--insert", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected INDEX:VALUE"));
}
