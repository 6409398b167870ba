//! # ShellKit Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! Drives `shellkit ask` through stdin.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_ask_empty_answer_confirms() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["ask", "Deploy now?"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("Deploy now? [Y/n] true\n");
}

#[test]
fn test_ask_lowercase_y_confirms_and_other_input_declines() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["ask", "Deploy now?"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("true\n"));

    plain_cmd(dir.path())
        .args(["ask", "Deploy now?"])
        .write_stdin("nope\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("false\n"));
}

#[test]
fn test_ask_with_default() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["ask", "Target", "--default", "prod"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("Target Default=PROD PROD\n");

    plain_cmd(dir.path())
        .args(["ask", "Target", "--default", "prod"])
        .write_stdin("  staging \n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("STAGING\n"));
}

#[test]
fn test_ask_closed_stdin_is_fatal() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["ask", "Deploy now?"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Terminated by user"));
}
