//! # ShellKit Run Integration Tests
//!
//! File: cli/tests/run.rs
//!
//! `shellkit run`, `spawn` and `wait`. Everything that needs `sh` is Unix-only.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[cfg(unix)]
#[test]
fn test_run_echoes_stdout() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["run", "echo", "hello from child"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from child"));
}

#[cfg(unix)]
#[test]
fn test_run_quiet_suppresses_stdout() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["run", "--quiet", "echo", "hidden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hidden").not());
}

#[cfg(unix)]
#[test]
fn test_run_single_string_is_split() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["run", "echo split me"])
        .assert()
        .success()
        .stdout(predicate::str::contains("split me"));
}

#[cfg(unix)]
#[test]
fn test_run_passes_exit_code_through() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["run", "--", "sh", "-c", "echo oops >&2; exit 3"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("oops"))
        .stderr(predicate::str::contains("exit code 3"));
}

#[cfg(unix)]
#[test]
fn test_run_in_directory() {
    let dir = tempdir().unwrap();
    let work = dir.path().join("work");
    std::fs::create_dir(&work).unwrap();
    std::fs::write(work.join("marker.txt"), "").unwrap();

    plain_cmd(dir.path())
        .arg("run")
        .arg("--in")
        .arg(&work)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker.txt"));
}

#[test]
fn test_run_missing_program_reports_spawn_failure() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["run", "shellkit-no-such-program-here"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start"));
}

#[cfg(unix)]
#[test]
fn test_spawn_prints_pid() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path())
        .args(["spawn", "sleep", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn test_wait() {
    let dir = tempdir().unwrap();
    plain_cmd(dir.path()).args(["wait", "5"]).assert().success();
}
