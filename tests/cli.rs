//! End-to-end checks for the precondition gate
//!
//! These run the real binary; the `.git` probe fires before any prompt,
//! network call, or filesystem write, so no input needs to be scripted.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn refuses_to_run_inside_an_existing_repository() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();

    Command::cargo_bin("gitlift")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already a Git repository!"));

    // The probe must run before any side effect.
    assert!(!dir.path().join(".gitignore").exists());
}

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("gitlift")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub repository"));
}
