use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = "0 @I1@ INDI\n1 NAME Ann\n0 TRLR\n";

#[test]
fn convert_reports_counts_on_stderr() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.ged");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert").arg(&input);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Decoded 1 persons and 0 families"))
        .stderr(predicate::str::contains("Marked 1 persons"));
}

#[test]
fn quiet_suppresses_diagnostics_but_not_the_graph() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.ged");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("-q").arg("convert").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("digraph gedtree"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn quiet_does_not_silence_errors() {
    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("-q").arg("convert");
    cmd.assert().code(2).stderr(predicate::str::contains("No input file"));
}
