use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = "0 @I1@ INDI\n\
1 NAME John /Smith/\n\
0 TRLR\n";

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("tree.ged");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn unresolved_root_exits_3_without_graph_output() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());

    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert").arg(&input).arg("--root").arg("I99999");
    cmd.assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("I99999"));
}

#[test]
fn malformed_root_exits_2_before_reading_input() {
    // The input path does not even exist; the root pattern fails first
    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert").arg("/nonexistent/tree.ged").arg("--root").arg("X17");
    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("X17"));
}

#[test]
fn conflicting_policy_flags_exit_2() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());

    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert").arg(&input).arg("--children").arg("--blood");
    cmd.assert().code(2).stdout(predicate::str::is_empty());
}

#[test]
fn missing_input_exits_2() {
    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert");
    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No input file"));
}

#[test]
fn unreadable_input_exits_1() {
    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert").arg("/nonexistent/tree.ged");
    cmd.assert().code(1).stdout(predicate::str::is_empty());
}

#[test]
fn success_exits_0() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());

    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("convert").arg(&input).arg("--root").arg("I1");
    cmd.assert().success();
}
