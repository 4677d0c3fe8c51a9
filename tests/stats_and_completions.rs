use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = "0 @I1@ INDI\n\
1 NAME John /Smith/\n\
1 FAMS @F1@\n\
0 @I2@ INDI\n\
1 NAME Mary /Jones/\n\
0 @F1@ FAM\n\
1 HUSB @I1@\n\
1 CHIL @I2@\n";

#[test]
fn stats_prints_record_and_link_counts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.ged");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("stats").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| Persons"))
        .stdout(predicate::str::contains("| 2"))
        .stdout(predicate::str::contains("| Families"))
        .stdout(predicate::str::contains("| Parent links"))
        .stdout(predicate::str::contains("| Child links"));
}

#[test]
fn stats_without_file_exits_2() {
    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("stats");
    cmd.assert().code(2).stderr(predicate::str::contains("No input file"));
}

#[test]
fn completions_emit_a_script() {
    let mut cmd = Command::cargo_bin("gedtree").unwrap();
    cmd.arg("completions").arg("bash");
    cmd.assert().success().stdout(predicate::str::contains("gedtree"));
}
