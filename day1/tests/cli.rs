use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_both_parts() {
    let input = input_file("two1nine\neigh7twothree\nabcone2threexyz\n");
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg(input.path());
    cmd.assert()
        .success()
        .stdout("part one: 110\npart two: 115\n");
}

#[test]
fn same_input_gives_same_output() {
    let input = input_file("1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n");
    let first = Command::cargo_bin("day1")
        .unwrap()
        .arg(input.path())
        .output()
        .unwrap();
    let second = Command::cargo_bin("day1")
        .unwrap()
        .arg(input.path())
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout, b"part one: 142\npart two: 142\n");
}

#[test]
fn line_without_digit_aborts() {
    let input = input_file("1abc2\neightwothree\n");
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg(input.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2 has no digit"));
}

#[test]
fn missing_file_aborts() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("no/such/calibration.txt");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read calibration document"));
}

#[test]
fn requires_input_path() {
    Command::cargo_bin("day1").unwrap().assert().failure();
}
