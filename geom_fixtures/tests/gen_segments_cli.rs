// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run the `gen-segments` binary and check what reaches stdout, stderr, and the exit
//! code. Uses `assert_cmd`, since stdout of a separate process can't be captured from
//! inside a unit test.

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use regex::Regex;

const LINE_PATTERN: &str = r"^ROUND\(SEGMENT\(POINT\((\d+\.\d+) (\d+\.\d+)\) POINT\((\d+\.\d+) (\d+\.\d+)\)\) (\d+\.\d+)\)$";

fn gen_segments() -> Command { Command::cargo_bin("gen-segments").unwrap() }

fn stdout_lines(args: &[&str]) -> Vec<String> {
    let output = gen_segments().args(args).ok().unwrap();
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn fraction_digits(it: &str) -> usize { it.split('.').nth(1).map_or(0, str::len) }

/// Check grammar, ranges and decimal places of every line.
fn assert_well_formed(lines: &[String]) {
    let pattern = Regex::new(LINE_PATTERN).unwrap();
    for line in lines {
        let captures = pattern
            .captures(line)
            .unwrap_or_else(|| panic!("malformed line: {line}"));
        let field = |index: usize| captures.get(index).unwrap().as_str();

        for x in [field(1), field(3)] {
            let value: f64 = x.parse().unwrap();
            assert!((0.0..=1.0).contains(&value), "{line}");
            assert!(fraction_digits(x) <= 2, "{line}");
        }
        for y in [field(2), field(4)] {
            let value: f64 = y.parse().unwrap();
            assert!((0.0..=1.0).contains(&value), "{line}");
            assert!(fraction_digits(y) <= 5, "{line}");
        }
        let r = field(5);
        let value: f64 = r.parse().unwrap();
        assert!((0.0001..=0.01).contains(&value), "{line}");
        assert!(fraction_digits(r) <= 5, "{line}");
    }
}

#[test]
fn default_prints_1000_well_formed_lines() {
    let lines = stdout_lines(&[]);
    assert_eq!(lines.len(), 1_000);
    assert_well_formed(&lines);
}

#[test]
fn single_segment() {
    let lines = stdout_lines(&["--count", "1"]);
    assert_eq!(lines.len(), 1);
    assert_well_formed(&lines);
}

#[test]
fn zero_segments_prints_nothing() {
    gen_segments()
        .args(["--count", "0"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn seeded_runs_are_identical() {
    let lhs = stdout_lines(&["-c", "25", "-s", "99"]);
    let rhs = stdout_lines(&["-c", "25", "-s", "99"]);
    assert_eq!(lhs, rhs);
}

#[test]
fn unseeded_runs_differ_but_share_the_grammar() {
    let lhs = stdout_lines(&["-c", "25"]);
    let rhs = stdout_lines(&["-c", "25"]);
    assert_ne!(lhs, rhs);
    assert_well_formed(&lhs);
    assert_well_formed(&rhs);
}

#[test]
fn negative_count_fails_before_output() {
    let output = gen_segments().args(["--count", "-3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative"), "{stderr}");
}

#[test]
fn non_integer_count_is_a_usage_error() {
    let output = gen_segments().args(["--count", "many"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("segments.txt");
    gen_segments()
        .args(["-c", "12", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 12);
    assert_well_formed(&lines);
}

#[test]
fn logging_goes_to_log_file_not_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = gen_segments()
        .current_dir(dir.path())
        .args(["-c", "1001", "--enable-logging"])
        .ok()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1_001);

    let log = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
    assert!(log.contains("gen-segments done"), "{log}");
    assert!(log.contains("renderer only loads the first 1000"), "{log}");
}
