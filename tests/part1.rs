use std::{env, fs, process};

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let cases = [
        ("80871224585914546619083218645595", "24176176"),
        ("19617804207202209144916044189917", "73745418"),
        ("69317163492948606335995924319873", "52432133"),
    ];
    for (input, expect) in cases {
        let mut cmd = Command::cargo_bin("part1").unwrap();
        cmd.write_stdin(format!("{}\n", input));
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(expect))
            .stderr(predicate::str::contains("Phase 100...\n"));
    }
}

#[test]
fn part1_reads_given_file() {
    let input_path = env::temp_dir().join(format!("fft_part1_input_{}.txt", process::id()));
    fs::write(&input_path, "80871224585914546619083218645595\n").unwrap();

    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg(&input_path);
    let assert = cmd.assert();
    fs::remove_file(&input_path).unwrap();
    assert.success().stdout(predicate::str::contains("24176176"));
}

#[test]
fn part1_rejects_invalid_signal() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.write_stdin("1234x678\n");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid character(x)"));
}

#[test]
fn part1_fails_without_input() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.write_stdin("");
    cmd.assert().failure().stdout(predicate::str::is_empty());
}
