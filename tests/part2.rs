use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn part2_output_right_answer() {
    let cases = [
        ("03036732577212944063491565474664", "84462026"),
        ("02935109699940807407585447034323", "78725270"),
        ("03081770884921959731165446850517", "53553731"),
    ];
    for (input, expect) in cases {
        let mut cmd = Command::cargo_bin("part2").unwrap();
        cmd.write_stdin(format!("{}\n", input));
        cmd.assert()
            .success()
            .stdout(predicate::str::ends_with(format!("\n{}\n", expect)))
            .stdout(predicate::function(|out: &str| {
                // The whole signal, then the message.
                let lines = out.lines().collect::<Vec<_>>();
                lines.len() == 2
                    && lines[0].len() == input.len() * 10000
                    && lines[0].bytes().all(|b| b.is_ascii_digit())
            }))
            .stderr(predicate::str::starts_with("Phase 1...\n"))
            .stderr(predicate::str::ends_with("Phase 100...\n"));
    }
}

#[test]
fn part2_rejects_offset_out_of_signal() {
    // Offset 9999999 is past the end of a 320000 digits signal.
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.write_stdin("99999991234567890123456789012345\n");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Phase").not());
}

#[test]
fn part2_rejects_unterminated_line() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.write_stdin("03036732577212944063491565474664");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
