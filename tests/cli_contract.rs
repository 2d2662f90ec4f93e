//! CLI contract shared by the three variant binaries: exit codes, the
//! one-line-per-worker diagnostic output, and the final total line.

use assert_cmd::Command;

const BINARIES: &[&str] = &["contend-race", "contend-mutex", "contend-local"];

fn cmd(bin: &str) -> Command {
    Command::cargo_bin(bin).unwrap()
}

#[test]
fn missing_thread_count_exits_one_with_no_output() {
    for bin in BINARIES {
        cmd(bin).assert().failure().code(1).stdout("");
    }
}

#[test]
fn zero_thread_count_exits_one_with_no_output() {
    for bin in BINARIES {
        cmd(bin).arg("0").assert().failure().code(1).stdout("");
    }
}

#[test]
fn negative_thread_count_exits_one() {
    for bin in BINARIES {
        cmd(bin).arg("-2").assert().failure().code(1).stdout("");
    }
}

#[test]
fn non_numeric_thread_count_exits_one() {
    for bin in BINARIES {
        cmd(bin).arg("four").assert().failure().code(1).stdout("");
    }
}

#[test]
fn absurd_thread_count_exits_one() {
    for bin in BINARIES {
        cmd(bin).arg("1000000").assert().failure().code(1).stdout("");
    }
}

#[test]
fn synchronized_binaries_report_exact_total() {
    for bin in ["contend-mutex", "contend-local"] {
        let assert = cmd(bin)
            .args(["4", "--total-count", "10000"])
            .assert()
            .success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines.len(), 5, "{bin}: 4 worker lines plus the total");
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("worker ")).count(),
            4,
            "{bin}"
        );
        assert_eq!(*lines.last().unwrap(), "final total: 10000", "{bin}");
    }
}

#[test]
fn race_binary_reports_bounded_total() {
    let assert = cmd("contend-race")
        .args(["4", "--total-count", "10000"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.iter().filter(|l| l.starts_with("worker ")).count(), 4);
    let total: u64 = lines
        .last()
        .unwrap()
        .strip_prefix("final total: ")
        .unwrap()
        .parse()
        .unwrap();
    assert!(total <= 10_000);
}

#[test]
fn single_thread_race_is_exact_end_to_end() {
    let assert = cmd("contend-race")
        .args(["1", "--total-count", "10000"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().last().unwrap(), "final total: 10000");
}
