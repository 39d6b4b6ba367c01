use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::{contains, starts_with};

fn base_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("doctest-runner"))
}

#[test]
fn help_prints_usage() {
    base_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--manifest-path"))
        .stdout(contains("--package"))
        .stdout(contains("--no-echo"));
}

#[test]
fn unknown_flag_is_usage_error() {
    base_cmd().arg("--frobnicate").assert().failure().code(2);
}

#[cfg(unix)]
#[test]
fn passing_command_exits_zero_and_echoes() {
    base_cmd()
        .args(["--cargo", "true"])
        .assert()
        .success()
        .code(0)
        .stderr(starts_with("+ true test --doc\n"));
}

#[cfg(unix)]
#[test]
fn failing_command_propagates_code_silently() {
    base_cmd()
        .args(["--cargo", "false"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error").not());
}

#[cfg(unix)]
#[test]
fn no_echo_suppresses_trace_line() {
    base_cmd()
        .args(["--cargo", "true", "--no-echo"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn echo_includes_forwarded_options() {
    base_cmd()
        .args(["--cargo", "true", "-p", "floats", "--", "--nocapture"])
        .assert()
        .success()
        .stderr(contains("+ true test --doc -p floats -- --nocapture"));
}

#[test]
fn missing_command_is_not_found() {
    base_cmd()
        .args(["--cargo", "doctest-runner-no-such-program-7f3a"])
        .assert()
        .failure()
        .code(127)
        .stderr(contains("doctest-runner-no-such-program-7f3a: command not found"));
}

#[test]
fn missing_command_json_envelope() {
    let output = base_cmd()
        .args([
            "--cargo",
            "doctest-runner-no-such-program-7f3a",
            "--no-echo",
            "--output",
            "json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(127));

    let report: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(report["ok"], false);
    assert_eq!(report["error"]["code"], "command_not_found");
    assert_eq!(report["error"]["exit_code"], 127);
}
