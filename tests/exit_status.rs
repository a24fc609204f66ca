// tests/exit_status.rs

//! Verifies the drop-time summary and the process exit status by running
//! this test binary again as a child process.

use std::process::{Command, Output};
use unittest_checks::{check, check_eq, check_lt, ColorChoice, FailureCounter};

const CHILD_MODE_ENV: &str = "UNITTEST_CHECKS_CHILD_MODE";
const CHILD_COLOR_ENV: &str = "UNITTEST_CHECKS_CHILD_COLOR";

/// Does nothing unless started by `run_child`.
#[test]
fn child_session() {
    let Ok(mode) = std::env::var(CHILD_MODE_ENV) else {
        return;
    };
    let color: ColorChoice = std::env::var(CHILD_COLOR_ENV)
        .as_deref()
        .unwrap_or("never")
        .parse()
        .expect("valid color choice");
    let counter = FailureCounter::builder().color(color).build();
    match mode.as_str() {
        "fail" => {
            let (width, height): (u32, u32) = (64, 32);
            check_eq!(counter, width, height);
            check_lt!(counter, width, height);
            check!(counter, width > height);
        }
        "pass" => {
            check_eq!(counter, 1_u8, 1_u8);
        }
        "panic" => {
            check_eq!(counter, 1_u8, 1_u8);
            panic!("session body aborted");
        }
        _ => {}
    }
}

fn run_child(mode: &str) -> Output {
    run_child_colored(mode, "never")
}

fn run_child_colored(mode: &str, color: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["child_session", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MODE_ENV, mode)
        .env(CHILD_COLOR_ENV, color)
        .output()
        .expect("failed to run child session")
}

/// The harness may print a test name on the same line, so match the
/// summary text with its newline rather than whole lines.
fn summary_lines(output: &Output, summary: &str) -> usize {
    String::from_utf8_lossy(&output.stdout)
        .matches(&format!("{summary}\n"))
        .count()
}

/// Test that failures end the process with status 1 after one summary.
#[test]
fn test_failures_exit_nonzero() {
    let output = run_child("fail");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FAILED: width == height\n\tvalues were '64' and '32'\n"));
    assert!(stdout.contains("FAILED: width < height\n"));
    assert_eq!(stdout.matches("FAILED:").count(), 2);
    assert_eq!(summary_lines(&output, "ERRORS!"), 1);
    assert_eq!(summary_lines(&output, "OK"), 0);
}

/// Test that passing checks exit successfully after one summary.
#[test]
fn test_passes_exit_zero() {
    let output = run_child("pass");
    assert!(output.status.success());
    assert_eq!(summary_lines(&output, "OK"), 1);
    assert_eq!(summary_lines(&output, "ERRORS!"), 0);
}

/// Test that a counter with no checks still reports once.
#[test]
fn test_no_checks_reports_ok() {
    let output = run_child("empty");
    assert!(output.status.success());
    assert_eq!(summary_lines(&output, "OK"), 1);
}

/// Test that a panicking session body reports errors, never OK.
#[test]
fn test_panic_reports_errors() {
    let output = run_child("panic");
    assert!(!output.status.success());
    assert_eq!(summary_lines(&output, "ERRORS!"), 1);
    assert_eq!(summary_lines(&output, "OK"), 0);
}

/// Test that a color choice parsed from text reaches the summary.
#[test]
fn test_parsed_color_choice() {
    let output = run_child_colored("pass", "Always");
    assert!(output.status.success());
    assert_eq!(summary_lines(&output, "\x1b[32mOK"), 1);
}
