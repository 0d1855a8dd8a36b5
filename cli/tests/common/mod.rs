//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the spanbench binary.
pub fn spanbench() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spanbench"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Arguments that keep a full run fast.
pub const QUICK: &[&str] = &["--loops", "1", "--iterations", "1", "--warmup", "0"];

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], expected: Expect) {
    let output = spanbench()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}

/// Data lines of a rendered report (header and rule skipped).
pub fn report_rows(stdout: &str) -> Vec<&str> {
    stdout.lines().skip(2).collect()
}
