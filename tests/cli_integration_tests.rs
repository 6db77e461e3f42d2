//! CLI integration tests for main.rs
//!
//! Exercises the binary surface: default path convention, positional
//! overrides, harness environment variables, exit-code mapping, and the
//! stdout/stderr routing of the diff trail vs failure reports.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::Fixture;

fn golden_compare() -> Command {
    Command::cargo_bin("golden-compare").unwrap()
}

/// **What is tested:** Pass outcome with the conventional default file names
/// **Why it is tested:** The binary must pick up test.log/Golden.log from the working directory without any arguments
/// **Test conditions:** Identical files under the default names, binary run inside the fixture directory
/// **Expectations:** Exit code 0, stdout ends in a zero-difference summary
#[test]
fn test_default_paths_pass() {
    let fixture = Fixture::builder()
        .with_test_lines(["line1", "line2"])
        .with_golden_lines(["line1", "line2"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 0 lines of differences"))
        .stderr(predicate::str::is_empty());
}

/// **What is tested:** Fail outcome and diff trail on mismatching files
/// **Why it is tested:** A mismatch must exit 1 and put the full human-readable diff trail on stdout
/// **Test conditions:** Files differing in one line
/// **Expectations:** Exit code 1; stdout carries the loading lines, change markers, and a non-zero summary
#[test]
fn test_mismatch_fails_with_diff_trail() {
    let fixture = Fixture::builder()
        .with_test_lines(["line1", "line2"])
        .with_golden_lines(["line1", "line3"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Loading test case generated data"))
        .stdout(predicate::str::contains("Loading known good data"))
        .stdout(predicate::str::contains("-line2"))
        .stdout(predicate::str::contains("+line3"))
        .stdout(predicate::str::contains("lines of differences"));
}

/// **What is tested:** Positional path overrides
/// **Why it is tested:** The two optional positionals are the binary's whole argument surface and must replace the default names
/// **Test conditions:** Files under non-default names, passed as positionals
/// **Expectations:** Exit code 0 with the overridden name echoed in the loading line
#[test]
fn test_positional_overrides() {
    let fixture = Fixture::builder().build().unwrap();
    std::fs::write(fixture.dir().join("candidate.txt"), "x\n").unwrap();
    std::fs::write(fixture.dir().join("reference.txt"), "x\n").unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .args(["candidate.txt", "reference.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'candidate.txt'"))
        .stdout(predicate::str::contains("'reference.txt'"));
}

/// **What is tested:** Harness environment variables override the defaults
/// **Why it is tested:** An embedding harness configures the tool through GOLDEN_COMPARE_* variables without touching the command line
/// **Test conditions:** Files under non-default names, paths provided via environment
/// **Expectations:** Exit code 0 against the environment-named files
#[test]
fn test_environment_overrides() {
    let fixture = Fixture::builder().build().unwrap();
    std::fs::write(fixture.dir().join("env-test.log"), "a\nb\n").unwrap();
    std::fs::write(fixture.dir().join("env-golden.log"), "a\nb\n").unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .env("GOLDEN_COMPARE_TEST_FILE", "env-test.log")
        .env("GOLDEN_COMPARE_GOLDEN_FILE", "env-golden.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("'env-test.log'"));
}

/// **What is tested:** CLI positionals beat environment variables
/// **Why it is tested:** The documented priority order puts CLI parameters above harness environment values
/// **Test conditions:** Environment points at a missing file, positionals at existing identical files
/// **Expectations:** Exit code 0; the positional paths win
#[test]
fn test_cli_beats_environment() {
    let fixture = Fixture::builder()
        .with_test_lines(["same"])
        .with_golden_lines(["same"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .env("GOLDEN_COMPARE_TEST_FILE", "does-not-exist.log")
        .args(["test.log", "Golden.log"])
        .assert()
        .success();
}

/// **What is tested:** Downgrade of a non-reserved failure at the binary level
/// **Why it is tested:** With no reservation, a missing candidate file must be reported on stderr and exit as a plain fail, not a crash
/// **Test conditions:** Candidate file absent, no reserved kinds configured
/// **Expectations:** Exit code 1; stderr carries the failure report; stdout still shows the first loading line
#[test]
fn test_missing_file_downgrades() {
    let fixture = Fixture::builder()
        .with_golden_lines(["a"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Loading test case generated data"))
        .stderr(predicate::str::contains("Failed to compare result - "));
}

/// **What is tested:** Propagation of a reserved failure at the binary level
/// **Why it is tested:** A harness reserving IO failures must be able to distinguish them (exit 2) from an ordinary mismatch (exit 1)
/// **Test conditions:** Candidate file absent, GOLDEN_COMPARE_RESERVED_ERRORS=io
/// **Expectations:** Exit code 2; stderr carries the raw IO error, not the downgrade wording
#[test]
fn test_reserved_failure_propagates() {
    let fixture = Fixture::builder()
        .with_golden_lines(["a"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .env("GOLDEN_COMPARE_RESERVED_ERRORS", "io")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("IO error"))
        .stderr(predicate::str::contains("Failed to compare result").not());
}

/// **What is tested:** Reserving an unrelated kind still downgrades
/// **Why it is tested:** Reservation is per kind; a decode reservation must not capture an IO failure
/// **Test conditions:** Candidate file absent, GOLDEN_COMPARE_RESERVED_ERRORS=decode
/// **Expectations:** Exit code 1 with the downgrade report
#[test]
fn test_unrelated_reservation_still_downgrades() {
    let fixture = Fixture::builder()
        .with_golden_lines(["a"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .env("GOLDEN_COMPARE_RESERVED_ERRORS", "decode")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to compare result - "));
}

/// **What is tested:** Rejection of a malformed reserved-kind list
/// **Why it is tested:** A typo in the harness configuration must fail resolution loudly instead of silently weakening the reservation
/// **Test conditions:** GOLDEN_COMPARE_RESERVED_ERRORS carries an unknown kind name
/// **Expectations:** Exit code 2 with a configuration error naming the bad value
#[test]
fn test_invalid_reserved_kind_is_config_error() {
    let fixture = Fixture::builder()
        .with_test_lines(["a"])
        .with_golden_lines(["a"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .env("GOLDEN_COMPARE_RESERVED_ERRORS", "io,timeout")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timeout"));
}

/// **What is tested:** Whitespace-only differences pass at the binary level
/// **Why it is tested:** The per-line trim is part of the end-to-end contract, not just the library API
/// **Test conditions:** Candidate lines padded with trailing whitespace
/// **Expectations:** Exit code 0 with a zero summary
#[test]
fn test_whitespace_tolerance_end_to_end() {
    let fixture = Fixture::builder()
        .with_test_lines(["foo  ", "bar\t"])
        .with_golden_lines(["foo", "bar"])
        .build()
        .unwrap();

    golden_compare()
        .current_dir(fixture.dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 0 lines of differences"));
}

/// **What is tested:** Help output of the binary
/// **Why it is tested:** The argument surface is documented through clap; the positionals must appear in usage
/// **Test conditions:** Runs with --help
/// **Expectations:** Exit code 0, usage mentions both positional value names
#[test]
fn test_help_output() {
    golden_compare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEST_FILE"))
        .stdout(predicate::str::contains("GOLDEN_FILE"));
}
