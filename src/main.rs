//! CLI entry point for golden-compare
//!
//! Compares a candidate log against a golden reference log and maps the
//! outcome to the process exit code: 0 for a pass, 1 for a mismatch or a
//! downgraded failure, 2 for a propagated reserved failure or a
//! configuration error.

use clap::Parser;
use std::process::ExitCode;

use golden_compare::{Comparator, ConfigError, Runner, StderrSink, StdoutSink};

/// Golden-file comparison helper for regression test logs
#[derive(Parser)]
#[command(name = "golden-compare")]
#[command(version, about, long_about = None)]
struct Args {
    /// Candidate log file (defaults to 'test.log' in the working directory)
    #[arg(value_name = "TEST_FILE")]
    test_file: Option<String>,

    /// Golden reference log file (defaults to 'Golden.log' in the working directory)
    #[arg(value_name = "GOLDEN_FILE")]
    golden_file: Option<String>,
}

/// Convert CLI args to CliArgs struct for AppConfig
impl From<Args> for golden_compare::config::CliArgs {
    fn from(args: Args) -> Self {
        Self {
            test_file: args.test_file,
            golden_file: args.golden_file,
            // Reserved kinds are harness-environment territory; the binary
            // exposes no flag for them.
            reserved: None,
        }
    }
}

/// Handle configuration errors with user-friendly messages
fn handle_config_error(error: ConfigError) -> ! {
    eprintln!("{error}");
    std::process::exit(2);
}

fn main() -> ExitCode {
    let config = Args::parse()
        .pipe(golden_compare::config::CliArgs::from)
        .pipe(golden_compare::AppConfig::from_cli)
        .unwrap_or_else(|error| handle_config_error(error));

    let comparator = Comparator::from_config(&config);
    let runner = Runner::new().with_reserved_kinds(config.reserved_kinds().iter().copied());

    let mut log = StdoutSink::new();
    let mut failure = StderrSink::new();

    match runner.run(&comparator, &mut log, &mut failure) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(2)
        }
    }
}

/// Helper trait for functional pipeline composition
trait Pipe<T> {
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
        Self: Sized;
}

impl<T> Pipe<T> for T {
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }
}
