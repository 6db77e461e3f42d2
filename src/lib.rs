//! golden-compare library
//!
//! A golden-file comparison helper for regression test logs: reads a freshly
//! generated log and a reference ("golden") log, trims both line by line,
//! computes a unified diff, reports every diff line through an injected
//! sink, and yields a pass/fail outcome.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use golden_compare::{Comparator, MemorySink};
//! use std::fs;
//!
//! let dir = tempfile::tempdir()?;
//! fs::write(dir.path().join("test.log"), "line1\nline2\n")?;
//! fs::write(dir.path().join("Golden.log"), "line1\nline2\n")?;
//!
//! let comparator = Comparator::new()
//!     .with_test_path(dir.path().join("test.log"))
//!     .with_golden_path(dir.path().join("Golden.log"));
//!
//! let mut sink = MemorySink::new();
//! let outcome = comparator.compare(&mut sink)?;
//! assert!(outcome.passed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod runner;
pub mod sink;

pub use comparator::{CompareOutcome, Comparator};
pub use config::{AppConfig, CliArgs, ConfigError};
pub use error::{Error, FailureKind, Result};
pub use runner::Runner;
pub use sink::{LogSink, MemorySink, StderrSink, StdoutSink};
