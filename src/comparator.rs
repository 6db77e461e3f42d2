//! Golden-file comparison module
//!
//! This module provides the main comparison functionality: load a candidate
//! log and a reference ("golden") log, trim each line, compute a unified
//! line diff, report every diff line plus a trailing summary through an
//! injected [`LogSink`], and yield a pass/fail outcome.

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::sink::LogSink;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Default candidate file name, resolved against the working directory
pub const DEFAULT_TEST_FILE: &str = "test.log";
/// Default reference file name, resolved against the working directory
pub const DEFAULT_GOLDEN_FILE: &str = "Golden.log";
/// Default number of context lines around each hunk
pub const DEFAULT_CONTEXT_RADIUS: usize = 3;

/// Outcome of one comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOutcome {
    /// True iff zero diff lines were produced
    pub passed: bool,
    /// Number of diff lines emitted through the sink
    pub diff_line_count: usize,
}

/// Main comparator for validating a candidate log against a golden log
///
/// The outcome is a pure function of the two files' trimmed line sequences;
/// no state carries across calls and the only side effect is emission
/// through the injected sink.
#[derive(Debug, Clone)]
pub struct Comparator {
    /// Candidate log produced by the test run
    test_path: PathBuf,
    /// Accepted reference log
    golden_path: PathBuf,
    /// Context lines around each diff hunk
    context_radius: usize,
}

impl Comparator {
    /// Create a comparator with the conventional default paths
    pub fn new() -> Self {
        Comparator {
            test_path: PathBuf::from(DEFAULT_TEST_FILE),
            golden_path: PathBuf::from(DEFAULT_GOLDEN_FILE),
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }

    /// Create a comparator from resolved application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_test_path(config.test_file())
            .with_golden_path(config.golden_file())
    }

    /// Override the candidate file path
    pub fn with_test_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.test_path = path.into();
        self
    }

    /// Override the reference file path
    pub fn with_golden_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.golden_path = path.into();
        self
    }

    /// Override the unified-diff context radius
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Candidate file path this comparator reads
    pub fn test_path(&self) -> &Path {
        &self.test_path
    }

    /// Reference file path this comparator reads
    pub fn golden_path(&self) -> &Path {
        &self.golden_path
    }

    /// Run the comparison once, reporting through the given sink
    ///
    /// Emits one loading announcement per file, every unified-diff line, and
    /// a final `Generated N lines of differences` summary. The returned
    /// outcome passes exactly when `N` is zero, which by unified-diff
    /// semantics happens iff the trimmed line sequences are identical.
    pub fn compare<S: LogSink + ?Sized>(&self, sink: &mut S) -> Result<CompareOutcome> {
        sink.emit(&format!(
            "Loading test case generated data '{}'...",
            self.test_path.display()
        ));
        let test_lines = Self::load_lines(&self.test_path)?;

        sink.emit(&format!(
            "Loading known good data '{}'...",
            self.golden_path.display()
        ));
        let golden_lines = Self::load_lines(&self.golden_path)?;

        let mut diff_count = 0_usize;
        for line in self.unified_diff_lines(&test_lines, &golden_lines) {
            diff_count += 1;
            sink.emit(&line);
        }

        sink.emit(&format!("Generated {diff_count} lines of differences"));

        Ok(CompareOutcome {
            passed: diff_count == 0,
            diff_line_count: diff_count,
        })
    }

    /// Read a file fully as strict UTF-8 and split it into trimmed lines
    ///
    /// Splitting is universal (`\n` and `\r\n`); trimming strips whitespace
    /// from both ends of every line.
    fn load_lines(path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|source| Error::io_error(path, source))?;
        let content = String::from_utf8(bytes).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(content.lines().map(|line| line.trim().to_owned()).collect())
    }

    /// Produce the unified-diff lines between the two trimmed sequences
    ///
    /// The candidate is the "from" side, the golden file the "to" side. The
    /// `---`/`+++` file header pair is produced only when at least one hunk
    /// exists, so an empty return value means the sequences are identical.
    fn unified_diff_lines(&self, test: &[String], golden: &[String]) -> Vec<String> {
        let test_refs: Vec<&str> = test.iter().map(String::as_str).collect();
        let golden_refs: Vec<&str> = golden.iter().map(String::as_str).collect();
        let diff = TextDiff::from_slices(&test_refs, &golden_refs);

        let mut lines = Vec::new();
        for (index, group) in diff.grouped_ops(self.context_radius).iter().enumerate() {
            if index == 0 {
                lines.push(format!("--- {}", self.test_path.display()));
                lines.push(format!("+++ {}", self.golden_path.display()));
            }

            if let (Some(first), Some(last)) = (group.first(), group.last()) {
                let old = first.old_range().start..last.old_range().end;
                let new = first.new_range().start..last.new_range().end;
                lines.push(format!(
                    "@@ -{} +{} @@",
                    format_range(&old),
                    format_range(&new)
                ));
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let sign = match change.tag() {
                        ChangeTag::Delete => '-',
                        ChangeTag::Insert => '+',
                        ChangeTag::Equal => ' ',
                    };
                    lines.push(format!("{sign}{}", change.value()));
                }
            }
        }

        lines
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a hunk range per the unified-diff convention
///
/// The start is 1-based; a single-line range drops the length, an empty
/// range keeps the 0-based position.
fn format_range(range: &Range<usize>) -> String {
    let mut beginning = range.start + 1;
    let length = range.end - range.start;
    if length == 1 {
        return beginning.to_string();
    }
    if length == 0 {
        beginning -= 1;
    }
    format!("{beginning},{length}")
}
