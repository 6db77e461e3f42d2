//! Logging sink module
//!
//! This module provides the [`LogSink`] seam through which the comparator
//! reports progress, diff lines, and failure messages. The embedding host
//! injects the sinks explicitly instead of relying on ambient bindings; the
//! default implementations write to the standard streams.

use std::io::Write;

/// Sink for human-readable report lines
///
/// Implementations must accept arbitrary text and must not fail under
/// normal operation; write errors are swallowed by the provided stream
/// sinks so a broken output channel never turns a comparison into an error.
pub trait LogSink {
    /// Emit one message
    fn emit(&mut self, message: &str);
}

/// Default logging sink writing each message plus a newline to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StdoutSink {
    fn emit(&mut self, message: &str) {
        let stdout = std::io::stdout();
        let _ = writeln!(stdout.lock(), "{message}");
    }
}

/// Failure-reporting sink writing each message plus a newline to stderr
///
/// Kept distinct from [`StdoutSink`] so a host can route failure reports
/// differently from routine progress output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a new stderr sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StderrSink {
    fn emit(&mut self, message: &str) {
        let stderr = std::io::stderr();
        let _ = writeln!(stderr.lock(), "{message}");
    }
}

/// Recording sink that keeps every message in order
///
/// This is the capture sink an embedding harness uses to inspect the diff
/// trail, and the double the test suite asserts against.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Vec<String>,
}

impl MemorySink {
    /// Create a new, empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages emitted so far, in emission order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the sink and return the recorded messages
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Number of messages emitted so far
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been emitted yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl LogSink for MemorySink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
