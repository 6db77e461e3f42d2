//! Error handling module
//!
//! This module provides unified error handling for the golden-compare
//! application, plus the [`FailureKind`] classification consumed by the
//! reserved-failure policy in [`crate::runner`].

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while reading one of the compared files
    #[error("IO error reading '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Compared file is not valid UTF-8 text
    #[error("'{path}' is not valid UTF-8 text: {source}", path = .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    /// Processing errors with custom messages
    #[error("Processing error: {0}")]
    Processing(String),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    /// Create a processing error with a custom message
    pub fn processing_error(message: String) -> Self {
        Error::Processing(message)
    }

    /// Wrap an IO error together with the path it occurred on
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error for the reserved-failure policy
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Io { .. } => FailureKind::Io,
            Error::Decode { .. } => FailureKind::Decode,
            Error::Processing(_) => FailureKind::Processing,
            Error::Config(_) => FailureKind::Config,
        }
    }
}

/// Coarse failure classification used by the reserved-failure allow-list
///
/// A host harness declares which kinds must propagate out of a comparison
/// run instead of being downgraded to a `false` outcome. Kinds have stable
/// lower-case names so they can be listed in harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    /// File missing, unreadable, or any other IO failure
    Io,
    /// File content is not valid UTF-8
    Decode,
    /// Generic processing failure
    Processing,
    /// Configuration resolution failure
    Config,
}

impl FailureKind {
    /// All kinds, in name order
    pub const ALL: [FailureKind; 4] = [
        FailureKind::Config,
        FailureKind::Decode,
        FailureKind::Io,
        FailureKind::Processing,
    ];

    /// Stable lower-case name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            FailureKind::Io => "io",
            FailureKind::Decode => "decode",
            FailureKind::Processing => "processing",
            FailureKind::Config => "config",
        }
    }

    /// Parse a kind from its stable name, case-insensitively
    ///
    /// Returns `None` for unknown names; the configuration layer turns that
    /// into a validation error rather than silently defaulting.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "io" => Some(FailureKind::Io),
            "decode" => Some(FailureKind::Decode),
            "processing" => Some(FailureKind::Processing),
            "config" => Some(FailureKind::Config),
            _ => None,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
