//! Harness configuration module
//!
//! This module provides typed reads of the harness-provided environment
//! variables with validation and error handling for golden-compare
//! settings.

use super::env_reader::{EnvError, EnvReader, SystemEnvReader};
use crate::error::FailureKind;

use thiserror::Error;

/// Environment variable overriding the candidate file path
pub const TEST_FILE_KEY: &str = "GOLDEN_COMPARE_TEST_FILE";
/// Environment variable overriding the reference file path
pub const GOLDEN_FILE_KEY: &str = "GOLDEN_COMPARE_GOLDEN_FILE";
/// Environment variable listing reserved failure kinds, comma-separated
pub const RESERVED_ERRORS_KEY: &str = "GOLDEN_COMPARE_RESERVED_ERRORS";

/// Configuration errors that can occur during resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid harness environment value
    #[error("Invalid harness setting: {key}='{value}' (expected: {expected})")]
    InvalidHarnessValue {
        key: String,
        value: String,
        expected: String,
    },
    /// Invalid CLI argument value
    #[error("Invalid CLI argument: {argument}='{value}' (expected: {expected})")]
    InvalidCliArgument {
        argument: String,
        value: String,
        expected: String,
    },
    /// Environment access error
    #[error("Environment error: {message}")]
    Env { message: String },
}

impl From<EnvError> for ConfigError {
    fn from(error: EnvError) -> Self {
        ConfigError::Env {
            message: error.to_string(),
        }
    }
}

/// Harness configuration operations
pub struct HarnessConfig;

impl HarnessConfig {
    /// Get the candidate file override from the harness environment
    pub fn test_file() -> Result<Option<String>, ConfigError> {
        Self::test_file_with_reader(&SystemEnvReader)
    }

    /// Get the candidate file override with a custom reader (for testing)
    pub fn test_file_with_reader<R: EnvReader>(reader: &R) -> Result<Option<String>, ConfigError> {
        Self::non_empty_path(reader, TEST_FILE_KEY)
    }

    /// Get the reference file override from the harness environment
    pub fn golden_file() -> Result<Option<String>, ConfigError> {
        Self::golden_file_with_reader(&SystemEnvReader)
    }

    /// Get the reference file override with a custom reader (for testing)
    pub fn golden_file_with_reader<R: EnvReader>(
        reader: &R,
    ) -> Result<Option<String>, ConfigError> {
        Self::non_empty_path(reader, GOLDEN_FILE_KEY)
    }

    /// Get the reserved failure kinds from the harness environment
    pub fn reserved_kinds() -> Result<Option<Vec<FailureKind>>, ConfigError> {
        Self::reserved_kinds_with_reader(&SystemEnvReader)
    }

    /// Get the reserved failure kinds with a custom reader (for testing)
    ///
    /// The value is a comma-separated list of kind names; entries are
    /// trimmed and empty entries dropped. An unknown name is an error,
    /// never a silent default.
    pub fn reserved_kinds_with_reader<R: EnvReader>(
        reader: &R,
    ) -> Result<Option<Vec<FailureKind>>, ConfigError> {
        reader
            .get_var(RESERVED_ERRORS_KEY)?
            .map(|value| Self::parse_reserved_kinds(&value, RESERVED_ERRORS_KEY))
            .transpose()
    }

    /// Read a path-valued variable, rejecting whitespace-only values
    fn non_empty_path<R: EnvReader>(reader: &R, key: &str) -> Result<Option<String>, ConfigError> {
        reader
            .get_var(key)?
            .map(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(ConfigError::InvalidHarnessValue {
                        key: key.to_owned(),
                        value,
                        expected: "non-empty file path".to_owned(),
                    })
                } else {
                    Ok(trimmed.to_owned())
                }
            })
            .transpose()
    }

    /// Parse a comma-separated failure-kind list
    fn parse_reserved_kinds(value: &str, key: &str) -> Result<Vec<FailureKind>, ConfigError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                FailureKind::from_name(entry).ok_or_else(|| ConfigError::InvalidHarnessValue {
                    key: key.to_owned(),
                    value: entry.to_owned(),
                    expected: "one of: io, decode, processing, config".to_owned(),
                })
            })
            .collect()
    }
}
