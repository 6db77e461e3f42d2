//! Application configuration module
//!
//! This module provides the main application configuration structure that
//! combines CLI arguments with harness environment values using a clear
//! priority system.

use super::env_reader::{EnvReader, SystemEnvReader};
use super::harness_config::{ConfigError, HarnessConfig};
use crate::comparator::{DEFAULT_GOLDEN_FILE, DEFAULT_TEST_FILE};
use crate::error::FailureKind;
use std::path::{Path, PathBuf};

/// CLI arguments structure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    /// Candidate file path override
    pub test_file: Option<String>,
    /// Reference file path override
    pub golden_file: Option<String>,
    /// Comma-separated reserved failure kinds (overrides harness env)
    pub reserved: Option<String>,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Candidate file path
    test_file: PathBuf,
    /// Reference file path
    golden_file: PathBuf,
    /// Failure kinds that must propagate instead of being downgraded
    reserved_kinds: Vec<FailureKind>,
}

/// Configuration builder for functional composition
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    test_file: Option<PathBuf>,
    golden_file: Option<PathBuf>,
    reserved_kinds: Option<Vec<FailureKind>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate file path, if resolved
    #[must_use]
    pub fn with_test_file(mut self, path: Option<String>) -> Self {
        self.test_file = path.map(PathBuf::from);
        self
    }

    /// Set the reference file path, if resolved
    #[must_use]
    pub fn with_golden_file(mut self, path: Option<String>) -> Self {
        self.golden_file = path.map(PathBuf::from);
        self
    }

    /// Set the reserved failure kinds, if resolved
    #[must_use]
    pub fn with_reserved_kinds(mut self, kinds: Option<Vec<FailureKind>>) -> Self {
        self.reserved_kinds = kinds;
        self
    }

    /// Build the final AppConfig, applying the conventional defaults
    pub fn build(self) -> AppConfig {
        AppConfig {
            test_file: self
                .test_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEST_FILE)),
            golden_file: self
                .golden_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GOLDEN_FILE)),
            reserved_kinds: self.reserved_kinds.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// Create AppConfig from CLI arguments
    ///
    /// Priority order:
    /// 1. CLI parameters (highest priority)
    /// 2. Harness environment values
    /// 3. Hardcoded defaults (only when the environment is not set)
    pub fn from_cli(cli_args: CliArgs) -> Result<Self, ConfigError> {
        Self::from_cli_with_reader(cli_args, &SystemEnvReader)
    }

    /// Create AppConfig with a custom environment reader (for testing)
    pub fn from_cli_with_reader<R: EnvReader>(
        cli_args: CliArgs,
        reader: &R,
    ) -> Result<Self, ConfigError> {
        let config_builder = ConfigBuilder::new()
            .with_test_file(Self::resolve_path(
                cli_args.test_file.as_deref(),
                "TEST_FILE",
                HarnessConfig::test_file_with_reader(reader)?,
            )?)
            .with_golden_file(Self::resolve_path(
                cli_args.golden_file.as_deref(),
                "GOLDEN_FILE",
                HarnessConfig::golden_file_with_reader(reader)?,
            )?)
            .with_reserved_kinds(Self::resolve_reserved_kinds(&cli_args, reader)?);

        Ok(config_builder.build())
    }

    /// Candidate file path
    pub fn test_file(&self) -> &Path {
        &self.test_file
    }

    /// Reference file path
    pub fn golden_file(&self) -> &Path {
        &self.golden_file
    }

    /// Reserved failure kinds
    pub fn reserved_kinds(&self) -> &[FailureKind] {
        &self.reserved_kinds
    }

    /// Resolve a path-valued setting with CLI priority over the environment
    fn resolve_path(
        cli_value: Option<&str>,
        argument: &str,
        env_value: Option<String>,
    ) -> Result<Option<String>, ConfigError> {
        match cli_value {
            Some(path) => {
                let trimmed = path.trim();
                if trimmed.is_empty() {
                    Err(ConfigError::InvalidCliArgument {
                        argument: argument.to_owned(),
                        value: path.to_owned(),
                        expected: "non-empty file path".to_owned(),
                    })
                } else {
                    Ok(Some(trimmed.to_owned()))
                }
            }
            None => Ok(env_value),
        }
    }

    /// Resolve the reserved kinds with CLI priority over the environment
    fn resolve_reserved_kinds<R: EnvReader>(
        cli_args: &CliArgs,
        reader: &R,
    ) -> Result<Option<Vec<FailureKind>>, ConfigError> {
        match cli_args.reserved.as_deref() {
            Some(list) => Self::parse_cli_reserved_kinds(list).map(Some),
            None => HarnessConfig::reserved_kinds_with_reader(reader),
        }
    }

    /// Parse and validate a CLI reserved-kind list
    fn parse_cli_reserved_kinds(list: &str) -> Result<Vec<FailureKind>, ConfigError> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                FailureKind::from_name(entry).ok_or_else(|| ConfigError::InvalidCliArgument {
                    argument: "reserved".to_owned(),
                    value: entry.to_owned(),
                    expected: "one of: io, decode, processing, config".to_owned(),
                })
            })
            .collect()
    }
}
