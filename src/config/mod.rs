//! Configuration module for golden-compare
//!
//! This module provides a unified configuration system that combines CLI
//! arguments with harness-provided environment values using strict error
//! handling and clear priority logic.
//!
//! # Architecture
//!
//! The configuration system is built with a layered architecture:
//!
//! - [`env_reader`] - Low-level environment abstraction with error handling
//! - [`harness_config`] - Typed harness settings with validation
//! - [`app_config`] - High-level application configuration with CLI integration
//!
//! # Error Handling
//!
//! The configuration system uses strict error handling:
//!
//! - Malformed environment values result in [`ConfigError`], not fallback to
//!   defaults
//! - Unknown reserved-failure names result in [`ConfigError`], not a weaker
//!   reservation
//! - Only when a setting is not provided at all are default values used
//!
//! # Priority Logic
//!
//! Configuration values are resolved with the following priority:
//!
//! 1. CLI parameters (highest priority)
//! 2. Harness environment values (`GOLDEN_COMPARE_*`)
//! 3. Hardcoded defaults (only when the environment is not set)
//!
//! # Usage
//!
//! The main entry point is [`AppConfig::from_cli()`] which creates a fully
//! resolved configuration:
//!
//! ```rust
//! use golden_compare::config::{AppConfig, CliArgs};
//!
//! let cli_args = CliArgs {
//!     test_file: Some("out/run.log".to_owned()),
//!     golden_file: None,
//!     reserved: None,
//! };
//!
//! let config = AppConfig::from_cli(cli_args)?;
//! assert_eq!(config.test_file(), std::path::Path::new("out/run.log"));
//! # Ok::<(), golden_compare::config::ConfigError>(())
//! ```
//!
//! # Testing
//!
//! The configuration system provides mock implementations for testing:
//!
//! - `MockEnvReader` for simulating harness environments
//! - All modules include unit tests with error scenarios

// Public modules
pub mod app_config;
pub mod env_reader;
pub mod harness_config;

// Re-export public types for convenient access
pub use app_config::{AppConfig, CliArgs, ConfigBuilder};
pub use env_reader::{EnvError, EnvReader, SystemEnvReader};
pub use harness_config::{ConfigError, HarnessConfig};

// Re-export mock types for testing
#[cfg(test)]
pub use env_reader::MockEnvReader;
