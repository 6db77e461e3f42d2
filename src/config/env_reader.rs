//! Environment reader module
//!
//! This module provides the low-level abstraction over the harness-provided
//! process environment, with error handling for reading configuration
//! values.

use std::env;

use thiserror::Error;

/// Environment-specific errors that can occur while reading variables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Variable is set but its value is not valid Unicode
    #[error("Environment variable '{key}' is not valid Unicode")]
    NotUnicode { key: String },
}

/// Trait for reading harness environment variables
///
/// An unset variable reads as `Ok(None)`; only a malformed value is an
/// error. This is the seam the test suite replaces with a mock.
pub trait EnvReader {
    /// Get an environment variable value by key
    fn get_var(&self, key: &str) -> Result<Option<String>, EnvError>;
}

/// System environment reader backed by the actual process environment
pub struct SystemEnvReader;

impl EnvReader for SystemEnvReader {
    fn get_var(&self, key: &str) -> Result<Option<String>, EnvError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                key: key.to_owned(),
            }),
        }
    }
}

/// Mock environment reader for testing
#[cfg(test)]
pub struct MockEnvReader {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl Default for MockEnvReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl MockEnvReader {
    /// Create a new mock reader with no variables set
    pub fn new() -> Self {
        Self {
            vars: std::collections::HashMap::new(),
        }
    }

    /// Add a variable to the mock environment
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

#[cfg(test)]
impl EnvReader for MockEnvReader {
    fn get_var(&self, key: &str) -> Result<Option<String>, EnvError> {
        Ok(self.vars.get(key).cloned())
    }
}
