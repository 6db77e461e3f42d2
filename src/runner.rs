//! Invocation wrapper module
//!
//! This module provides the top-level policy around a single comparison
//! run: failures whose kind the host has reserved propagate unchanged,
//! every other failure is reported through the failure sink and downgraded
//! to a `false` outcome.

use crate::comparator::Comparator;
use crate::error::{FailureKind, Result};
use crate::sink::LogSink;
use std::collections::BTreeSet;

/// Runs a [`Comparator`] once under the reserved-failure policy
///
/// The reserved set defaults to empty, in which case every failure is
/// downgraded after being reported.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    /// Failure kinds that must propagate instead of being downgraded
    reserved: BTreeSet<FailureKind>,
}

impl Runner {
    /// Create a runner with an empty reserved set
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare failure kinds that must propagate to the caller
    pub fn with_reserved_kinds<I>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = FailureKind>,
    {
        self.reserved.extend(kinds);
        self
    }

    /// Whether a failure of the given kind would propagate
    pub fn is_reserved(&self, kind: FailureKind) -> bool {
        self.reserved.contains(&kind)
    }

    /// Run the comparison once and apply the failure policy
    ///
    /// Returns the comparator's pass/fail outcome on success. On failure,
    /// a reserved kind is re-raised unchanged; anything else is described
    /// on the failure sink and converted to `Ok(false)`.
    pub fn run<L, F>(&self, comparator: &Comparator, log: &mut L, failure: &mut F) -> Result<bool>
    where
        L: LogSink + ?Sized,
        F: LogSink + ?Sized,
    {
        match comparator.compare(log) {
            Ok(outcome) => Ok(outcome.passed),
            Err(error) if self.is_reserved(error.kind()) => Err(error),
            Err(error) => {
                failure.emit(&format!("Failed to compare result - {error}"));
                Ok(false)
            }
        }
    }
}
