//! Shared test support for golden-compare
//!
//! Provides the [`Fixture`] builder that lays out candidate and golden log
//! files in a temporary directory and hands out comparators wired to them.

pub mod fixture;

#[allow(unused_imports)]
pub use fixture::Fixture;
