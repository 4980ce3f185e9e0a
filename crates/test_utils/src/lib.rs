//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! loan underwriting test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built clients, products, and dates
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Assertion helpers for decimal amounts and rates
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
