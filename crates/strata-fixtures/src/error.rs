// crates/strata-fixtures/src/error.rs
// ============================================================================
// Module: Fixture Errors
// Description: Error type for fixture assembly and seed retrieval.
// Purpose: Surface missing seed data and read failures as typed conditions.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Fixture operations are total except for seed retrieval, which reads from a
//! caller-supplied data directory. A missing required seed file is a distinct
//! condition from any other read failure: it means the test environment is
//! broken and setup must fail loudly, with no retries and no partial output.

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised by fixture operations.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
/// - `SeedNotFound` is reserved for absent required seed files; every other
///   read failure maps to `Io`.
///
/// # Examples
/// ```
/// use strata_fixtures::FixtureError;
///
/// let err = FixtureError::SeedNotFound("seed.csv".to_string());
/// assert!(matches!(err, FixtureError::SeedNotFound(name) if name == "seed.csv"));
/// ```
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A required seed data file was absent from the supplied data directory.
    #[error("seed file not found: {0}")]
    SeedNotFound(String),
    /// IO error while reading seed data.
    #[error("io error: {0}")]
    Io(String),
    /// YAML parse error in a fixture document.
    #[error("yaml error: {0}")]
    Yaml(String),
}
