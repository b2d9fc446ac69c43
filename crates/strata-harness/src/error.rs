// crates/strata-harness/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Error type for scratch project provisioning.
// Purpose: Give harness callers one error covering config and disk failures.
// Dependencies: strata-fixtures, thiserror
// ============================================================================

//! ## Overview
//! Provisioning can fail in three ways: the environment configuration is
//! invalid, the fixture provider cannot assemble its inputs, or the
//! filesystem rejects a write. Each gets its own variant so suites can tell
//! a misconfigured run from a broken scratch directory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use strata_fixtures::FixtureError;
use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors produced while provisioning a scratch project.
///
/// # Invariants
/// - `Config` carries the offending environment variable name in its
///   message.
/// - `Fixture` wraps the provider error unchanged.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Environment configuration was invalid.
    #[error("config error: {0}")]
    Config(String),
    /// Fixture assembly failed before anything touched disk.
    #[error("fixture failure: {0}")]
    Fixture(#[from] FixtureError),
    /// Filesystem provisioning failed.
    #[error("io error: {0}")]
    Io(String),
}
